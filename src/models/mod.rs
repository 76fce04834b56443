pub mod submission;

pub use submission::{ContactFields, MissingField, NewSubmission, Submission};
