pub mod parser;
pub mod workflow;
