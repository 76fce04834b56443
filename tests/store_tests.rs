use sqlx::postgres::PgPoolOptions;

use portfolio::db::{self, PgSubmissionStore, SubmissionStore};
use portfolio::models::{ContactFields, NewSubmission};

fn jane() -> NewSubmission {
    NewSubmission::parse(ContactFields {
        name: Some("Jane Doe".to_string()),
        email: Some("jane@x.com".to_string()),
        subject: Some("Hiring".to_string()),
        message: Some("Let's talk".to_string()),
    })
    .unwrap()
}

#[tokio::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn save_assigns_distinct_ids_and_schema_is_idempotent() {
    let _ = dotenvy::dotenv();
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for store tests");

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("Failed to connect to database");

    db::ensure_schema(&pool).await.unwrap();
    db::ensure_schema(&pool).await.unwrap();

    let store = PgSubmissionStore::new(pool.clone());
    let first = store.save(&jane()).await.unwrap();
    let second = store.save(&jane()).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.name, "Jane Doe");
    assert_eq!(first.message, "Let's talk");

    let stored: (String, String, String, String) = sqlx::query_as(
        "SELECT name, email, subject, message FROM submissions WHERE id = $1",
    )
    .bind(first.id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(
        stored,
        (
            "Jane Doe".to_string(),
            "jane@x.com".to_string(),
            "Hiring".to_string(),
            "Let's talk".to_string()
        )
    );

    sqlx::query("DELETE FROM submissions WHERE id = ANY($1)")
        .bind(vec![first.id, second.id])
        .execute(&pool)
        .await
        .unwrap();
}
