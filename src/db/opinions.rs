use sqlx::PgConnection;

use crate::{
    models::{CreateOpinionInput, Opinion},
    AppError, AppResult,
};

use super::workers::ensure_worker_exists;

/// Stores an opinion for an existing worker; `created_at` is set by the database at insert.
pub async fn insert_opinion(
    conn: &mut PgConnection,
    worker_id: i32,
    input: &CreateOpinionInput,
) -> AppResult<Opinion> {
    ensure_worker_exists(conn, worker_id).await?;

    let opinion = sqlx::query_as::<_, Opinion>(
        r#"
        INSERT INTO opinions (worker_id, comment, rating)
        VALUES ($1, $2, $3)
        RETURNING id, worker_id, comment, rating, created_at
        "#,
    )
    .bind(worker_id)
    .bind(input.comment.trim())
    .bind(input.rating)
    .fetch_one(&mut *conn)
    .await
    .map_err(|e| AppError::not_found_on_foreign_key(e, format!("Worker {} not found", worker_id)))?;

    Ok(opinion)
}

/// Opinions for a worker, newest first.
pub async fn list_opinions_for_worker(conn: &mut PgConnection, worker_id: i32) -> AppResult<Vec<Opinion>> {
    ensure_worker_exists(conn, worker_id).await?;

    let opinions = sqlx::query_as::<_, Opinion>(
        r#"
        SELECT id, worker_id, comment, rating, created_at
        FROM opinions
        WHERE worker_id = $1
        ORDER BY id DESC
        "#,
    )
    .bind(worker_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(opinions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{insert_worker, prepared_conn};
    use sqlx::PgPool;

    fn opinion(comment: &str, rating: i32) -> CreateOpinionInput {
        CreateOpinionInput {
            comment: comment.to_string(),
            rating,
        }
    }

    #[sqlx::test(migrations = false)]
    #[ignore = "requires a Postgres DATABASE_URL"]
    async fn lists_newest_first(pool: PgPool) {
        let mut conn = prepared_conn(&pool).await;
        let worker_id = insert_worker(&mut conn, "Juan", "1").await;
        let other_id = insert_worker(&mut conn, "Ana", "2").await;

        let o1 = insert_opinion(&mut conn, worker_id, &opinion("Puntual", 4)).await.unwrap();
        insert_opinion(&mut conn, other_id, &opinion("Otro", 2)).await.unwrap();
        let o2 = insert_opinion(&mut conn, worker_id, &opinion("Prolijo", 5)).await.unwrap();
        let o3 = insert_opinion(&mut conn, worker_id, &opinion("Regular", 3)).await.unwrap();

        let listed = list_opinions_for_worker(&mut conn, worker_id).await.unwrap();
        assert_eq!(listed, vec![o3.clone(), o2.clone(), o1.clone()]);
        assert_eq!(listed[0].rating, 3);
    }

    #[sqlx::test(migrations = false)]
    #[ignore = "requires a Postgres DATABASE_URL"]
    async fn timestamps_are_taken_per_insert(pool: PgPool) {
        let mut conn = prepared_conn(&pool).await;
        let worker_id = insert_worker(&mut conn, "Juan", "1").await;

        let first = insert_opinion(&mut conn, worker_id, &opinion("Primera", 4)).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        let second = insert_opinion(&mut conn, worker_id, &opinion("Segunda", 4)).await.unwrap();

        assert!(second.created_at > first.created_at);
    }

    #[sqlx::test(migrations = false)]
    #[ignore = "requires a Postgres DATABASE_URL"]
    async fn unknown_worker_is_not_found(pool: PgPool) {
        let mut conn = prepared_conn(&pool).await;

        assert!(matches!(
            insert_opinion(&mut conn, 404, &opinion("Hola", 3)).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            list_opinions_for_worker(&mut conn, 404).await,
            Err(AppError::NotFound(_))
        ));
    }
}
