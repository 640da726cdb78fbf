use sqlx::{Connection, PgConnection};

use crate::{catalog::distinct_titles, models::Service, AppResult};

pub async fn list_services(conn: &mut PgConnection) -> AppResult<Vec<Service>> {
    let services = sqlx::query_as::<_, Service>(r#"SELECT id, title FROM services ORDER BY id"#)
        .fetch_all(&mut *conn)
        .await?;
    Ok(services)
}

/// Inserts every title not already present, in list order, as one transaction.
/// Returns how many rows were inserted; titles that already exist are skipped.
pub async fn seed_services<S: AsRef<str>>(conn: &mut PgConnection, titles: &[S]) -> AppResult<u64> {
    let titles = distinct_titles(titles);
    if titles.is_empty() {
        return Ok(0);
    }

    let mut tx = conn.begin().await?;

    let result = sqlx::query(
        r#"
        INSERT INTO services (title)
        SELECT t.title
        FROM UNNEST($1::text[]) WITH ORDINALITY AS t(title, position)
        ORDER BY t.position
        ON CONFLICT (title) DO NOTHING
        "#,
    )
    .bind(&titles)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    let inserted = result.rows_affected();
    tracing::info!(
        inserted,
        skipped = titles.len() as u64 - inserted,
        "Service catalog seeded"
    );
    Ok(inserted)
}
