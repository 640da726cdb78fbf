use sqlx::PgConnection;

use crate::{models::TrackingPingInput, AppResult};

/// Appends a ping. There is no read path.
pub async fn insert_ping(conn: &mut PgConnection, ping: &TrackingPingInput) -> AppResult<i32> {
    let id = sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO tracking_pings (date, time, device_identifier, latitude, longitude)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(&ping.date)
    .bind(&ping.time)
    .bind(&ping.device_identifier)
    .bind(&ping.latitude)
    .bind(&ping.longitude)
    .fetch_one(&mut *conn)
    .await?;

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::prepared_conn;
    use sqlx::PgPool;

    #[sqlx::test(migrations = false)]
    #[ignore = "requires a Postgres DATABASE_URL"]
    async fn appends_pings_verbatim(pool: PgPool) {
        let mut conn = prepared_conn(&pool).await;
        let ping = TrackingPingInput {
            date: "14/07/2025".to_string(),
            time: "18:30".to_string(),
            device_identifier: "moto-g-7".to_string(),
            latitude: "-32.9468".to_string(),
            longitude: "-60.6393".to_string(),
        };

        let first = insert_ping(&mut conn, &ping).await.unwrap();
        let second = insert_ping(&mut conn, &ping).await.unwrap();
        assert!(second > first);

        let stored: (String, String) =
            sqlx::query_as("SELECT device_identifier, latitude FROM tracking_pings WHERE id = $1")
                .bind(first)
                .fetch_one(&mut *conn)
                .await
                .unwrap();
        assert_eq!(stored, ("moto-g-7".to_string(), "-32.9468".to_string()));
    }
}
