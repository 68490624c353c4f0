//! Schema creation and default data

use sqlx::PgPool;

use crate::store::DEFAULT_CATEGORIES;

/// Create the `categories` and `questions` tables if missing.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running trivia migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id BIGSERIAL PRIMARY KEY,
            type TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id BIGSERIAL PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category BIGINT NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
            difficulty INTEGER NOT NULL CHECK (difficulty BETWEEN 1 AND 5)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category)")
        .execute(pool)
        .await?;

    tracing::info!("Trivia migrations complete");
    Ok(())
}

/// Insert the default categories, skipping any that already exist.
///
/// Returns how many rows were inserted.
pub async fn seed_categories(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for kind in DEFAULT_CATEGORIES {
        let result = sqlx::query("INSERT INTO categories (type) VALUES ($1) ON CONFLICT (type) DO NOTHING")
            .bind(kind)
            .execute(&mut *tx)
            .await?;
        inserted += result.rows_affected();
    }

    tx.commit().await?;
    tracing::info!(inserted, "Default categories seeded");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migrations_and_seed_are_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        run(&pool).await.expect("first migration failed");
        run(&pool).await.expect("second migration failed");

        seed_categories(&pool).await.expect("seed failed");
        let second = seed_categories(&pool).await.expect("reseed failed");
        assert_eq!(second, 0);
    }
}
