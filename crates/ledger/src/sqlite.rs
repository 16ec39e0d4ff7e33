//! SQLite-backed expense store.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::Expense;
use crate::store::{today, ExpenseStore};

/// Rows inserted by [`SqliteLedger::seed_if_empty`] when the table is empty.
const MOCK_DATA: &[(&str, f64, &str, &str)] = &[
    ("2025-03-01", 50.0, "Food", "Groceries"),
    ("2025-03-02", 20.0, "Transport", "Bus fare"),
    ("2025-03-03", 100.0, "Entertainment", "Movie tickets"),
];

/// SQLite-backed expense store.
#[derive(Debug, Clone)]
pub struct SqliteLedger {
    pool: SqlitePool,
}

impl SqliteLedger {
    /// Default pool size for database connections.
    const DEFAULT_POOL_SIZE: u32 = 5;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> ledger::Result<()> {
    /// // File database
    /// let db = ledger::SqliteLedger::connect("sqlite:db/transactions.db?mode=rwc").await?;
    ///
    /// // In-memory database (for testing)
    /// let db = ledger::SqliteLedger::connect("sqlite::memory:").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self> {
        // Each connection to :memory: gets its own private database, so an
        // in-memory ledger must stay on a single connection.
        let pool_size = if url.contains(":memory:") {
            1
        } else {
            Self::DEFAULT_POOL_SIZE
        };
        Self::connect_with_pool_size(url, pool_size).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!("Connected to ledger database: {} (pool size: {})", url, pool_size);

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// This should be called once after connecting to ensure the schema is
    /// up to date.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Ledger migrations complete");
        Ok(())
    }

    /// Insert the demo transactions if the table is empty.
    pub async fn seed_if_empty(&self) -> Result<()> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM expenses")
            .fetch_one(&self.pool)
            .await?;

        if count > 0 {
            return Ok(());
        }

        for (date, amount, category, description) in MOCK_DATA {
            sqlx::query(
                r#"
                INSERT INTO expenses (date, amount, category, description)
                VALUES (?, ?, ?, ?)
                "#,
            )
            .bind(date)
            .bind(amount)
            .bind(category)
            .bind(description)
            .execute(&self.pool)
            .await?;
        }

        tracing::info!("Seeded ledger with {} demo transactions", MOCK_DATA.len());
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ExpenseStore for SqliteLedger {
    async fn append(&self, amount: f64, category: &str, description: &str) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO expenses (date, amount, category, description)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(today())
        .bind(amount)
        .bind(category)
        .bind(description)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn list_all(&self) -> Result<Vec<Expense>> {
        let rows = sqlx::query_as::<_, Expense>(
            r#"
            SELECT id, date, amount, category, description
            FROM expenses
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn total(&self) -> Result<f64> {
        let total: f64 = sqlx::query_scalar("SELECT COALESCE(SUM(amount), 0.0) FROM expenses")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_ledger() -> SqliteLedger {
        let ledger = SqliteLedger::connect("sqlite::memory:").await.unwrap();
        ledger.migrate().await.unwrap();
        ledger
    }

    #[tokio::test]
    async fn test_append_and_list() {
        let ledger = test_ledger().await;

        let first = ledger.append(50.0, "Food", "Groceries").await.unwrap();
        let second = ledger.append(20.0, "Transport", "Bus fare").await.unwrap();
        assert_ne!(first, second);

        let all = ledger.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, first);
        assert_eq!(all[0].amount, 50.0);
        assert_eq!(all[0].category, "Food");
        assert_eq!(all[1].description, "Bus fare");
    }

    #[tokio::test]
    async fn test_total_tracks_appends() {
        let ledger = test_ledger().await;
        assert_eq!(ledger.total().await.unwrap(), 0.0);

        ledger.append(50.0, "Food", "Groceries").await.unwrap();
        ledger.append(20.0, "Transport", "Bus fare").await.unwrap();
        ledger.append(100.0, "Entertainment", "Movies").await.unwrap();

        assert!((ledger.total().await.unwrap() - 170.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_seed_if_empty_is_idempotent() {
        let ledger = test_ledger().await;

        ledger.seed_if_empty().await.unwrap();
        ledger.seed_if_empty().await.unwrap();

        let all = ledger.list_all().await.unwrap();
        assert_eq!(all.len(), 3);
        assert!((ledger.total().await.unwrap() - 170.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_append_stamps_today() {
        let ledger = test_ledger().await;
        ledger.append(1.0, "Misc", "Test").await.unwrap();

        let all = ledger.list_all().await.unwrap();
        assert_eq!(all[0].date, today());
    }
}
