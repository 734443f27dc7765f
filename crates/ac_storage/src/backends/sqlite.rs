use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ac_core::{Article, ArticleInput, ArticleStore, Error, ListOrder, Result};

const MIGRATIONS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS articles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        create_time TEXT,
        description TEXT,
        content TEXT NOT NULL
    )
    "#,
    // Add future migrations here
];

pub struct SqliteStorage {
    pool: Arc<SqlitePool>,
    db_path: PathBuf,
}

impl SqliteStorage {
    pub async fn new_with_path(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(db_err)?;

        for migration in MIGRATIONS {
            sqlx::query(migration).execute(&pool).await.map_err(db_err)?;
        }

        Ok(Self {
            pool: Arc::new(pool),
            db_path: db_path.to_path_buf(),
        })
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

fn db_err(e: sqlx::Error) -> Error {
    Error::Database(e.to_string())
}

fn row_to_article(row: &SqliteRow) -> Result<Article> {
    let create_time = match row.get::<Option<String>, _>("create_time") {
        Some(raw) => Some(
            chrono::DateTime::parse_from_rfc3339(&raw)
                .map_err(|e| Error::Database(format!("bad create_time in row: {e}")))?
                .with_timezone(&Utc),
        ),
        None => None,
    };

    Ok(Article {
        id: row.get("id"),
        title: row.get("title"),
        create_time,
        description: row.get("description"),
        content: row.get("content"),
    })
}

#[async_trait]
impl ArticleStore for SqliteStorage {
    async fn create(&self, input: ArticleInput) -> Result<Article> {
        input.validate()?;
        let create_time = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO articles (title, create_time, description, content)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&input.title)
        .bind(create_time.to_rfc3339())
        .bind(input.description.as_deref())
        .bind(&input.content)
        .execute(&*self.pool)
        .await
        .map_err(db_err)?;

        self.get(result.last_insert_rowid()).await
    }

    async fn get(&self, id: i64) -> Result<Article> {
        let row = sqlx::query("SELECT * FROM articles WHERE id = ?")
            .bind(id)
            .fetch_optional(&*self.pool)
            .await
            .map_err(db_err)?
            .ok_or(Error::NotFound(id))?;
        row_to_article(&row)
    }

    async fn update(&self, id: i64, input: ArticleInput) -> Result<Article> {
        input.validate()?;
        // create_time is deliberately left untouched.
        let result = sqlx::query(
            r#"
            UPDATE articles
            SET title = ?, description = ?, content = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.title)
        .bind(input.description.as_deref())
        .bind(&input.content)
        .bind(id)
        .execute(&*self.pool)
        .await
        .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(id));
        }
        self.get(id).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(id)
            .execute(&*self.pool)
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(id));
        }
        Ok(())
    }

    async fn list(&self, order: ListOrder) -> Result<Vec<Article>> {
        let query = match order {
            ListOrder::IdAsc => "SELECT * FROM articles ORDER BY id ASC",
            ListOrder::IdDesc => "SELECT * FROM articles ORDER BY id DESC",
        };
        let rows = sqlx::query(query)
            .fetch_all(&*self.pool)
            .await
            .map_err(db_err)?;

        rows.iter().map(row_to_article).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn input(title: &str) -> ArticleInput {
        ArticleInput {
            title: title.to_string(),
            description: None,
            content: "body".to_string(),
        }
    }

    async fn storage(dir: &tempfile::TempDir) -> SqliteStorage {
        let db_path = dir.path().join("test.db");
        SqliteStorage::new_with_path(&db_path).await.unwrap()
    }

    #[tokio::test]
    async fn round_trip_through_the_database() {
        let dir = tempdir().unwrap();
        let storage = storage(&dir).await;

        let created = storage
            .create(ArticleInput {
                title: "Test Article".to_string(),
                description: Some("a summary".to_string()),
                content: "# markdown body".to_string(),
            })
            .await
            .unwrap();
        assert!(created.id >= 1);
        assert!(created.create_time.is_some());

        let fetched = storage.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.description.as_deref(), Some("a summary"));
    }

    #[tokio::test]
    async fn listing_is_newest_first_by_default() {
        let dir = tempdir().unwrap();
        let storage = storage(&dir).await;
        for title in ["A", "B", "C"] {
            storage.create(input(title)).await.unwrap();
        }
        let titles: Vec<_> = storage
            .list(ListOrder::default())
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, vec!["C", "B", "A"]);
    }

    #[tokio::test]
    async fn update_keeps_create_time_and_id() {
        let dir = tempdir().unwrap();
        let storage = storage(&dir).await;
        let created = storage.create(input("before")).await.unwrap();

        let updated = storage.update(created.id, input("after")).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.create_time, created.create_time);
        assert_eq!(updated.title, "after");
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let dir = tempdir().unwrap();
        let storage = storage(&dir).await;
        let created = storage.create(input("gone")).await.unwrap();
        storage.delete(created.id).await.unwrap();
        assert!(matches!(
            storage.get(created.id).await.unwrap_err(),
            Error::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn autoincrement_does_not_reuse_ids() {
        let dir = tempdir().unwrap();
        let storage = storage(&dir).await;
        let a = storage.create(input("A")).await.unwrap();
        storage.delete(a.id).await.unwrap();
        let b = storage.create(input("B")).await.unwrap();
        assert!(b.id > a.id);
    }
}
