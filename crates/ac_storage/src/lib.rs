use std::path::Path;
use std::sync::Arc;

use ac_core::{ArticleStore, Error, Result};

pub mod backends;

pub use backends::memory::MemoryStorage;
#[cfg(feature = "sqlite")]
pub use backends::sqlite::SqliteStorage;

/// Build a store from its CLI name.
///
/// `db_path` only applies to the sqlite backend; it falls back to
/// `articles.db` in the working directory.
pub async fn create_store(kind: &str, db_path: Option<&Path>) -> Result<Arc<dyn ArticleStore>> {
    match kind {
        "memory" => Ok(Arc::new(MemoryStorage::new())),
        #[cfg(feature = "sqlite")]
        "sqlite" => {
            let path = db_path.unwrap_or_else(|| Path::new("articles.db"));
            Ok(Arc::new(SqliteStorage::new_with_path(path).await?))
        }
        #[cfg(not(feature = "sqlite"))]
        "sqlite" => {
            let _ = db_path;
            Err(Error::Storage(
                "sqlite backend not compiled in (enable the `sqlite` feature)".to_string(),
            ))
        }
        other => Err(Error::Storage(format!("unknown storage backend: {other}"))),
    }
}

pub mod prelude {
    pub use super::create_store;
    pub use super::MemoryStorage;
    #[cfg(feature = "sqlite")]
    pub use super::SqliteStorage;
}
