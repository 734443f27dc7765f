use async_trait::async_trait;

use crate::types::{Article, ArticleInput};
use crate::Result;

/// Sort order for listings. Ids are assigned monotonically, so id-descending
/// is newest-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListOrder {
    IdAsc,
    #[default]
    IdDesc,
}

#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Validate and insert a new record, assigning the next id and stamping
    /// `create_time`.
    async fn create(&self, input: ArticleInput) -> Result<Article>;

    /// Fetch a single record by id.
    async fn get(&self, id: i64) -> Result<Article>;

    /// Full-record update of the editable fields. `id` and `create_time`
    /// are preserved.
    async fn update(&self, id: i64, input: ArticleInput) -> Result<Article>;

    /// Hard delete.
    async fn delete(&self, id: i64) -> Result<()>;

    /// All records in the given order.
    async fn list(&self, order: ListOrder) -> Result<Vec<Article>>;
}
