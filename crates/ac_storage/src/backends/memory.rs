use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

use ac_core::{Article, ArticleInput, ArticleStore, Error, ListOrder, Result};

struct MemoryStore {
    articles: Vec<Article>,
    // Monotonic, never reused even after deletes.
    next_id: i64,
}

impl MemoryStore {
    fn new() -> Self {
        Self {
            articles: Vec::new(),
            next_id: 1,
        }
    }

    fn create(&mut self, input: ArticleInput) -> Result<Article> {
        input.validate()?;
        let article = Article {
            id: self.next_id,
            title: input.title,
            create_time: Some(Utc::now()),
            description: input.description,
            content: input.content,
        };
        self.next_id += 1;
        self.articles.push(article.clone());
        Ok(article)
    }

    fn get(&self, id: i64) -> Result<Article> {
        self.articles
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(Error::NotFound(id))
    }

    fn update(&mut self, id: i64, input: ArticleInput) -> Result<Article> {
        input.validate()?;
        let article = self
            .articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(Error::NotFound(id))?;
        article.title = input.title;
        article.description = input.description;
        article.content = input.content;
        Ok(article.clone())
    }

    fn delete(&mut self, id: i64) -> Result<()> {
        let before = self.articles.len();
        self.articles.retain(|a| a.id != id);
        if self.articles.len() == before {
            return Err(Error::NotFound(id));
        }
        Ok(())
    }

    fn list(&self, order: ListOrder) -> Vec<Article> {
        let mut articles = self.articles.clone();
        match order {
            ListOrder::IdAsc => articles.sort_by_key(|a| a.id),
            ListOrder::IdDesc => articles.sort_by_key(|a| std::cmp::Reverse(a.id)),
        }
        articles
    }
}

pub struct MemoryStorage {
    store: Arc<RwLock<MemoryStore>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(MemoryStore::new())),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleStore for MemoryStorage {
    async fn create(&self, input: ArticleInput) -> Result<Article> {
        let mut store = self.store.write().await;
        store.create(input)
    }

    async fn get(&self, id: i64) -> Result<Article> {
        let store = self.store.read().await;
        store.get(id)
    }

    async fn update(&self, id: i64, input: ArticleInput) -> Result<Article> {
        let mut store = self.store.write().await;
        store.update(id, input)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut store = self.store.write().await;
        store.delete(id)
    }

    async fn list(&self, order: ListOrder) -> Result<Vec<Article>> {
        let store = self.store.read().await;
        Ok(store.list(order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str) -> ArticleInput {
        ArticleInput {
            title: title.to_string(),
            description: None,
            content: "body".to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids_and_create_time() {
        let storage = MemoryStorage::new();
        let a = storage.create(input("A")).await.unwrap();
        let b = storage.create(input("B")).await.unwrap();
        assert!(b.id > a.id);
        assert!(a.create_time.is_some());
    }

    #[tokio::test]
    async fn list_defaults_to_newest_first() {
        let storage = MemoryStorage::new();
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

        let ascending: Vec<_> = storage
            .list(ListOrder::IdAsc)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(ascending, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn update_preserves_id_and_create_time() {
        let storage = MemoryStorage::new();
        let created = storage.create(input("before")).await.unwrap();
        let updated = storage
            .update(
                created.id,
                ArticleInput {
                    title: "after".to_string(),
                    description: Some("changed".to_string()),
                    content: "new body".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.create_time, created.create_time);
        assert_eq!(updated.title, "after");

        let fetched = storage.get(created.id).await.unwrap();
        assert_eq!(fetched.title, "after");
        assert_eq!(fetched.create_time, created.create_time);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let storage = MemoryStorage::new();
        let a = storage.create(input("A")).await.unwrap();
        storage.delete(a.id).await.unwrap();
        let b = storage.create(input("B")).await.unwrap();
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn invalid_input_is_rejected() {
        let storage = MemoryStorage::new();
        let err = storage.create(input(&"x".repeat(256))).await.unwrap_err();
        assert!(matches!(err, Error::Validation { field: "title", .. }));

        let created = storage.create(input("ok")).await.unwrap();
        let err = storage
            .update(created.id, input(""))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation { field: "title", .. }));
    }

    #[tokio::test]
    async fn missing_records_report_not_found() {
        let storage = MemoryStorage::new();
        assert!(matches!(
            storage.get(42).await.unwrap_err(),
            Error::NotFound(42)
        ));
        assert!(matches!(
            storage.delete(42).await.unwrap_err(),
            Error::NotFound(42)
        ));
        assert!(matches!(
            storage.update(42, input("x")).await.unwrap_err(),
            Error::NotFound(42)
        ));
    }
}
