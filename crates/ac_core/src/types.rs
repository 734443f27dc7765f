use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::schema;
use crate::{Error, Result};

/// A persisted article record.
///
/// `id` and `create_time` are assigned by the store and never change after
/// insert; the remaining fields are replaced wholesale on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub create_time: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub content: String,
}

impl Article {
    /// Label used wherever a record is shown as a single line.
    pub fn display_label(&self) -> &str {
        &self.title
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_label())
    }
}

// Record identity is the primary key.
impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Article {}

/// User-editable fields, submitted on create and on full-record update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleInput {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub content: String,
}

impl ArticleInput {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::validation("title", "title must not be empty"));
        }
        let max = schema::title_max_length();
        let len = self.title.chars().count();
        if len > max {
            return Err(Error::validation(
                "title",
                format!("title is {} characters, maximum is {}", len, max),
            ));
        }
        if self.content.trim().is_empty() {
            return Err(Error::validation("content", "content must not be empty"));
        }
        Ok(())
    }
}
