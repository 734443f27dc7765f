//! Tabular rendering of the article changelist.
//!
//! Column labels come from the schema metadata; which columns appear and
//! which ones link to the detail view come from [`ArticleAdmin`].

use serde::Serialize;
use serde_json::Value;

use ac_core::schema::ARTICLE;
use ac_core::Article;

use crate::config::ArticleAdmin;

#[derive(Debug, Clone, Serialize)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub linked: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Cell {
    pub column: &'static str,
    pub value: Value,
    /// Detail-view URL when the column is configured as a link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RowView {
    pub id: i64,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Serialize)]
pub struct ChangeList {
    pub site_header: String,
    pub site_title: String,
    pub model: &'static str,
    pub columns: Vec<ColumnSpec>,
    pub rows: Vec<RowView>,
}

pub fn detail_url(id: i64) -> String {
    format!("/admin/articles/{id}")
}

pub fn columns(admin: &ArticleAdmin) -> Vec<ColumnSpec> {
    admin
        .list_display
        .iter()
        .map(|&name| ColumnSpec {
            name,
            label: ARTICLE
                .field(name)
                .map(|f| f.verbose_name)
                .unwrap_or(name),
            linked: admin.list_display_links.contains(&name),
        })
        .collect()
}

pub fn render_row(admin: &ArticleAdmin, article: &Article) -> RowView {
    let cells = admin
        .list_display
        .iter()
        .map(|&name| Cell {
            column: name,
            value: field_value(article, name),
            link: admin
                .list_display_links
                .contains(&name)
                .then(|| detail_url(article.id)),
        })
        .collect();
    RowView {
        id: article.id,
        cells,
    }
}

fn field_value(article: &Article, name: &str) -> Value {
    match name {
        "id" => Value::from(article.id),
        "title" => Value::from(article.title.as_str()),
        "create_time" => serde_json::to_value(article.create_time).unwrap_or(Value::Null),
        "description" => serde_json::to_value(&article.description).unwrap_or(Value::Null),
        "content" => Value::from(article.content.as_str()),
        // validate() keeps unknown names out of the config
        _ => Value::Null,
    }
}
