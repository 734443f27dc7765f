use ac_core::schema::ModelSchema;
use ac_core::{Error, ListOrder, Result};

/// Labels shown in the admin shell, fixed at startup.
#[derive(Debug, Clone)]
pub struct SiteBranding {
    pub site_header: String,
    pub site_title: String,
}

impl Default for SiteBranding {
    fn default() -> Self {
        Self {
            site_header: "文章中心".to_string(),
            site_title: "文章中心".to_string(),
        }
    }
}

/// Changelist configuration for the article model.
#[derive(Debug, Clone)]
pub struct ArticleAdmin {
    pub ordering: ListOrder,
    /// Columns shown in the changelist, in order.
    pub list_display: Vec<&'static str>,
    /// Subset of `list_display` rendered as links into the detail view.
    pub list_display_links: Vec<&'static str>,
}

impl Default for ArticleAdmin {
    fn default() -> Self {
        Self {
            ordering: ListOrder::IdDesc,
            list_display: vec!["id", "title", "create_time"],
            list_display_links: vec!["id", "title"],
        }
    }
}

impl ArticleAdmin {
    /// Reject column names the schema does not declare and links that are
    /// not displayed columns.
    pub(crate) fn validate(&self, schema: &ModelSchema) -> Result<()> {
        for name in &self.list_display {
            if schema.field(name).is_none() {
                return Err(Error::AdminConfig(format!(
                    "list_display refers to unknown field `{name}`"
                )));
            }
        }
        for name in &self.list_display_links {
            if !self.list_display.contains(name) {
                return Err(Error::AdminConfig(format!(
                    "list_display_links entry `{name}` is not in list_display"
                )));
            }
        }
        Ok(())
    }
}

/// Explicit registration point for the admin surface. Branding comes in via
/// the constructor and model configuration via `register_articles`, so there
/// is no import-time global state to mutate.
#[derive(Debug, Clone)]
pub struct AdminSite {
    pub(crate) branding: SiteBranding,
    pub(crate) article_admin: Option<ArticleAdmin>,
}

impl AdminSite {
    pub fn new(branding: SiteBranding) -> Self {
        Self {
            branding,
            article_admin: None,
        }
    }

    pub fn register_articles(mut self, admin: ArticleAdmin) -> Result<Self> {
        admin.validate(&ac_core::schema::ARTICLE)?;
        self.article_admin = Some(admin);
        Ok(self)
    }
}
