use std::sync::Arc;

use ac_core::ArticleStore;

use crate::config::{ArticleAdmin, SiteBranding};

pub struct AppState {
    pub store: Arc<dyn ArticleStore>,
    pub branding: SiteBranding,
    pub article_admin: ArticleAdmin,
}
