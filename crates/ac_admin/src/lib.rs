use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use ac_core::{ArticleStore, Error, Result};

pub mod changelist;
pub mod config;
pub mod handlers;
pub mod state;

pub use config::{AdminSite, ArticleAdmin, SiteBranding};
pub use state::AppState;

/// Build the admin router for a registered site.
pub fn create_app(site: AdminSite, store: Arc<dyn ArticleStore>) -> Result<Router> {
    let article_admin = site
        .article_admin
        .ok_or_else(|| Error::AdminConfig("no model registered on the admin site".to_string()))?;

    let state = AppState {
        store,
        branding: site.branding,
        article_admin,
    };
    let cors = CorsLayer::permissive();

    Ok(Router::new()
        .route("/admin", get(handlers::site_index))
        .route(
            "/admin/articles",
            get(handlers::list_articles).post(handlers::create_article),
        )
        .route(
            "/admin/articles/:id",
            get(handlers::get_article)
                .put(handlers::update_article)
                .delete(handlers::delete_article),
        )
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(Arc::new(state)))
}

pub mod prelude {
    pub use crate::config::{AdminSite, ArticleAdmin, SiteBranding};
    pub use crate::AppState;
    pub use ac_core::{Article, Error, Result};
}
