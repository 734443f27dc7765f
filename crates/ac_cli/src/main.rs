use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use ac_admin::{AdminSite, ArticleAdmin, SiteBranding};
use ac_core::{ArticleStore, ListOrder, Result};

#[derive(Parser, Debug)]
#[command(author, version, about = "Article center admin service", long_about = None)]
struct Cli {
    #[arg(
        long,
        default_value = "memory",
        help = "Storage backend to use. Available backends: memory (default), sqlite"
    )]
    storage: String,
    #[arg(long, help = "SQLite database file (sqlite backend only)")]
    db_path: Option<PathBuf>,
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8000)]
    port: u16,
    #[arg(long, help = "Header shown in the admin shell")]
    site_header: Option<String>,
    #[arg(long, help = "Window title shown in the admin shell")]
    site_title: Option<String>,
}

fn branding_from_args(site_header: Option<String>, site_title: Option<String>) -> SiteBranding {
    let mut branding = SiteBranding::default();
    if let Some(header) = site_header {
        branding.site_header = header;
    }
    if let Some(title) = site_title {
        branding.site_title = title;
    }
    branding
}

async fn check_storage(store: &Arc<dyn ArticleStore>, kind: &str) -> Result<()> {
    store.list(ListOrder::default()).await?;
    info!("🏦 Storage backend ready (using {})", kind);
    Ok(())
}

async fn create_storage_with_retry(
    kind: &str,
    db_path: Option<&Path>,
) -> Result<Arc<dyn ArticleStore>> {
    let mut retries = 3;
    let mut last_error = None;

    while retries > 0 {
        match ac_storage::create_store(kind, db_path).await {
            Ok(store) => return Ok(store),
            Err(e) => {
                last_error = Some(e);
                retries -= 1;
                if retries > 0 {
                    info!("Storage initialization failed, retrying {}/3...", 3 - retries);
                    tokio::time::sleep(Duration::from_secs(2)).await;
                }
            }
        }
    }

    Err(last_error.unwrap_or_else(|| {
        ac_core::Error::Storage("storage initialization failed after all retries".to_string())
    }))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    info!("💾 Checking storage connection...");
    let store = create_storage_with_retry(&cli.storage, cli.db_path.as_deref()).await?;
    check_storage(&store, &cli.storage).await?;

    let branding = branding_from_args(cli.site_header, cli.site_title);
    let site = AdminSite::new(branding).register_articles(ArticleAdmin::default())?;
    let app = ac_admin::create_app(site, store)?;
    info!("📰 Article admin registered");

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🌐 Admin interface listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branding_defaults_when_flags_are_absent() {
        let branding = branding_from_args(None, None);
        assert_eq!(branding.site_header, "文章中心");
        assert_eq!(branding.site_title, "文章中心");
    }

    #[test]
    fn branding_flags_override_the_defaults() {
        let branding = branding_from_args(Some("News Desk".to_string()), None);
        assert_eq!(branding.site_header, "News Desk");
        assert_eq!(branding.site_title, "文章中心");
    }

    #[tokio::test]
    async fn unknown_backend_fails_fast() {
        let result = ac_storage::create_store("carrier-pigeon", None).await;
        assert!(result.is_err());
    }
}
