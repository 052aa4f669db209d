//! CLI command implementations

use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Subcommand;
use shopmate_chat::{ChatRequest, ChatService};
use shopmate_core::ShopmateConfig;
use shopmate_search::{ProductRecord, ProductSearchService};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the API server
    Server {
        /// Host to bind to (overrides SHOPMATE_HOST)
        #[arg(long)]
        host: Option<IpAddr>,
        /// Port to bind to (overrides SHOPMATE_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Search products and print them as JSON
    Search {
        /// Free-text query
        query: String,
    },
    /// Ask the consultant about a saved product list
    Chat {
        /// Question for the consultant
        message: String,
        /// JSON file with products, either a list or a `{"products": [...]}` search result
        #[arg(long)]
        products: PathBuf,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns appropriate error based on the command that fails
pub async fn handle_command(command: Commands, config: ShopmateConfig) -> anyhow::Result<()> {
    match command {
        Commands::Server { host, port } => start_server(config, host, port).await,
        Commands::Search { query } => search_products(&config, &query).await,
        Commands::Chat { message, products } => chat(&config, message, products).await,
    }
}

/// Start the API server
///
/// # Errors
/// - Listener could not be bound or a provider client could not be built
pub async fn start_server(
    mut config: ShopmateConfig,
    host: Option<IpAddr>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    shopmate_web::run_server(config)
        .await
        .context("API server failed")
}

/// Search products and print the normalized list
///
/// # Errors
/// - Provider failure or empty query
pub async fn search_products(config: &ShopmateConfig, query: &str) -> anyhow::Result<()> {
    let service = ProductSearchService::from_config(config)?;
    let products = service.search(query).await?;
    tracing::info!(count = products.len(), "Search finished");

    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({ "products": products }))?
    );
    Ok(())
}

/// Ask the consultant a question about products read from a file
///
/// # Errors
/// - Products file missing or not valid JSON
pub async fn chat(config: &ShopmateConfig, message: String, products: PathBuf) -> anyhow::Result<()> {
    let raw = tokio::fs::read_to_string(&products)
        .await
        .with_context(|| format!("Failed to read {}", products.display()))?;
    let products_context = parse_products_file(&raw)
        .with_context(|| format!("Invalid products file {}", products.display()))?;

    let service = ChatService::from_config(config)?;
    let reply = service
        .consult(&ChatRequest {
            message,
            products_context,
        })
        .await;

    println!("{}", serde_json::to_string_pretty(&reply)?);
    Ok(())
}

/// Accepts either a bare product list or the body of a search response.
fn parse_products_file(raw: &str) -> serde_json::Result<Vec<ProductRecord>> {
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum ProductsFile {
        List(Vec<ProductRecord>),
        SearchResponse { products: Vec<ProductRecord> },
    }

    Ok(match serde_json::from_str(raw)? {
        ProductsFile::List(products) | ProductsFile::SearchResponse { products } => products,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_list() {
        let products =
            parse_products_file(r#"[{"title":"Mesa","link":"https://x.example"}]"#).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].source, "Oferta");
    }

    #[test]
    fn test_parse_search_response() {
        let products = parse_products_file(
            r#"{"products":[{"title":"Mesa","link":"https://x.example"},{"title":"Cadeira","link":"https://y.example"}]}"#,
        )
        .unwrap();
        assert_eq!(products.len(), 2);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_products_file("not json").is_err());
    }
}
