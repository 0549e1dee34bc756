//! SecondBrain - content dashboard engine for notes, conversations and memories
//!
//! Serves the dashboard API, or queries the catalog from the command line.

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use secondbrain::{
    api,
    config::BrainConfig,
    content::{ContentCatalog, ContentItem, ContentQuery},
    dashboard::{format::kind_label, DashboardView},
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "secondbrain")]
#[command(author = "A3S Lab Team")]
#[command(version)]
#[command(about = "Second brain dashboard for notes, conversations and memories")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "SECONDBRAIN_CONFIG")]
    config: Option<PathBuf>,

    /// JSON dataset to serve instead of the configured one
    #[arg(short, long, env = "SECONDBRAIN_DATASET")]
    dataset: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,
    },

    /// List visible items, newest first
    List {
        /// all, note, conversation or memory
        #[arg(short = 'k', long, default_value = "all")]
        category: String,

        /// Free-text filter over title, content and tags
        #[arg(short, long, default_value = "")]
        query: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show item counts per category
    Counts {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the dashboard page model as JSON
    Dashboard {
        #[arg(short = 'k', long, default_value = "all")]
        category: String,

        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Show configuration
    Config {
        /// Show default configuration
        #[arg(long)]
        default: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("secondbrain={},tower_http=debug", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = BrainConfig::load(cli.config.as_deref())?;
    if let Some(dataset) = cli.dataset {
        config.dataset.path = Some(dataset);
    }

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            let catalog = load_catalog(&config)?;
            api::serve(&config, Arc::new(catalog)).await?;
        }
        Commands::List {
            category,
            query,
            json,
        } => {
            let catalog = load_catalog(&config)?;
            let query = ContentQuery::parse(&category, query)?;
            list_items(&catalog, &query, json)?;
        }
        Commands::Counts { json } => {
            let catalog = load_catalog(&config)?;
            show_counts(&catalog, json)?;
        }
        Commands::Dashboard { category, query } => {
            let catalog = load_catalog(&config)?;
            let query = ContentQuery::parse(&category, query)?;
            let view = DashboardView::build(&catalog, &query, Utc::now(), &config.display);
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        Commands::Config { default } => {
            show_config(if default { None } else { Some(&config) })?;
        }
    }

    Ok(())
}

fn load_catalog(config: &BrainConfig) -> Result<ContentCatalog> {
    Ok(ContentCatalog::load(&config.dataset, Utc::now())?)
}

fn list_items(catalog: &ContentCatalog, query: &ContentQuery, json: bool) -> Result<()> {
    let items = catalog.query(query);

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("没有找到匹配的内容");
        return Ok(());
    }

    for item in &items {
        print_item(item);
    }
    println!();
    println!("共 {} 条内容", items.len());
    Ok(())
}

fn print_item(item: &ContentItem) {
    let source = item
        .origin
        .as_deref()
        .map(|s| format!(" · {}", s))
        .unwrap_or_default();
    println!(
        "[{}] {} ({}{}) {}",
        item.id,
        item.title,
        kind_label(item.kind),
        source,
        item.updated_at.format("%Y-%m-%d %H:%M")
    );
    if !item.tags.is_empty() {
        println!("    #{}", item.tags.join(" #"));
    }
}

fn show_counts(catalog: &ContentCatalog, json: bool) -> Result<()> {
    let counts = catalog.counts();
    if json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
    } else {
        println!("all:          {}", counts.all);
        println!("note:         {}", counts.note);
        println!("conversation: {}", counts.conversation);
        println!("memory:       {}", counts.memory);
    }
    Ok(())
}

fn show_config(config: Option<&BrainConfig>) -> Result<()> {
    let config = config.cloned().unwrap_or_default();
    println!("{}", config.to_toml()?);
    Ok(())
}
