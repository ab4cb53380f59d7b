use crate::config::StoreConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "snb-storefront")]
#[command(about = "SweatNBlood storefront: browse the catalog, fill a cart, get checkout links")]
pub struct CliConfig {
    /// Path to a TOML configuration file (defaults are used when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Print machine-readable JSON instead of the text view")]
    pub json: bool,

    #[arg(long, help = "Emit logs as JSON lines on stderr")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Interactive storefront session on stdin/stdout
    Shell,
    /// Print the catalog, optionally filtered
    List {
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Add products by id and print the cart with both checkout links
    Checkout {
        #[arg(short = 'a', long = "add", value_delimiter = ',', required = true)]
        items: Vec<u32>,
    },
}

impl CliConfig {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Shell)
    }

    /// 讀取設定檔；沒有指定時用內建預設值
    pub fn load_store_config(&self) -> crate::Result<StoreConfig> {
        match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                StoreConfig::from_file(path)
            }
            None => Ok(StoreConfig::default()),
        }
    }
}
