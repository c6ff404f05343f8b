//! Account Console - terminal client for account settings and registration
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use account_console::core::prelude::*;
use account_console::{resolve_config_path, Overrides};
use clap::Parser;

/// Account Console - manage your learning platform account from the terminal
#[derive(Parser, Debug)]
#[command(name = "acctui")]
#[command(about = "Account settings and registration for a learning platform", long_about = None)]
struct Args {
    /// Path to config.toml (defaults to the per-user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Server base URL, overriding `[server] base_url`
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Open the registration screen first
    #[arg(long)]
    register: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = resolve_config_path(args.config);
    let overrides = Overrides {
        base_url: args.base_url,
        register: args.register,
    };

    account_console::run(&config_path, overrides).await
}
