mod api;
mod cli_messages;
mod commands;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod format;
mod insights;
mod logging;
mod models;
mod session;
mod state;
mod ui;
mod widgets;
mod workers;

use crate::api::ApiClient;
use crate::api::resource::TableKind;
use crate::commands::TableRequest;
use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::API_URL_ENV_VAR;
use crate::environment::Environment;
use crate::models::SortDirection;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{ArgAction, Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the dashboard
    Start {
        /// Base URL of the analytics API
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Print activity to the console instead of opening the dashboard,
        /// and exit once every widget has loaded
        #[arg(long = "headless", action = ArgAction::SetTrue)]
        headless: bool,

        /// Seller to select once the seller list has loaded
        #[arg(long, value_name = "SELLER_ID")]
        seller: Option<String>,

        /// Enable background colors
        #[arg(long = "with-background", action = ArgAction::SetTrue)]
        with_background: bool,
    },
    /// List the known sellers
    Sellers {
        /// Base URL of the analytics API
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
    /// Print one page of a paginated table
    Table {
        #[arg(value_enum)]
        kind: TableKind,

        /// Page to print, starting at 1
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Column to sort by
        #[arg(long, value_name = "FIELD")]
        sort_by: Option<String>,

        /// Sort order: asc or desc
        #[arg(long, default_value = "asc")]
        order: SortDirection,

        /// Base URL of the analytics API
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
    /// Save the API base URL to the configuration file
    SetApiUrl {
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Delete the configuration file
    ResetConfig,
}

/// Resolves the API to talk to: flag, then environment variable, then config
/// file, then the local default. A flag that is not a URL is an error.
fn resolve_environment(flag: Option<String>) -> Result<Environment, Box<dyn Error>> {
    if let Some(url) = flag {
        return url
            .parse::<Environment>()
            .map_err(|_| format!("Invalid API URL '{}': expected http(s)://...", url).into());
    }
    let env_var = std::env::var(API_URL_ENV_VAR).ok();
    let configured = get_config_path()
        .ok()
        .and_then(|path| Config::load_or_default(&path).ok())
        .and_then(|config| config.api_url);
    Ok(Environment::resolve(
        None,
        env_var.as_deref(),
        configured.as_deref(),
    ))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Start {
            api_url,
            headless,
            seller,
            with_background,
        } => {
            let environment = resolve_environment(api_url)?;
            let session = setup_session(environment)?;
            if headless {
                logging::init_cli_logger();
                run_headless_mode(session, seller).await
            } else {
                run_tui_mode(session, with_background, seller).await
            }
        }
        Command::Sellers { api_url } => {
            logging::init_cli_logger();
            let client = ApiClient::new(resolve_environment(api_url)?)?;
            commands::list_sellers(&client).await
        }
        Command::Table {
            kind,
            page,
            sort_by,
            order,
            api_url,
        } => {
            logging::init_cli_logger();
            let client = ApiClient::new(resolve_environment(api_url)?)?;
            let request = TableRequest {
                kind,
                page,
                sort_by,
                order,
            };
            commands::show_table(&client, request).await
        }
        Command::SetApiUrl { url } => {
            let config_path = get_config_path()?;
            commands::set_api_url(&url, &config_path)
        }
        Command::ResetConfig => {
            let config_path = get_config_path()?;
            commands::reset_config(&config_path)
        }
    }
}
