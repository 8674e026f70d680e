use crate::prelude::*;
use clap::Parser;
use std::path::PathBuf;

mod config;
mod error;
mod login;
mod pages;
mod prelude;
mod users;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Listing, user search and login prompt utilities for the bookshelf storefront"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Configuration file (defaults to <config dir>/bookshelf/config.toml)
    #[clap(long, env = "BOOKSHELF_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Whether to display additional information.
    #[clap(long, env = "BOOKSHELF_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// User list operations
    Users(crate::users::App),

    /// Render page controls for a listing
    Pages(crate::pages::PagesOptions),

    /// Show the login prompt and answer it
    Login(crate::login::LoginOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();
    let config = crate::config::load(app.global.config.as_deref()).await?;

    match app.command {
        SubCommands::Users(sub_app) => crate::users::run(sub_app, &config, app.global).await,
        SubCommands::Pages(options) => crate::pages::run(options, app.global),
        SubCommands::Login(options) => crate::login::run(options, &config, app.global),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
