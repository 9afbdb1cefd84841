//! rd - a command-line client for the Redmine REST API.

mod api;
mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

use clap::Parser;

use crate::api::RedmineClient;
use crate::cli::{Cli, Command};
use crate::error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("warning: failed to initialize logging: {e}");
    }

    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        if let Some(hint) = e.hint() {
            eprintln!("hint: {hint}");
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.url.as_deref(), cli.key.as_deref())?;
    let client = RedmineClient::new(&config.base_url, &config.api_key)?;

    match &cli.command {
        Command::List(args) => commands::list::run(&client, args, cli.json).await,
        Command::Get(args) => commands::get::run(&client, args, cli.json).await,
        Command::Create(args) => commands::create::run(&client, args, cli.json).await,
        Command::Update(args) => commands::update::run(&client, args).await,
        Command::Comment(args) => commands::comment::run(&client, args).await,
        Command::Search(args) => commands::search::run(&client, args, cli.json).await,
        Command::Projects(args) => commands::projects::run(&client, args, cli.json).await,
    }
}
