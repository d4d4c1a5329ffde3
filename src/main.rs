use anyhow::Result;
use clap::Parser;
use log::info;
use std::fs::{self, File, OpenOptions};

mod cli;

use cli::commands::{catalog, language, list, new, sections, settings, show, submit};
use cli::context::AppContext;
use cli::{Cli, Commands};

/// Log file in the local data dir, truncated on each run
fn open_log_file() -> Option<File> {
    let dir = dirs::data_local_dir()?.join("carhub-cli");
    fs::create_dir_all(&dir).ok()?;
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(dir.join("carhub.log"))
        .ok()
}

fn init_logging() {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(log_file) = open_log_file() {
        builder.target(env_logger::Target::Pipe(Box::new(log_file)));
    }
    builder.init();
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::New { draft } => new::new_command(&mut AppContext::load()?, draft).await,
        Commands::Submit(args) => submit::submit_command(&AppContext::load()?, args).await,
        Commands::Sections { file } => sections::sections_command(&AppContext::load()?, &file).await,
        Commands::List(args) => list::list_command(&AppContext::load()?, args).await,
        Commands::Show { id, json } => show::show_command(&AppContext::load()?, &id, json).await,
        Commands::Catalog { section } => catalog::catalog_command(&AppContext::load()?, section.as_deref()).await,
        Commands::Language(args) => language::language_command(&mut AppContext::load()?, args).await,
        // Settings only touch the config file
        Commands::Settings(args) => settings::handle_settings_command(args).await,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    info!("Starting carhub");

    run(cli.command).await
}
