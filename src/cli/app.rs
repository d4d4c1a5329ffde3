use super::commands::language::LanguageArgs;
use super::commands::list::ListArgs;
use super::commands::settings::SettingsCommands;
use super::commands::submit::SubmitArgs;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "carhub")]
#[command(version)]
#[command(about = "Bilingual vehicle inspection intake for the check-up centre")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fill in a new inspection interactively
    New {
        /// Start from a saved draft instead of a blank form
        #[arg(long)]
        draft: Option<PathBuf>,
    },
    /// Review and submit a draft saved as JSON
    Submit(SubmitArgs),
    /// Show which sections of a draft are filled in
    Sections {
        /// Draft file (JSON)
        file: PathBuf,
    },
    /// List submitted inspections
    List(ListArgs),
    /// Show one submitted inspection
    Show {
        /// Inspection id or unambiguous id prefix
        id: String,
        /// Print the stored record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Browse the checklist catalog
    Catalog {
        /// Only this section (form key, e.g. gearboxBrakes)
        #[arg(long)]
        section: Option<String>,
    },
    /// Show or change the display language
    Language(LanguageArgs),
    /// Application settings management
    Settings(SettingsCommands),
}
