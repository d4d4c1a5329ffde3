use crate::cli::ui::prompt_confirmation;
use anyhow::Result;
use carhub_cli::config::{Config, ConfigFile, SETTING_NAMES};
use carhub_cli::i18n::{Language, LanguageContext};
use clap::{Args, Subcommand};
use colored::*;
use log::info;

#[derive(Args)]
pub struct SettingsCommands {
    #[command(subcommand)]
    pub command: SettingsSubcommands,
}

#[derive(Subcommand)]
pub enum SettingsSubcommands {
    /// Show current settings
    Show,
    /// Get the value of a specific setting
    Get {
        /// Setting name (language, api-url, catalog-path, page-size)
        name: String,
    },
    /// Set the value of a specific setting
    Set {
        /// Setting name
        name: String,
        /// Setting value
        value: String,
    },
    /// Reset a setting to its default value
    Reset {
        /// Setting name
        name: String,
    },
    /// Reset all settings to default values
    ResetAll {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

pub async fn handle_settings_command(args: SettingsCommands) -> Result<()> {
    match args.command {
        SettingsSubcommands::Show => show_command(),
        SettingsSubcommands::Get { name } => get_command(&name),
        SettingsSubcommands::Set { name, value } => set_command(&name, &value),
        SettingsSubcommands::Reset { name } => reset_command(&name),
        SettingsSubcommands::ResetAll { force } => reset_all_command(force),
    }
}

fn show_command() -> Result<()> {
    let path = Config::get_config_path()?;
    let config = Config::load_from(&path)?;

    println!();
    println!("  {}", "Settings".bright_blue().bold());
    println!("  {}", "════════".bright_blue());
    for name in SETTING_NAMES {
        let value = config.get_setting(name)?;
        let value = if value.is_empty() { "(not set)".dimmed() } else { value.cyan() };
        println!("    {:<14} {}", name.bright_white(), value);
    }

    match config.resolve_api_url() {
        Some(url) if config.api_url.as_deref() != Some(url.as_str()) => {
            println!("    {:<14} {} {}", "", url.cyan(), "(from environment)".dimmed());
        }
        _ => {}
    }

    println!();
    println!("  {}", "Centre".bright_white().bold());
    println!("    {:<14} {}", "name", config.center.name_en);
    println!("    {:<14} {}", "", config.center.name_ar);
    println!("    {:<14} {}", "phone", config.center.phone);
    println!("    {:<14} {}", "cr-number", config.center.cr_number);
    println!("    {:<14} {}", "vat-number", config.center.vat_number);
    println!();
    println!("  {} {}", "Config file:".dimmed(), path.display());
    Ok(())
}

fn get_command(name: &str) -> Result<()> {
    info!("Getting setting: {}", name);
    println!("{}", Config::load()?.get_setting(name)?);
    Ok(())
}

fn set_command(name: &str, value: &str) -> Result<()> {
    // The language preference has a single writer
    if name == "language" {
        let language: Language = value.parse()?;
        LanguageContext::initialize(ConfigFile::default_location()?)?.set_language(language)?;
        println!("Set language to {}", language);
        return Ok(());
    }

    let mut config = Config::load()?;
    config.set_setting(name, value)?;
    config.save()?;
    println!("Set {} to {}", name, config.get_setting(name)?);
    Ok(())
}

fn reset_command(name: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.reset_setting(name)?;
    config.save()?;
    println!("Reset {} to default", name);
    Ok(())
}

fn reset_all_command(force: bool) -> Result<()> {
    info!("Resetting all settings to defaults");

    if !force {
        let language = Config::load()?.language.unwrap_or_default();
        if !prompt_confirmation("Reset all settings to their default values?", false, language)? {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let mut config = Config::load()?;
    for name in SETTING_NAMES {
        config.reset_setting(name)?;
    }
    config.save()?;

    println!("All settings have been reset to default values.");
    Ok(())
}
