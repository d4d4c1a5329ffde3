use crate::cli::context::AppContext;
use anyhow::Result;
use carhub_cli::i18n::Language;
use clap::Args;
use colored::*;

#[derive(Args)]
pub struct LanguageArgs {
    /// New display language (en or ar); omit to show the current one
    pub language: Option<String>,
}

pub async fn language_command(ctx: &mut AppContext, args: LanguageArgs) -> Result<()> {
    let Some(requested) = args.language else {
        println!("{}", ctx.lang());
        return Ok(());
    };

    let language: Language = requested.parse()?;
    if ctx.language.set_language(language)? {
        println!("  {} Display language set to {}", "✓".bright_green().bold(), language.to_string().bright_white());
    } else {
        println!("  Display language is already {}", language);
    }
    Ok(())
}
