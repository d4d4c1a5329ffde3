use crate::cli::commands::draft::load_draft;
use crate::cli::context::AppContext;
use crate::cli::ui::render::{render_field_errors, render_statuses};
use anyhow::Result;
use carhub_cli::i18n::StaticText;
use carhub_cli::inspection::{SectionNavigator, validate_for_submit};
use colored::*;
use std::path::Path;

const READY: StaticText = StaticText::new("Ready to submit", "جاهز للإرسال");
const NOT_READY: StaticText = StaticText::new("Not ready to submit:", "غير جاهز للإرسال:");

/// Show the section markers for a saved draft, then whether it would pass
/// submit validation
pub async fn sections_command(ctx: &AppContext, file: &Path) -> Result<()> {
    let language = ctx.lang();
    let draft = load_draft(file)?;

    println!();
    render_statuses(&SectionNavigator::new().statuses(&draft), &ctx.catalog, language);
    println!();

    match validate_for_submit(&draft) {
        Ok(()) => println!("  {} {}", "✓".bright_green().bold(), READY.get(language).bright_green()),
        Err(errors) => {
            println!("  {}", NOT_READY.get(language).bright_yellow().bold());
            render_field_errors(&errors, language);
        }
    }

    Ok(())
}
