//! Review, confirm and submit a draft

use crate::cli::commands::draft::load_draft;
use crate::cli::context::AppContext;
use crate::cli::ui::render::{render_field_errors, render_summary};
use crate::cli::ui::{prompt_confirmation, with_spinner};
use anyhow::Result;
use carhub_cli::i18n::StaticText;
use carhub_cli::inspection::{FormSession, FormSummary, SubmitError, WireRecord, transform};
use clap::Args;
use colored::*;
use log::info;
use std::path::PathBuf;

const FIX_ERRORS: StaticText = StaticText::new(
    "The form is not ready to submit:",
    "النموذج غير جاهز للإرسال:",
);
const CONFIRM: StaticText = StaticText::new("Submit this inspection?", "هل تريد إرسال هذا الفحص؟");
const SUBMITTING: StaticText = StaticText::new("Submitting inspection...", "جارٍ إرسال الفحص...");
const CANCELLED: StaticText = StaticText::new("Submission cancelled.", "تم إلغاء الإرسال.");
const SUBMITTED: StaticText = StaticText::new("Inspection submitted", "تم إرسال الفحص");
const FAILED: StaticText = StaticText::new("Submission failed:", "فشل الإرسال:");

#[derive(Args)]
pub struct SubmitArgs {
    /// Draft file (JSON)
    pub file: PathBuf,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
    /// Print the payload that would be sent instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

/// How a review-and-confirm round ended
pub enum ReviewOutcome {
    Invalid,
    Cancelled,
    Submitted(WireRecord),
    Failed(SubmitError),
}

/// Validate and summarize the draft, ask for confirmation, then submit.
/// A failed submission leaves the draft in the session.
pub async fn review_and_confirm(ctx: &AppContext, session: &mut FormSession, assume_yes: bool) -> Result<ReviewOutcome> {
    let language = ctx.lang();

    let summary = match session.review() {
        Ok(draft) => FormSummary::build(draft, &ctx.catalog, language),
        Err(errors) => {
            println!();
            println!("  {}", FIX_ERRORS.get(language).bright_red().bold());
            render_field_errors(&errors, language);
            return Ok(ReviewOutcome::Invalid);
        }
    };

    render_summary(&summary, &ctx.config.center);

    if !assume_yes && !prompt_confirmation(CONFIRM.get(language), true, language)? {
        session.cancel_review();
        println!("  {}", CANCELLED.get(language).bright_yellow());
        return Ok(ReviewOutcome::Cancelled);
    }

    let result = with_spinner(SUBMITTING.get(language), session.confirm(&ctx.client, &ctx.catalog)).await;

    match result {
        Ok(created) => {
            println!(
                "  {} {} {}",
                "✓".bright_green().bold(),
                SUBMITTED.get(language).bright_green().bold(),
                created.id().unwrap_or_default().cyan()
            );
            Ok(ReviewOutcome::Submitted(created))
        }
        Err(err) => {
            println!(
                "  {} {} {}",
                "✗".bright_red().bold(),
                FAILED.get(language).bright_red().bold(),
                err.to_string().red()
            );
            Ok(ReviewOutcome::Failed(err))
        }
    }
}

pub async fn submit_command(ctx: &AppContext, args: SubmitArgs) -> Result<()> {
    info!("Submitting draft {:?}", args.file);
    let draft = load_draft(&args.file)?;

    if args.dry_run {
        let payload = transform(&draft, &ctx.catalog);
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let mut session = FormSession::with_draft(&ctx.catalog, &ctx.config.center, draft);
    match review_and_confirm(ctx, &mut session, args.yes).await? {
        ReviewOutcome::Submitted(_) | ReviewOutcome::Cancelled => Ok(()),
        ReviewOutcome::Invalid => anyhow::bail!("Draft {:?} is incomplete", args.file),
        ReviewOutcome::Failed(err) => Err(err.into()),
    }
}
