//! Interactive intake form

use crate::cli::commands::draft::{load_draft, save_draft};
use crate::cli::commands::submit::{ReviewOutcome, review_and_confirm};
use crate::cli::context::AppContext;
use crate::cli::ui::prompt_confirmation;
use crate::cli::ui::render::render_statuses;
use anyhow::Result;
use carhub_cli::i18n::{Language, StaticText};
use carhub_cli::inspection::progress::is_section_complete;
use carhub_cli::inspection::{CheckupType, FormField, FormRecord, FormSection, FormSession, OdometerInput};
use chrono::{Local, NaiveDate};
use colored::*;
use dialoguer::{Input, MultiSelect, Select};
use is_terminal::IsTerminal;
use log::info;
use std::path::{Path, PathBuf};

const MENU_PROMPT: StaticText = StaticText::new("Choose a section", "اختر قسماً");
const REVIEW: StaticText = StaticText::new("Review & submit", "مراجعة وإرسال");
const SAVE: StaticText = StaticText::new("Save draft to file", "حفظ المسودة في ملف");
const SWITCH_LANGUAGE: StaticText = StaticText::new("العربية", "English");
const QUIT: StaticText = StaticText::new("Quit", "خروج");
const DISCARD: StaticText = StaticText::new("Discard the unsaved draft?", "هل تريد تجاهل المسودة غير المحفوظة؟");
const DRAFT_PATH: StaticText = StaticText::new("Draft file", "ملف المسودة");
const SAVED: StaticText = StaticText::new("Draft saved to", "تم حفظ المسودة في");
const DRAFT_KEPT: StaticText = StaticText::new(
    "Your draft is unchanged. Fix the problem and submit again.",
    "لم تتغير المسودة. عالج المشكلة ثم أعد الإرسال.",
);
const INVALID_DATE: StaticText = StaticText::new("Use the format YYYY-MM-DD", "استخدم الصيغة YYYY-MM-DD");

const CUSTOMER_FIELDS: &[FormField] = &[
    FormField::ClientName,
    FormField::MobileNumber,
    FormField::CarType,
    FormField::Model,
    FormField::Color,
    FormField::PlateNumber,
    FormField::Vin,
    FormField::CrNumber,
    FormField::VatNumber,
];

enum MenuChoice {
    Section(FormSection),
    Review,
    Save,
    SwitchLanguage,
    Quit,
}

pub async fn new_command(ctx: &mut AppContext, draft: Option<PathBuf>) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        anyhow::bail!("The interactive form needs a terminal; use `carhub submit <file>` instead");
    }

    let mut session = match draft {
        Some(path) => FormSession::with_draft(&ctx.catalog, &ctx.config.center, load_draft(&path)?),
        None => FormSession::new(&ctx.catalog, &ctx.config.center),
    };
    let mut saved_to: Option<PathBuf> = None;
    let mut saved_copy: Option<FormRecord> = None;
    info!("Starting interactive intake form");

    loop {
        let language = ctx.lang();
        println!();
        render_statuses(&session.navigator().statuses(session.draft()), &ctx.catalog, language);
        println!();

        match main_menu(ctx, &session, language)? {
            MenuChoice::Section(section) => {
                session.navigator_mut().select(section);
                edit_section(ctx, &mut session, section, language)?;
            }
            MenuChoice::Review => match review_and_confirm(ctx, &mut session, false).await? {
                ReviewOutcome::Submitted(_) => {
                    saved_to = None;
                    saved_copy = None;
                }
                ReviewOutcome::Failed(_) => println!("  {}", DRAFT_KEPT.get(language).dimmed()),
                ReviewOutcome::Invalid | ReviewOutcome::Cancelled => {}
            },
            MenuChoice::Save => {
                let path = prompt_draft_path(saved_to.as_deref(), language)?;
                save_draft(&path, session.draft())?;
                println!("  {} {} {}", "✓".bright_green().bold(), SAVED.get(language), path.display());
                saved_to = Some(path);
                saved_copy = Some(session.draft().clone());
            }
            MenuChoice::SwitchLanguage => {
                let next = match language {
                    Language::En => Language::Ar,
                    Language::Ar => Language::En,
                };
                ctx.language.set_language(next)?;
            }
            MenuChoice::Quit => {
                if !has_unsaved_work(session.draft(), saved_copy.as_ref())
                    || prompt_confirmation(DISCARD.get(language), false, language)?
                {
                    return Ok(());
                }
            }
        }
    }
}

/// Whether quitting would lose edits: the draft has been started and
/// differs from what was last saved
fn has_unsaved_work(draft: &FormRecord, saved: Option<&FormRecord>) -> bool {
    let started = FormSection::ALL
        .iter()
        .any(|&section| section != FormSection::CheckupType && is_section_complete(section, draft));
    started && saved != Some(draft)
}

fn main_menu(ctx: &AppContext, session: &FormSession, language: Language) -> Result<MenuChoice> {
    let mut choices: Vec<MenuChoice> = FormSection::ALL.into_iter().map(MenuChoice::Section).collect();
    choices.extend([MenuChoice::Review, MenuChoice::Save, MenuChoice::SwitchLanguage, MenuChoice::Quit]);

    let labels: Vec<String> = choices
        .iter()
        .map(|choice| match choice {
            MenuChoice::Section(section) => {
                let marker = if is_section_complete(*section, session.draft()) { "✓" } else { " " };
                format!("{} {}", marker, section.title(&ctx.catalog, language))
            }
            MenuChoice::Review => format!("→ {}", REVIEW.get(language)),
            MenuChoice::Save => format!("  {}", SAVE.get(language)),
            MenuChoice::SwitchLanguage => format!("  {}", SWITCH_LANGUAGE.get(language)),
            MenuChoice::Quit => format!("  {}", QUIT.get(language)),
        })
        .collect();

    let active = FormSection::ALL
        .iter()
        .position(|&section| section == session.navigator().active())
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt(MENU_PROMPT.get(language))
        .items(&labels)
        .default(active)
        .interact()?;

    Ok(choices.swap_remove(selection))
}

fn edit_section(ctx: &AppContext, session: &mut FormSession, section: FormSection, language: Language) -> Result<()> {
    let title = section.title(&ctx.catalog, language);
    println!();
    println!("  {}", title.bright_blue().bold());

    match section {
        FormSection::Customer => edit_customer(session.draft_mut(), language),
        FormSection::CheckupType => edit_checkup_type(session.draft_mut(), language),
        FormSection::Notes => {
            let draft = session.draft_mut();
            draft.notes = prompt_text(FormField::Notes.label(language), &draft.notes)?;
            Ok(())
        }
        checklist_section => match checklist_section.checklist_key() {
            Some(key) => edit_checklist(ctx, session.draft_mut(), key, language),
            None => Ok(()),
        },
    }
}

fn prompt_text(label: &str, current: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(label)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn edit_customer(draft: &mut FormRecord, language: Language) -> Result<()> {
    for &field in CUSTOMER_FIELDS {
        if let Some(value) = draft.text_mut(field) {
            *value = prompt_text(field.label(language), value)?;
        }
    }

    let odometer = match &draft.odometer {
        Some(OdometerInput::Text(text)) => text.clone(),
        Some(OdometerInput::Reading(value)) => value.to_string(),
        Some(OdometerInput::Decimal(value)) => value.to_string(),
        None => String::new(),
    };
    let odometer = prompt_text(FormField::Odometer.label(language), &odometer)?;
    draft.odometer = Some(odometer).filter(|text| !text.is_empty()).map(OdometerInput::Text);

    let current_date = draft.date.unwrap_or_else(|| Local::now().date_naive());
    let invalid_date = INVALID_DATE.get(language);
    let date = Input::<String>::new()
        .with_prompt(FormField::Date.label(language))
        .with_initial_text(current_date.format("%Y-%m-%d").to_string())
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), &'static str> {
            if input.trim().is_empty() || NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").is_ok() {
                Ok(())
            } else {
                Err(invalid_date)
            }
        })
        .interact_text()?;
    draft.date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok();

    Ok(())
}

fn edit_checkup_type(draft: &mut FormRecord, language: Language) -> Result<()> {
    let labels: Vec<&str> = CheckupType::ALL.iter().map(|kind| kind.label(language)).collect();
    let current = draft
        .checkup_type
        .and_then(|kind| CheckupType::ALL.iter().position(|&candidate| candidate == kind))
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt(FormField::CheckupType.label(language))
        .items(&labels)
        .default(current)
        .interact()?;

    draft.checkup_type = Some(CheckupType::ALL[selection]);
    Ok(())
}

fn edit_checklist(ctx: &AppContext, draft: &mut FormRecord, key: &str, language: Language) -> Result<()> {
    let Some(section) = ctx.catalog.section(key) else {
        return Ok(());
    };

    let selected = draft.selected(key);
    let labels: Vec<&str> = section.items.iter().map(|item| item.label(language)).collect();
    let defaults: Vec<bool> = section.items.iter().map(|item| selected.contains(&item.id)).collect();

    let chosen = MultiSelect::new()
        .with_prompt(section.title.get(language))
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    // Keep earlier picks in the order they were made, append new ones
    for (index, item) in section.items.iter().enumerate() {
        let was_selected = defaults[index];
        let is_selected = chosen.contains(&index);
        if was_selected != is_selected {
            draft.toggle_item(key, &item.id);
        }
    }

    Ok(())
}

fn prompt_draft_path(previous: Option<&Path>, language: Language) -> Result<PathBuf> {
    let initial = previous
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| format!("inspection-{}.json", Local::now().format("%Y%m%d-%H%M")));

    let path = Input::<String>::new()
        .with_prompt(DRAFT_PATH.get(language))
        .with_initial_text(initial)
        .interact_text()?;

    Ok(PathBuf::from(path.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use carhub_cli::checklist;
    use carhub_cli::inspection::CenterInfo;

    fn blank() -> FormRecord {
        FormRecord::blank(checklist::builtin(), &CenterInfo::default())
    }

    #[test]
    fn test_untouched_draft_quits_quietly() {
        assert!(!has_unsaved_work(&blank(), None));
    }

    #[test]
    fn test_saved_draft_quits_quietly() {
        let mut draft = blank();
        draft.client_name = "Omar Al-Qahtani".to_string();
        let saved = draft.clone();
        assert!(has_unsaved_work(&draft, None));
        assert!(!has_unsaved_work(&draft, Some(&saved)));
    }

    #[test]
    fn test_edits_after_save_need_confirmation() {
        let mut draft = blank();
        draft.client_name = "Omar Al-Qahtani".to_string();
        let saved = draft.clone();

        draft.client_name = "Omar Al-Qahtani Jr".to_string();
        assert!(has_unsaved_work(&draft, Some(&saved)));

        draft.client_name = saved.client_name.clone();
        draft.toggle_item("engine", "eng-1");
        assert!(has_unsaved_work(&draft, Some(&saved)));
    }
}
