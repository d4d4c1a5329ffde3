//! Colored terminal rendering of summaries, records and listings

use carhub_cli::checklist::ChecklistCatalog;
use carhub_cli::i18n::{Language, StaticText, headings};
use carhub_cli::inspection::model::CenterInfo;
use carhub_cli::inspection::reconstruct::DisplayGroup;
use carhub_cli::inspection::summary::{FieldRow, FormSummary, RecordDetail};
use carhub_cli::inspection::validation::FieldError;
use carhub_cli::inspection::{InspectionPage, SectionStatus};
use colored::*;

const RULE_WIDTH: usize = 60;

fn heading(text: &str, language: Language) {
    let width = text.chars().count();
    // Right-to-left headings hug the right edge of the block
    let indent = if language.is_rtl() {
        " ".repeat(RULE_WIDTH.saturating_sub(width))
    } else {
        String::new()
    };

    println!();
    println!("  {}{}", indent, text.bright_blue().bold());
    println!("  {}{}", indent, "═".repeat(width).bright_blue());
}

fn subheading(text: &str) {
    println!();
    println!("  {}", text.bright_white().bold());
}

fn field_rows(rows: &[FieldRow]) {
    let width = rows.iter().map(|row| row.label.chars().count()).max().unwrap_or(0);
    for row in rows {
        let padding = " ".repeat(width - row.label.chars().count());
        let value = if row.value.is_empty() {
            "-".dimmed()
        } else {
            row.value.white()
        };
        println!("    {}{}  {}", row.label.dimmed(), padding, value);
    }
}

fn issue_groups(groups: &[DisplayGroup], language: Language) {
    subheading(headings::SELECTED_ISSUES.get(language));

    if groups.is_empty() {
        println!("    {}", headings::NO_ISSUES.get(language).dimmed());
        return;
    }

    for group in groups {
        println!("    {}", group.title.bright_yellow().bold());
        for item in &group.items {
            println!("      • {}", item);
        }
    }
}

fn notes(notes: &str, language: Language) {
    if notes.trim().is_empty() {
        return;
    }
    subheading(headings::NOTES.get(language));
    for line in notes.lines() {
        println!("    {}", line);
    }
}

/// Review screen shown before confirming a draft
pub fn render_summary(summary: &FormSummary, center: &CenterInfo) {
    let language = summary.language;
    let center_name = match language {
        Language::En => &center.name_en,
        Language::Ar => &center.name_ar,
    };

    heading(headings::SUMMARY_TITLE.get(language), language);
    println!("  {} · {}", center_name.bright_white(), center.phone.dimmed());

    subheading(headings::CUSTOMER_DETAILS.get(language));
    field_rows(&summary.fields);

    subheading(headings::INSPECTION_DETAILS.get(language));
    println!("    {}", summary.checkup_label.bright_cyan());

    issue_groups(&summary.groups, language);
    notes(&summary.notes, language);
    println!();
}

const ODOMETER_UNIT: StaticText = StaticText::new("km", "كم");

/// Full view of one submitted inspection
pub fn render_detail(detail: &RecordDetail) {
    let language = detail.language;
    let title = match &detail.id {
        Some(id) => format!("{} {}", headings::INSPECTION_DETAILS.get(language), id),
        None => headings::INSPECTION_DETAILS.get(language).to_string(),
    };
    heading(&title, language);

    subheading(headings::CUSTOMER_DETAILS.get(language));
    field_rows(&detail.customer);

    subheading(headings::VEHICLE_DETAILS.get(language));
    field_rows(&detail.vehicle);

    subheading(headings::INSPECTION_DETAILS.get(language));
    println!("    {}", detail.checkup_label.bright_cyan());
    println!("    {}", detail.inspection_date);
    if let Some(reading) = detail.odometer {
        println!("    {} {}", reading, ODOMETER_UNIT.get(language));
    }
    if let Some(created_at) = &detail.created_at {
        println!("    {}: {}", headings::CREATED_AT.get(language).dimmed(), created_at);
    }

    issue_groups(&detail.groups, language);
    if let Some(text) = &detail.notes {
        notes(text, language);
    }
    println!();
}

/// Section list with completion markers
pub fn render_statuses(statuses: &[SectionStatus], catalog: &ChecklistCatalog, language: Language) {
    for status in statuses {
        let marker = if status.complete {
            "✓".bright_green().bold()
        } else {
            "○".dimmed()
        };
        let title = status.section.title(catalog, language);
        let title = if status.active {
            title.bright_white().bold().underline()
        } else {
            title.normal()
        };

        match status.selected_count {
            Some(count) if count > 0 => println!("  {} {} {}", marker, title, format!("({})", count).dimmed()),
            _ => println!("  {} {}", marker, title),
        }
    }
}

pub fn render_field_errors(errors: &[FieldError], language: Language) {
    for error in errors {
        println!(
            "  {} {}: {}",
            "✗".bright_red().bold(),
            error.field.label(language).bright_white(),
            error.message(language).red()
        );
    }
}

const NO_MATCHES: StaticText = StaticText::new("No inspections match.", "لا توجد فحوصات مطابقة.");

/// One page of the inspection listing
pub fn render_page(page: &InspectionPage<'_>, language: Language) {
    if page.items.is_empty() {
        println!("  {}", NO_MATCHES.get(language).bright_yellow());
    } else {
        println!(
            "  {:<10} {:<12} {:<22} {:<12} {:<18} {}",
            "ID".bright_white().bold(),
            "Date".bright_white().bold(),
            "Customer".bright_white().bold(),
            "Plate".bright_white().bold(),
            "Vehicle".bright_white().bold(),
            "Findings".bright_white().bold()
        );

        for record in &page.items {
            let vehicle = format!("{} {}", record.vehicle.car_type, record.vehicle.model);
            println!(
                "  {:<10} {:<12} {:<22} {:<12} {:<18} {}",
                record.short_id().cyan(),
                record.inspection.inspection_date,
                truncate(&record.customer.name, 22),
                record.vehicle.plate_number,
                truncate(vehicle.trim(), 18),
                record.finding_count()
            );
        }
    }

    println!();
    println!(
        "  {}",
        format!(
            "Page {} of {} · {} matching",
            page.page,
            page.total_pages.max(1),
            page.total_matches
        )
        .dimmed()
    );
}

/// Catalog sections with item ids, optionally a single section
pub fn render_catalog(catalog: &ChecklistCatalog, language: Language, only: Option<&str>) {
    for section in catalog.sections() {
        if only.is_some_and(|key| key != section.key) {
            continue;
        }

        subheading(&format!("{} ({})", section.title.get(language), section.key));
        for item in &section.items {
            println!("    {:<8} {}", item.id.cyan(), item.label(language));
        }
    }
    println!();
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Toyota", 10), "Toyota");
        assert_eq!(truncate("Mercedes-Benz G-Class", 10), "Mercedes-…");
    }
}
