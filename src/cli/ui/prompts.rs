use anyhow::Result;
use carhub_cli::i18n::{Language, StaticText};
use dialoguer::Select;

const YES: StaticText = StaticText::new("Yes", "نعم");
const NO: StaticText = StaticText::new("No", "لا");

/// Arrow-key Yes/No prompt in the display language
pub fn prompt_confirmation(prompt: &str, default_yes: bool, language: Language) -> Result<bool> {
    let items = [YES.get(language), NO.get(language)];
    let default_index = if default_yes { 0 } else { 1 };

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default_index)
        .interact()?;

    Ok(selection == 0)
}
