//! Renames between form section keys and API section keys
//!
//! The API stores two checklist sections under shorter names. Every other
//! key passes through unchanged in both directions.

/// `(form key, api key)` pairs that differ between the form and the API
pub const SECTION_RENAMES: &[(&str, &str)] = &[("gearboxBrakes", "gearbox"), ("chassis4x4", "chassis")];

/// Map a form section key to the key the API stores findings under
pub fn to_api_section(form_key: &str) -> &str {
    SECTION_RENAMES
        .iter()
        .find(|(form, _)| *form == form_key)
        .map(|(_, api)| *api)
        .unwrap_or(form_key)
}

/// Map an API findings key back to the form section key
pub fn to_form_section(api_key: &str) -> &str {
    SECTION_RENAMES
        .iter()
        .find(|(_, api)| *api == api_key)
        .map(|(form, _)| *form)
        .unwrap_or(api_key)
}
