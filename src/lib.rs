//! Bilingual vehicle inspection intake: checklist catalog, form drafts,
//! conversion to and from the API record format, and the HTTP client

pub mod api;
pub mod checklist;
pub mod config;
pub mod i18n;
pub mod inspection;
