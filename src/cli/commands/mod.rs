pub mod catalog;
pub mod draft;
pub mod language;
pub mod list;
pub mod new;
pub mod sections;
pub mod settings;
pub mod show;
pub mod submit;
