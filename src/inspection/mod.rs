//! Inspection records: the form draft, its validation and progress, the
//! wire format and the conversions between them

pub mod dashboard;
pub mod model;
pub mod progress;
pub mod reconstruct;
pub mod session;
pub mod summary;
pub mod transform;
pub mod validation;
pub mod wire;

pub use dashboard::{InspectionPage, InspectionQuery, paginate};
pub use model::{CenterInfo, CheckupType, FormField, FormRecord, OdometerInput};
pub use progress::{FormSection, SectionNavigator, SectionStatus};
pub use reconstruct::{DisplayGroup, reconstruct_findings};
pub use session::{FormSession, SubmitError};
pub use summary::{FormSummary, RecordDetail};
pub use transform::transform;
pub use validation::{FieldError, ValidationRule, validate_for_submit};
pub use wire::{Findings, WireRecord};
