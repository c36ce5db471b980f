//! SLA Module
//!
//! Resolution deadlines for reported issues:
//! - SLA policy (windows and extensions)
//! - Status evaluation with sticky Extended/Escalated states
//! - Extension and escalation
//! - Reporting

pub mod agreement;
pub mod evaluator;
pub mod extension;
pub mod reporter;
pub mod status;

pub use agreement::{SlaPolicy, MAX_WINDOW_HOURS};
pub use evaluator::{evaluate, SlaEvaluator};
pub use extension::{extend, ExtensionOutcome};
pub use reporter::{SlaReport, SlaReporter, StatusCounts};
pub use status::SlaStatus;
