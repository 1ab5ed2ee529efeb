//! Gap analysis between a company disclosure and the SSBJ standard.

mod assessment;
mod comparison;
mod draft;
mod prompt;

pub use assessment::{DisclosurePillar, GapAssessment};
pub use comparison::{placeholder_rows, AnalysisSource, ComparisonRow};
pub use draft::{DisclosureDraft, DRAFT_TITLE};
pub use prompt::{parse_response, GapAnalysisPrompt, ResponseParseError, SYSTEM_PROMPT};
