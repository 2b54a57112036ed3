//! Submission controller
//!
//! Validates the form, hands one request at a time to a background worker and
//! applies the outcome to the displayed result, the busy flag and the
//! notification area.

pub mod mentor_state;
pub mod mock;
pub mod prompt;
pub mod provider;
pub mod validation;
pub mod worker;

pub use mentor_state::{
    MentorState, Settlement, SubmitOutcome, SuggestionRequest, SuggestionResponse,
};
pub use validation::{ValidationError, validate_submission};
