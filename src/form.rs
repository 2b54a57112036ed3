//! Input collection: the name, interests, skills and API key fields

pub mod form_events;
pub mod form_render;
mod form_state;

pub use form_state::{FormField, FormState, Profile};
