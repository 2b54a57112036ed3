//! career-mentor: a terminal form that turns a name, interests and skills
//! into three career suggestions, either from a built-in mock or from an
//! OpenAI-compatible chat-completion API.

pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod mentor;
pub mod notification;
pub mod results;
pub mod scroll;
pub mod widgets;

#[cfg(test)]
mod test_utils;
