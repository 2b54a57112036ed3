//! Prompt construction for live requests

use crate::form::Profile;

/// Build the chat prompt for a profile
///
/// Asks for exactly three careers, each with a title, a two-line description
/// and two beginner-friendly learning resources.
pub fn build_prompt(profile: &Profile) -> String {
    format!(
        "My name is {name}.\n\
         My interests: {interests}\n\
         My skills: {skills}\n\
         \n\
         Based on my interests and skills, suggest exactly 3 career options for me. \
         For each option provide:\n\
         1. The career title\n\
         2. A two-line description of the role and why it fits me\n\
         3. Two beginner-friendly learning resources\n\
         \n\
         Format each option as a numbered section with the title in bold.",
        name = profile.name,
        interests = profile.interests,
        skills = profile.skills,
    )
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod prompt_tests;
