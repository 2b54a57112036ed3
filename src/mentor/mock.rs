//! Mock suggestion source
//!
//! Produces a fixed answer after a delay. Only the name is interpolated; the
//! text does not depend on interests or skills.

use std::time::Duration;

use crate::form::Profile;

const MOCK_SUGGESTIONS_BODY: &str = "**1. UX/UI Designer**
Create intuitive and visually appealing digital experiences for users across web and mobile platforms.
Combine your creative interests with technical skills to solve user problems through design.

Learning Resources:
- Google UX Design Certificate (Coursera)
- \"Don't Make Me Think\" by Steve Krug

**2. Technical Content Creator**
Develop educational content, tutorials, and documentation that makes complex topics accessible to broader audiences.
Blend your communication skills with technical knowledge to help others learn and grow.

Learning Resources:
- Technical Writing Fundamentals (edX)
- \"Everybody Writes\" by Ann Handley

**3. Product Manager**
Guide product development from conception to launch, working with cross-functional teams to build solutions.
Use your analytical skills and user focus to drive product strategy and execution.

Learning Resources:
- Product Management Fundamentals (Udemy)
- \"Inspired\" by Marty Cagan";

/// The fixed mock answer for `name`
pub fn mock_suggestions(name: &str) -> String {
    format!(
        "Based on your profile, here are 3 career suggestions for {}:\n\n{}",
        name, MOCK_SUGGESTIONS_BODY
    )
}

/// Waits `delay`, then answers with [`mock_suggestions`]
#[derive(Debug, Clone)]
pub struct MockProvider {
    delay: Duration,
}

impl MockProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn suggest(&self, profile: &Profile) -> String {
        tokio::time::sleep(self.delay).await;
        mock_suggestions(&profile.name)
    }
}

#[cfg(test)]
#[path = "mock_tests.rs"]
mod mock_tests;
