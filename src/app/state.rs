use std::sync::mpsc;
use std::time::Duration;

use crate::config::{Config, MentorConfig, MentorMode};
use crate::form::{FormField, FormState};
use crate::mentor::{MentorState, Settlement, SubmitOutcome, worker};
use crate::notification::NotificationState;
use crate::scroll::ScrollState;

/// Which control has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FormField),
    SubmitButton,
    Results,
}

/// Application state
pub struct App {
    pub form: FormState,
    pub mentor: MentorState,
    pub notification: NotificationState,
    pub results_scroll: ScrollState,
    pub focus: Focus,
    /// Frame counter driving the spinner animation
    pub frame_count: u64,
    should_quit: bool,
}

impl App {
    /// Create a new App; call [`App::start_worker`] before submitting
    pub fn new(config: &Config) -> Self {
        Self {
            form: FormState::new(),
            mentor: MentorState::new(config.mentor.mode),
            notification: NotificationState::new(Duration::from_millis(
                config.notification.duration_ms,
            )),
            results_scroll: ScrollState::new(),
            focus: Focus::Field(FormField::Name),
            frame_count: 0,
            should_quit: false,
        }
    }

    /// Spawn the suggestion worker and connect it to the controller
    pub fn start_worker(&mut self, config: &MentorConfig) {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        worker::spawn_worker(config, request_rx, response_tx);
        self.mentor.set_channels(request_tx, response_rx);
    }

    pub fn mode(&self) -> MentorMode {
        self.mentor.mode
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Form fields shown in the current mode, in display order
    pub fn visible_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| *field != FormField::ApiKey || self.mode().requires_api_key())
            .collect()
    }

    /// Focusable controls in tab order
    fn focus_order(&self) -> Vec<Focus> {
        let mut order: Vec<Focus> = self.visible_fields().into_iter().map(Focus::Field).collect();
        order.push(Focus::SubmitButton);
        if self.mentor.result().is_some() {
            order.push(Focus::Results);
        }
        order
    }

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(-1);
    }

    fn move_focus(&mut self, step: isize) {
        let order = self.focus_order();
        let len = order.len() as isize;
        let current = order
            .iter()
            .position(|focus| *focus == self.focus)
            .unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(len) as usize;
        self.focus = order[next];
    }

    /// Explicit submission intent from the user
    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.mentor.submit(&self.form, &mut self.notification);
        if let SubmitOutcome::Started { request_id } = outcome {
            log::debug!("Submitted request {}", request_id);
        }
        outcome
    }

    /// Advance one UI tick: animate, apply worker responses, expire toasts
    pub fn tick(&mut self) {
        self.frame_count = self.frame_count.wrapping_add(1);

        // A failure keeps the old result, and the reader's place in it
        if self.mentor.poll_response(&mut self.notification) == Some(Settlement::Completed) {
            self.results_scroll.reset();
        }

        self.notification.clear_expired();
    }
}
