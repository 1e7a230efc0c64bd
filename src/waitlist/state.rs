use std::fmt;

/// Button busy state is cleared this long after the request settles.
pub const BUTTON_RESTORE_MS: u32 = 2000;
pub const SUCCESS_RESET_MS: u32 = 5000;
pub const ERROR_RESET_MS: u32 = 3000;

pub const SUBMIT_LABEL: &str = "Join the Waitlist";
pub const BUSY_LABEL: &str = "Joining...";
pub const RETRY_LABEL: &str = "Try Again";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WaitlistError {
    Network(String),
    Status(u16),
}

impl fmt::Display for WaitlistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaitlistError::Network(e) => write!(f, "request failed: {}", e),
            WaitlistError::Status(code) => write!(f, "server answered {}", code),
        }
    }
}

pub enum WaitlistAction {
    Submit,
    Settled(Result<(), WaitlistError>),
    RestoreButton(u32),
    Reset(u32),
}

/// Timers the form has to start after an action, as (delay, action).
pub type Schedule = Vec<(u32, WaitlistAction)>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WaitlistState {
    pub phase: FormPhase,
    /// Submit control disabled and dimmed.
    pub button_busy: bool,
    /// Bumped on every submit; timers from older submits are ignored.
    pub generation: u32,
}

impl WaitlistState {
    /// Applies `action` and returns the follow-up timers to start.
    pub fn step(&self, action: WaitlistAction) -> (Self, Schedule) {
        let mut next = self.clone();
        let mut schedule = Schedule::new();
        match action {
            WaitlistAction::Submit => {
                if self.phase != FormPhase::Submitting {
                    next.phase = FormPhase::Submitting;
                    next.button_busy = true;
                    next.generation = self.generation.wrapping_add(1);
                }
            }
            WaitlistAction::Settled(outcome) => {
                if self.phase == FormPhase::Submitting {
                    let reset_after = match outcome {
                        Ok(()) => {
                            next.phase = FormPhase::Success;
                            SUCCESS_RESET_MS
                        }
                        Err(_) => {
                            next.phase = FormPhase::Error;
                            ERROR_RESET_MS
                        }
                    };
                    // The two timers are independent: the button comes back
                    // before the result panel resets.
                    schedule.push((BUTTON_RESTORE_MS, WaitlistAction::RestoreButton(self.generation)));
                    schedule.push((reset_after, WaitlistAction::Reset(self.generation)));
                }
            }
            WaitlistAction::RestoreButton(generation) => {
                if generation == self.generation {
                    next.button_busy = false;
                }
            }
            WaitlistAction::Reset(generation) => {
                if generation == self.generation
                    && matches!(self.phase, FormPhase::Success | FormPhase::Error)
                {
                    next.phase = FormPhase::Idle;
                }
            }
        }
        (next, schedule)
    }

    /// The retry prompt only lasts while the control is still held busy;
    /// the restore timer brings back the normal label even though the
    /// error theme stays until its own reset.
    pub fn button_label(&self) -> &'static str {
        match (self.button_busy, self.phase) {
            (true, FormPhase::Error) => RETRY_LABEL,
            (true, _) => BUSY_LABEL,
            (false, _) => SUBMIT_LABEL,
        }
    }

    pub fn shows_confirmation(&self) -> bool {
        self.phase == FormPhase::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl WaitlistState {
        fn apply(&self, action: WaitlistAction) -> Self {
            self.step(action).0
        }
    }

    /// Runs scheduled actions against a fake clock.
    struct Clock {
        now: u32,
        state: WaitlistState,
        pending: Vec<(u32, WaitlistAction)>,
    }

    impl Clock {
        fn new() -> Self {
            Self { now: 0, state: WaitlistState::default(), pending: Vec::new() }
        }

        fn dispatch(&mut self, action: WaitlistAction) {
            let (next, schedule) = self.state.step(action);
            self.state = next;
            let now = self.now;
            self.pending
                .extend(schedule.into_iter().map(|(delay, action)| (now + delay, action)));
        }

        fn advance_to(&mut self, at: u32) {
            loop {
                let due = self
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, (when, _))| *when <= at)
                    .min_by_key(|(_, (when, _))| *when)
                    .map(|(i, _)| i);
                let Some(i) = due else { break };
                let (when, action) = self.pending.remove(i);
                self.now = when;
                self.dispatch(action);
            }
            self.now = at;
        }
    }

    #[test]
    fn submit_marks_button_busy() {
        let state = WaitlistState::default().apply(WaitlistAction::Submit);
        assert_eq!(state.phase, FormPhase::Submitting);
        assert!(state.button_busy);
        assert_eq!(state.button_label(), BUSY_LABEL);
    }

    #[test]
    fn success_shows_confirmation_then_resets_after_five_seconds() {
        let mut clock = Clock::new();
        clock.dispatch(WaitlistAction::Submit);
        clock.dispatch(WaitlistAction::Settled(Ok(())));
        assert!(clock.state.shows_confirmation());

        clock.advance_to(1999);
        assert!(clock.state.button_busy);
        clock.advance_to(2000);
        // The button is live again while the confirmation is still up.
        assert!(!clock.state.button_busy);
        assert!(clock.state.shows_confirmation());

        clock.advance_to(4999);
        assert_eq!(clock.state.phase, FormPhase::Success);
        clock.advance_to(5000);
        assert_eq!(clock.state.phase, FormPhase::Idle);
        assert_eq!(clock.state.button_label(), SUBMIT_LABEL);
    }

    #[test]
    fn failure_shows_retry_then_resets_after_three_seconds() {
        for error in [WaitlistError::Status(500), WaitlistError::Network("offline".into())] {
            let mut clock = Clock::new();
            clock.dispatch(WaitlistAction::Submit);
            clock.dispatch(WaitlistAction::Settled(Err(error)));
            assert_eq!(clock.state.phase, FormPhase::Error);
            assert_eq!(clock.state.button_label(), RETRY_LABEL);
            assert!(clock.state.button_busy);
            assert!(!clock.state.shows_confirmation());

            clock.advance_to(1999);
            assert_eq!(clock.state.button_label(), RETRY_LABEL);
            clock.advance_to(2000);
            // Label and busy state come back before the error theme clears.
            assert_eq!(clock.state.button_label(), SUBMIT_LABEL);
            assert!(!clock.state.button_busy);
            clock.advance_to(2999);
            assert_eq!(clock.state.phase, FormPhase::Error);
            clock.advance_to(3000);
            assert_eq!(clock.state.phase, FormPhase::Idle);
            assert_eq!(clock.state.button_label(), SUBMIT_LABEL);
        }
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let first = WaitlistState::default().apply(WaitlistAction::Submit);
        let second = first.apply(WaitlistAction::Submit);
        assert_eq!(first, second);
    }

    #[test]
    fn old_timers_do_not_touch_a_new_submit() {
        let mut clock = Clock::new();
        clock.dispatch(WaitlistAction::Submit);
        clock.dispatch(WaitlistAction::Settled(Err(WaitlistError::Status(400))));
        clock.advance_to(2500);
        // Retry before the error panel resets.
        clock.dispatch(WaitlistAction::Submit);
        clock.advance_to(3000);
        assert_eq!(clock.state.phase, FormPhase::Submitting);
        assert!(clock.state.button_busy);
    }

    #[test]
    fn settle_without_submit_is_ignored() {
        let (state, schedule) = WaitlistState::default().step(WaitlistAction::Settled(Ok(())));
        assert_eq!(state.phase, FormPhase::Idle);
        assert!(schedule.is_empty());
    }

    #[test]
    fn errors_describe_themselves() {
        assert_eq!(WaitlistError::Status(503).to_string(), "server answered 503");
    }
}
