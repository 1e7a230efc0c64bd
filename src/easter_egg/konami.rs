use std::collections::VecDeque;

pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "KeyB",
    "KeyA",
];

/// Remembers the most recent key codes and reports when they spell the
/// Konami code.
#[derive(Debug, Default)]
pub struct KonamiTracker {
    recent: VecDeque<String>,
}

impl KonamiTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one `KeyboardEvent.code`. Returns true when the sequence completes;
    /// the buffer is cleared so the next full sequence triggers again.
    pub fn push(&mut self, code: &str) -> bool {
        self.recent.push_back(code.to_string());
        if self.recent.len() > KONAMI_SEQUENCE.len() {
            self.recent.pop_front();
        }

        if self.recent.iter().map(String::as_str).eq(KONAMI_SEQUENCE) {
            self.recent.clear();
            true
        } else {
            false
        }
    }
}

/// Tracks the on-screen celebration. Each trigger gets a ticket, and only
/// the latest ticket may end it.
#[derive(Debug, Default)]
pub struct Celebration {
    latest: u32,
    active: bool,
}

impl Celebration {
    pub fn start(&mut self) -> u32 {
        self.latest = self.latest.wrapping_add(1);
        self.active = true;
        self.latest
    }

    /// True if this ticket ended the celebration.
    pub fn end(&mut self, ticket: u32) -> bool {
        if !self.active || ticket != self.latest {
            return false;
        }
        self.active = false;
        true
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(tracker: &mut KonamiTracker, codes: &[&str]) -> usize {
        codes.iter().filter(|code| tracker.push(code)).count()
    }

    #[test]
    fn exact_sequence_triggers_once() {
        let mut tracker = KonamiTracker::new();
        assert_eq!(feed(&mut tracker, &KONAMI_SEQUENCE), 1);
    }

    #[test]
    fn only_the_final_key_triggers() {
        let mut tracker = KonamiTracker::new();
        for code in &KONAMI_SEQUENCE[..9] {
            assert!(!tracker.push(code));
        }
        assert!(tracker.push("KeyA"));
    }

    #[test]
    fn deviation_never_triggers() {
        let mut tracker = KonamiTracker::new();
        let mut keys = KONAMI_SEQUENCE.to_vec();
        keys[4] = "ArrowRight";
        assert_eq!(feed(&mut tracker, &keys), 0);
        let mut short = KONAMI_SEQUENCE.to_vec();
        short.pop();
        assert_eq!(feed(&mut tracker, &short), 0);
    }

    #[test]
    fn leading_noise_is_forgotten() {
        let mut tracker = KonamiTracker::new();
        let mut keys = vec!["KeyX", "Enter", "ArrowUp"];
        keys.extend_from_slice(&KONAMI_SEQUENCE);
        assert_eq!(feed(&mut tracker, &keys), 1);
    }

    #[test]
    fn repeats_retrigger() {
        let mut tracker = KonamiTracker::new();
        let keys: Vec<&str> = KONAMI_SEQUENCE.iter().chain(KONAMI_SEQUENCE.iter()).copied().collect();
        assert_eq!(feed(&mut tracker, &keys), 2);
        assert_eq!(feed(&mut tracker, &KONAMI_SEQUENCE), 1);
    }

    #[test]
    fn celebration_ends_on_its_own_timer() {
        let mut party = Celebration::default();
        let ticket = party.start();
        assert!(party.is_active());
        assert!(party.end(ticket));
        assert!(!party.is_active());
        assert!(!party.end(ticket));
    }

    #[test]
    fn retrigger_outlives_the_earlier_timer() {
        let mut party = Celebration::default();
        let first = party.start();
        let second = party.start();
        assert!(!party.end(first));
        assert!(party.is_active());
        assert!(party.end(second));
        assert!(!party.is_active());
    }
}
