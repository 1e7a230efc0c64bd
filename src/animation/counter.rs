/// Text that marks a value with no end. Counters leave it alone.
pub const INFINITE: &str = "∞";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterSpec {
    pub steps: i64,
    pub tick_ms: u32,
}

impl CounterSpec {
    /// Hero stats count up slowly.
    pub const STATS: CounterSpec = CounterSpec { steps: 20, tick_ms: 100 };
    /// Pricing amounts count up in more, shorter ticks.
    pub const PRICING: CounterSpec = CounterSpec { steps: 30, tick_ms: 50 };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Continue(i64),
    Done(i64),
}

impl Tick {
    pub fn value(self) -> i64 {
        match self {
            Tick::Continue(v) | Tick::Done(v) => v,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterState {
    target: i64,
    current: i64,
    increment: i64,
}

impl CounterState {
    /// Returns `None` for the infinite sentinel, which is never animated.
    /// Anything else counts towards its leading integer, or 0 if it has none.
    pub fn parse(text: &str, steps: i64) -> Option<Self> {
        if text.trim() == INFINITE {
            return None;
        }
        Some(Self::new(leading_int(text), steps))
    }

    pub fn new(target: i64, steps: i64) -> Self {
        let steps = steps.max(1);
        Self {
            target,
            current: 0,
            // Ceiling division; `/` already rounds negatives up.
            increment: target / steps + i64::from(target % steps > 0),
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    pub fn increment(&self) -> i64 {
        self.increment
    }

    pub fn is_done(&self) -> bool {
        self.current == self.target
    }

    pub fn tick(&mut self) -> Tick {
        let next = self.current.saturating_add(self.increment);
        if next >= self.target {
            self.current = self.target;
            Tick::Done(self.current)
        } else {
            self.current = next;
            Tick::Continue(self.current)
        }
    }
}

fn leading_int(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    let value = digits.parse::<i64>().unwrap_or(0);
    if negative {
        -value
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(state: &mut CounterState) -> Vec<i64> {
        let mut seen = Vec::new();
        loop {
            let tick = state.tick();
            seen.push(tick.value());
            if let Tick::Done(_) = tick {
                return seen;
            }
            assert!(seen.len() < 10_000, "counter never finished");
        }
    }

    #[test]
    fn stats_counter_reaches_120_in_twenty_ticks() {
        let mut state = CounterState::parse("120", CounterSpec::STATS.steps).unwrap();
        assert_eq!(state.increment(), 6);
        let seen = run(&mut state);
        assert_eq!(seen.len(), 20);
        assert_eq!(seen.first(), Some(&6));
        assert_eq!(seen.last(), Some(&120));
    }

    #[test]
    fn infinite_sentinel_is_not_animated() {
        assert!(CounterState::parse("∞", 20).is_none());
        assert!(CounterState::parse("∞", 30).is_none());
    }

    #[test]
    fn non_numeric_text_counts_to_zero() {
        let mut state = CounterState::parse("soon", 20).unwrap();
        assert_eq!(state.target(), 0);
        assert_eq!(state.tick(), Tick::Done(0));
    }

    #[test]
    fn leading_integer_is_used() {
        assert_eq!(CounterState::parse("50+", 20).unwrap().target(), 50);
        assert_eq!(CounterState::parse("  7k", 20).unwrap().target(), 7);
    }

    #[test]
    fn last_tick_is_clamped_to_target() {
        // ceil(49 / 30) = 2, so the final step would overshoot to 50
        let mut state = CounterState::parse("49", CounterSpec::PRICING.steps).unwrap();
        let seen = run(&mut state);
        assert_eq!(seen.len(), 25);
        assert_eq!(*seen.last().unwrap(), 49);
        assert!(state.is_done());
    }

    #[test]
    fn sequence_is_non_decreasing_and_ends_on_target() {
        for target in [0, 1, 2, 19, 20, 21, 99, 100, 1234, 99_999] {
            for steps in [20, 30] {
                let mut state = CounterState::new(target, steps);
                let seen = run(&mut state);
                assert!(seen.windows(2).all(|w| w[0] <= w[1]), "target {target}");
                assert_eq!(*seen.last().unwrap(), target);
                assert!(seen.len() as i64 <= steps);
            }
        }
    }

    #[test]
    fn largest_target_counts_without_overflow() {
        let mut state = CounterState::parse("9223372036854775807", CounterSpec::STATS.steps).unwrap();
        assert_eq!(state.target(), i64::MAX);
        let seen = run(&mut state);
        assert!(seen.len() <= 20);
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*seen.last().unwrap(), i64::MAX);
    }

    #[test]
    fn negative_target_lands_in_one_tick() {
        let mut state = CounterState::parse("-5", 20).unwrap();
        assert_eq!(state.tick(), Tick::Done(-5));
    }
}
