use std::rc::Rc;

use yew::Reducible;

pub const DRIFT_RANGE_PX: f64 = 10.0;
pub const SETTLE_AFTER_MS: u32 = 2000;

/// Cards further down the list drift less often.
pub fn drift_period(index: usize) -> u32 {
    3000 + index as u32 * 1000
}

/// Maps two uniform samples in `[0, 1)` to an offset in `[-5, 5)` px.
pub fn drift_from_unit(rx: f64, ry: f64) -> (f64, f64) {
    ((rx - 0.5) * DRIFT_RANGE_PX, (ry - 0.5) * DRIFT_RANGE_PX)
}

pub enum DriftAction {
    Enter,
    Leave,
    Nudge(f64, f64),
    /// Undoes the nudge with this offset unless the card is hovered or has
    /// moved on to another offset since.
    Settle(f64, f64),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DriftState {
    pub hovered: bool,
    pub offset: Option<(f64, f64)>,
}

impl DriftState {
    pub fn apply(&self, action: DriftAction) -> Self {
        let mut next = self.clone();
        match action {
            DriftAction::Enter => {
                next.hovered = true;
                next.offset = None;
            }
            DriftAction::Leave => {
                next.hovered = false;
                next.offset = None;
            }
            DriftAction::Nudge(dx, dy) => {
                if !self.hovered {
                    next.offset = Some((dx, dy));
                }
            }
            DriftAction::Settle(dx, dy) => {
                if !self.hovered && self.offset == Some((dx, dy)) {
                    next.offset = None;
                }
            }
        }
        next
    }

    pub fn transform(&self) -> Option<String> {
        self.offset
            .map(|(dx, dy)| format!("translate({:.2}px, {:.2}px)", dx, dy))
    }
}

impl Reducible for DriftState {
    type Action = DriftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_stay_within_five_pixels() {
        for (rx, ry) in [(0.0, 0.0), (0.5, 0.5), (0.999, 0.25)] {
            let (dx, dy) = drift_from_unit(rx, ry);
            assert!((-5.0..5.0).contains(&dx));
            assert!((-5.0..5.0).contains(&dy));
        }
        assert_eq!(drift_from_unit(0.0, 0.5), (-5.0, 0.0));
    }

    #[test]
    fn periods_are_staggered_by_index() {
        assert_eq!(drift_period(0), 3000);
        assert_eq!(drift_period(2), 5000);
    }

    #[test]
    fn hovered_card_does_not_drift() {
        let state = DriftState::default().apply(DriftAction::Enter);
        let state = state.apply(DriftAction::Nudge(3.0, -2.0));
        assert_eq!(state.offset, None);
        assert!(state.hovered);
    }

    #[test]
    fn nudge_settles_after_its_own_timer() {
        let state = DriftState::default().apply(DriftAction::Nudge(3.0, -2.0));
        assert_eq!(state.transform().as_deref(), Some("translate(3.00px, -2.00px)"));
        let settled = state.apply(DriftAction::Settle(3.0, -2.0));
        assert_eq!(settled.offset, None);
    }

    #[test]
    fn stale_settle_keeps_newer_nudge() {
        let first = DriftState::default().apply(DriftAction::Nudge(1.0, 1.0));
        let second = first.apply(DriftAction::Nudge(2.0, 2.0));
        let after = second.apply(DriftAction::Settle(1.0, 1.0));
        assert_eq!(after.offset, Some((2.0, 2.0)));
    }

    #[test]
    fn settle_is_skipped_while_hovered() {
        let hovered = DriftState::default()
            .apply(DriftAction::Nudge(1.0, 1.0))
            .apply(DriftAction::Enter);
        let after = hovered.apply(DriftAction::Settle(1.0, 1.0));
        assert!(after.hovered);
        assert_eq!(after.offset, None);
    }

    #[test]
    fn leave_resets_pose() {
        let state = DriftState::default()
            .apply(DriftAction::Enter)
            .apply(DriftAction::Leave);
        assert_eq!(state, DriftState::default());
    }
}
