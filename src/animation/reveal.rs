//! Scroll-triggered reveals: when an element first becomes visible, and the
//! timed poses that play afterwards.

#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that has to be visible.
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -100px 0px",
        }
    }
}

impl RevealOptions {
    /// Plain visibility with no margin, used for the hero stats block.
    pub fn any_visible() -> Self {
        Self {
            threshold: 0.0,
            root_margin: "0px",
        }
    }
}

/// Latches on the first qualifying intersection and ignores the rest.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealTracker {
    revealed: bool,
}

impl RevealTracker {
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// True only for the observation that reveals the element.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64, options: &RevealOptions) -> bool {
        if self.revealed || !is_intersecting || ratio < options.threshold {
            return false;
        }
        self.revealed = true;
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementRole {
    Step,
    PartnerCard,
    Feature,
    PricingCard,
    SectionHeader,
}

impl ElementRole {
    pub fn class(self) -> &'static str {
        match self {
            ElementRole::Step => "step",
            ElementRole::PartnerCard => "partner-card",
            ElementRole::Feature => "feature",
            ElementRole::PricingCard => "pricing-card",
            ElementRole::SectionHeader => "section-header",
        }
    }

    /// The choreography played on the element's accent node once revealed.
    /// Pricing cards count their amount instead and section headers only
    /// fade in.
    pub fn choreography(self) -> Choreography {
        match self {
            ElementRole::Step => Choreography::pulse(300, 200, Pose::Scale105),
            ElementRole::PartnerCard => Choreography::pulse(200, 300, Pose::ScaleTilt),
            ElementRole::Feature => Choreography::pulse(200, 300, Pose::Scale120),
            ElementRole::PricingCard | ElementRole::SectionHeader => Choreography::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Pose {
    #[default]
    Rest,
    Scale105,
    Scale120,
    ScaleTilt,
}

impl Pose {
    pub fn class(self) -> Option<&'static str> {
        match self {
            Pose::Rest => None,
            Pose::Scale105 => Some("pose-scale-105"),
            Pose::Scale120 => Some("pose-scale-120"),
            Pose::ScaleTilt => Some("pose-scale-tilt"),
        }
    }
}

/// Frames sorted by delay, measured from the reveal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Choreography {
    frames: Vec<(u32, Pose)>,
}

impl Choreography {
    /// Go to `pose` after `delay` ms, hold it for `hold` ms, then rest.
    pub fn pulse(delay: u32, hold: u32, pose: Pose) -> Self {
        Self {
            frames: vec![(delay, pose), (delay + hold, Pose::Rest)],
        }
    }

    pub fn frames(&self) -> &[(u32, Pose)] {
        &self.frames
    }

    pub fn pose_at(&self, elapsed_ms: u32) -> Pose {
        self.frames
            .iter()
            .take_while(|(at, _)| *at <= elapsed_ms)
            .last()
            .map(|(_, pose)| *pose)
            .unwrap_or_default()
    }
}

/// Partner skill chips slide in one after another.
pub fn skill_delay(index: usize) -> u32 {
    400 + index as u32 * 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_fires_once() {
        let options = RevealOptions::default();
        let mut tracker = RevealTracker::default();
        assert!(!tracker.observe(false, 0.0, &options));
        assert!(tracker.observe(true, 0.25, &options));
        assert!(!tracker.observe(false, 0.0, &options));
        assert!(!tracker.observe(true, 0.9, &options));
        assert!(tracker.revealed());
    }

    #[test]
    fn below_threshold_does_not_reveal() {
        let options = RevealOptions::default();
        let mut tracker = RevealTracker::default();
        assert!(!tracker.observe(true, 0.05, &options));
        assert!(!tracker.revealed());
        assert!(tracker.observe(true, 0.1, &options));
    }

    #[test]
    fn any_visible_reveals_on_first_pixel() {
        let mut tracker = RevealTracker::default();
        assert!(tracker.observe(true, 0.0, &RevealOptions::any_visible()));
    }

    #[test]
    fn step_pulses_between_300_and_500() {
        let dance = ElementRole::Step.choreography();
        assert_eq!(dance.pose_at(0), Pose::Rest);
        assert_eq!(dance.pose_at(299), Pose::Rest);
        assert_eq!(dance.pose_at(300), Pose::Scale105);
        assert_eq!(dance.pose_at(499), Pose::Scale105);
        assert_eq!(dance.pose_at(500), Pose::Rest);
    }

    #[test]
    fn partner_and_feature_pulses() {
        let partner = ElementRole::PartnerCard.choreography();
        assert_eq!(partner.frames(), &[(200, Pose::ScaleTilt), (500, Pose::Rest)]);
        let feature = ElementRole::Feature.choreography();
        assert_eq!(feature.pose_at(250), Pose::Scale120);
        assert_eq!(feature.pose_at(10_000), Pose::Rest);
    }

    #[test]
    fn pricing_and_headers_have_no_frames() {
        assert!(ElementRole::PricingCard.choreography().frames().is_empty());
        assert_eq!(ElementRole::SectionHeader.choreography().pose_at(1000), Pose::Rest);
    }

    #[test]
    fn skill_chips_are_staggered() {
        assert_eq!(skill_delay(0), 400);
        assert_eq!(skill_delay(3), 700);
    }
}
