/// Past this many pixels the nav bar switches to its solid look.
pub const NAV_SCROLLED_AFTER_PX: f64 = 100.0;
/// Breathing room left above an anchor target.
pub const ANCHOR_GAP_PX: f64 = 20.0;

pub fn nav_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_AFTER_PX
}

/// Where to scroll so the target clears the fixed nav bar.
pub fn anchor_scroll_top(target_offset_top: f64, nav_height: f64) -> f64 {
    target_offset_top - nav_height - ANCHOR_GAP_PX
}

/// The selector an in-page link scrolls to. A bare "#" has none.
pub fn anchor_selector(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// The scroll hint fades out over the first half of the page.
pub fn indicator_opacity(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let range = scroll_height - viewport_height;
    if range <= 0.0 {
        return 1.0;
    }
    (1.0 - (scroll_y / range) * 2.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_threshold_is_exclusive() {
        assert!(!nav_is_scrolled(0.0));
        assert!(!nav_is_scrolled(100.0));
        assert!(nav_is_scrolled(100.5));
    }

    #[test]
    fn anchor_accounts_for_nav() {
        assert_eq!(anchor_scroll_top(1200.0, 80.0), 1100.0);
    }

    #[test]
    fn bare_hash_has_no_target() {
        assert_eq!(anchor_selector("#"), None);
        assert_eq!(anchor_selector(""), None);
        assert_eq!(anchor_selector("#faq"), Some("#faq"));
        assert_eq!(anchor_selector("#no-such-section"), Some("#no-such-section"));
    }

    #[test]
    fn indicator_fades_by_half_way() {
        assert_eq!(indicator_opacity(0.0, 3000.0, 1000.0), 1.0);
        assert_eq!(indicator_opacity(500.0, 3000.0, 1000.0), 0.5);
        assert_eq!(indicator_opacity(1000.0, 3000.0, 1000.0), 0.0);
        assert_eq!(indicator_opacity(2000.0, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn short_page_keeps_indicator() {
        assert_eq!(indicator_opacity(0.0, 800.0, 1000.0), 1.0);
    }
}
