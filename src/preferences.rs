use log::info;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
const HIGH_CONTRAST_QUERY: &str = "(prefers-contrast: high)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    pub reduced_motion: bool,
    pub high_contrast: bool,
}

impl Preferences {
    pub fn detect() -> Self {
        Self {
            reduced_motion: media_matches(REDUCED_MOTION_QUERY),
            high_contrast: media_matches(HIGH_CONTRAST_QUERY),
        }
    }

    /// Custom properties to set on the root element.
    pub fn overrides(&self) -> Vec<(&'static str, &'static str)> {
        let mut props = Vec::new();
        if self.reduced_motion {
            props.push(("--transition-fast", "0.01ms"));
            props.push(("--transition-smooth", "0.01ms"));
            props.push(("--transition-slow", "0.01ms"));
        }
        if self.high_contrast {
            props.push(("--color-border", "#ffffff"));
            props.push(("--color-text-secondary", "#ffffff"));
        }
        props
    }
}

fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Checked once at start-up; later preference changes need a reload.
pub fn apply_user_preferences() {
    let prefs = Preferences::detect();
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let style = root.style();
    for (name, value) in prefs.overrides() {
        let _ = style.set_property(name, value);
    }
    info!("Applied preferences: {:?}", prefs);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_override_nothing() {
        assert!(Preferences::default().overrides().is_empty());
    }

    #[test]
    fn reduced_motion_flattens_transitions() {
        let prefs = Preferences { reduced_motion: true, high_contrast: false };
        let props = prefs.overrides();
        assert_eq!(props.len(), 3);
        assert!(props.iter().all(|(_, value)| *value == "0.01ms"));
    }

    #[test]
    fn high_contrast_whitens_text_and_borders() {
        let prefs = Preferences { reduced_motion: false, high_contrast: true };
        assert_eq!(
            prefs.overrides(),
            vec![("--color-border", "#ffffff"), ("--color-text-secondary", "#ffffff")]
        );
    }
}
