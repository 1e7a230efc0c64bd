use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::animation::scroll::{anchor_scroll_top, anchor_selector};

/// Current vertical scroll offset, updated on every scroll event.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state(|| window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0));

    {
        let scroll_y = scroll_y.setter();
        use_effect_with_deps(
            move |_| {
                let window = window();
                let callback = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        if let Some(y) = window.as_ref().and_then(|w| w.scroll_y().ok()) {
                            scroll_y.set(y);
                        }
                    }) as Box<dyn FnMut()>)
                };

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(window) = &window {
                        let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    *scroll_y
}

fn scroll_to_anchor(selector: &str, nav: &NodeRef) {
    let Some(window) = window() else { return };
    let Some(target) = window
        .document()
        .and_then(|d| d.query_selector(selector).ok().flatten())
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let nav_height = nav.cast::<HtmlElement>().map(|n| n.offset_height()).unwrap_or(0);
    let options = ScrollToOptions::new();
    options.set_top(anchor_scroll_top(target.offset_top() as f64, nav_height as f64));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Makes in-page `#anchor` links glide to their section, leaving room for
/// the fixed nav bar. Matched links never fall back to the browser jump,
/// even when the target is missing.
#[hook]
pub fn use_anchor_scrolling(nav: NodeRef) {
    use_event_with_window("click", move |e: MouseEvent| {
        let Some(link) = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("a[href^='#']").ok().flatten())
        else {
            return;
        };
        e.prevent_default();
        let href = link.get_attribute("href").unwrap_or_default();
        if let Some(selector) = anchor_selector(&href) {
            scroll_to_anchor(selector, &nav);
        }
    });
}
