use gloo_timers::callback::Timeout;
use log::info;
use web_sys::{window, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::easter_egg::konami::{Celebration, KonamiTracker};

const CELEBRATION_MS: u32 = 5000;
const RAINBOW_CLASS: &str = "rainbow";

fn set_rainbow(on: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let list = body.class_list();
    let _ = if on { list.add_1(RAINBOW_CLASS) } else { list.remove_1(RAINBOW_CLASS) };
}

#[function_component(EasterEgg)]
pub fn easter_egg() -> Html {
    let tracker = use_mut_ref(KonamiTracker::new);
    let celebration = use_mut_ref(Celebration::default);
    let active = use_state(|| false);

    {
        let active = active.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if !tracker.borrow_mut().push(&e.code()) {
                return;
            }
            info!("Konami code entered");
            let ticket = celebration.borrow_mut().start();
            set_rainbow(true);
            active.set(true);

            let active = active.clone();
            let celebration = celebration.clone();
            Timeout::new(CELEBRATION_MS, move || {
                // A newer trigger keeps the party going on its own timer.
                if celebration.borrow_mut().end(ticket) {
                    set_rainbow(false);
                    active.set(false);
                }
            })
            .forget();
        });
    }

    if !*active {
        return html! {};
    }

    html! {
        <div class="easter-egg-message" role="status">
            {"🦇 Alfred approves! The SparkCrew is strong with you. 🦇"}
        </div>
    }
}
