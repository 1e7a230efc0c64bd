use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::animation::reveal::{Choreography, Pose, RevealOptions, RevealTracker};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Starts watching `element` and calls `on_reveal` the first time it becomes
/// visible enough. The closure has to outlive the observer.
fn observe_once(
    element: &Element,
    options: RevealOptions,
    on_reveal: impl Fn() + 'static,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    let mut tracker = RevealTracker::default();
    let callback: ObserverCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if tracker.observe(entry.is_intersecting(), entry.intersection_ratio(), &options) {
                observer.disconnect();
                on_reveal();
            }
        }
    });

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    observer.observe(element);
    Some((observer, callback))
}

/// Flips to true once, the first time the node scrolls into view.
#[hook]
pub fn use_reveal(node: NodeRef, options: RevealOptions) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let watch = if *revealed {
                    None
                } else {
                    let setter = revealed.setter();
                    node.cast::<Element>()
                        .and_then(|element| observe_once(&element, options.clone(), move || setter.set(true)))
                };

                move || {
                    if let Some((observer, _callback)) = watch {
                        observer.disconnect();
                    }
                }
            },
            (node, options),
        );
    }

    *revealed
}

/// Plays `choreography` from the moment `started` turns true.
#[hook]
pub fn use_choreography(started: bool, choreography: Choreography) -> Pose {
    let pose = use_state(Pose::default);

    {
        let pose = pose.setter();
        use_effect_with_deps(
            move |(started, choreography)| {
                let mut timers = Vec::new();
                if *started {
                    for &(at, next) in choreography.frames() {
                        let pose = pose.clone();
                        timers.push(Timeout::new(at, move || pose.set(next)));
                    }
                }
                // Dropping a Timeout cancels it.
                move || drop(timers)
            },
            (started, choreography),
        );
    }

    *pose
}

/// Turns true `delay_ms` after `trigger` does, and stays true.
#[hook]
pub fn use_delayed(trigger: bool, delay_ms: u32) -> bool {
    let fired = use_state(|| false);

    {
        let fired = fired.clone();
        use_effect_with_deps(
            move |trigger| {
                let timer = (*trigger && !*fired).then(|| {
                    let setter = fired.setter();
                    Timeout::new(delay_ms, move || setter.set(true))
                });
                move || drop(timer)
            },
            trigger,
        );
    }

    *fired
}
