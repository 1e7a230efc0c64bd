use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::animation::counter::{CounterSpec, CounterState, Tick};

/// Text to display for a number that counts up to `text` once `start` is
/// set. Shows `text` unchanged until then, and forever if it is "∞".
#[hook]
pub fn use_counter(text: String, spec: CounterSpec, start: bool) -> String {
    let shown = use_state(|| text.clone());

    {
        let shown = shown.setter();
        use_effect_with_deps(
            move |(text, start)| {
                let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

                if *start {
                    if let Some(mut counter) = CounterState::parse(text, spec.steps) {
                        let finished_handle = interval_handle.clone();
                        let interval = Interval::new(spec.tick_ms, move || {
                            let tick = counter.tick();
                            shown.set(tick.value().to_string());
                            if let Tick::Done(_) = tick {
                                // Can't drop the interval from inside its own callback.
                                let finished_handle = finished_handle.clone();
                                spawn_local(async move {
                                    drop(finished_handle.borrow_mut().take());
                                });
                            }
                        });
                        *interval_handle.borrow_mut() = Some(interval);
                    }
                }

                move || {
                    drop(interval_handle.borrow_mut().take());
                }
            },
            (text, start),
        );
    }

    (*shown).clone()
}
