use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use log::{error, info};
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::config;
use crate::waitlist::state::{FormPhase, WaitlistAction, WaitlistError, WaitlistState};

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Runs `action` through the state machine, re-renders, and starts any
/// timers it asks for. Timers feed back into the same machine.
fn drive(machine: Rc<RefCell<WaitlistState>>, view: UseStateSetter<WaitlistState>, action: WaitlistAction) {
    let (next, schedule) = machine.borrow().step(action);
    *machine.borrow_mut() = next.clone();
    view.set(next);

    for (delay, action) in schedule {
        let machine = machine.clone();
        let view = view.clone();
        Timeout::new(delay, move || drive(machine, view, action)).forget();
    }
}

async fn post_form(endpoint: &str, body: FormData) -> Result<(), WaitlistError> {
    let response = Request::post(endpoint)
        .header("Accept", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| WaitlistError::Network(e.to_string()))?;

    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    if let Ok(body) = response.json::<ErrorResponse>().await {
        error!("Waitlist rejected the signup: {}", body.error);
    }
    Err(WaitlistError::Status(status))
}

#[function_component(WaitlistForm)]
pub fn waitlist_form() -> Html {
    let form_ref = use_node_ref();
    let machine = use_mut_ref(WaitlistState::default);
    let view = use_state(WaitlistState::default);

    let onsubmit = {
        let form_ref = form_ref.clone();
        let machine = machine.clone();
        let view = view.setter();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let before = machine.borrow().generation;
            drive(machine.clone(), view.clone(), WaitlistAction::Submit);
            if machine.borrow().generation == before {
                info!("Waitlist submit ignored, one is already in flight");
                return;
            }

            let body = form_ref
                .cast::<HtmlFormElement>()
                .and_then(|form| FormData::new_with_form(&form).ok());

            let machine = machine.clone();
            let view = view.clone();
            spawn_local(async move {
                let outcome = match body {
                    Some(body) => post_form(&config::waitlist_endpoint(), body).await,
                    None => Err(WaitlistError::Network("form data unavailable".to_string())),
                };
                match &outcome {
                    Ok(()) => info!("Joined the waitlist"),
                    Err(e) => error!("Form submission error: {}", e),
                }
                drive(machine, view, WaitlistAction::Settled(outcome));
            });
        })
    };

    let state = (*view).clone();
    let theme = match state.phase {
        FormPhase::Success => Some("is-success"),
        FormPhase::Error => Some("is-error"),
        FormPhase::Idle | FormPhase::Submitting => None,
    };

    html! {
        <section id="waitlist" class="waitlist-section">
            <SectionHeader
                title="Join the waitlist"
                subtitle="Be first in line when your crew is ready"
            />
            <form
                ref={form_ref}
                class={classes!("waitlist-form", theme)}
                action={config::waitlist_endpoint()}
                method="POST"
                {onsubmit}
            >
                if state.shows_confirmation() {
                    <div class="form-result">
                        <div class="form-result-icon">{"✓"}</div>
                        <h3>{"Welcome to the Future!"}</h3>
                        <p>{"You're on the waitlist. We'll be in touch soon with your early access invitation."}</p>
                    </div>
                } else {
                    <div class="form-fields">
                        <input type="text" name="name" placeholder="Your name" required=true />
                        <input type="email" name="email" placeholder="you@example.com" required=true />
                        <button
                            type="submit"
                            class={classes!("form-submit", state.button_busy.then(|| "is-busy"))}
                            disabled={state.button_busy}
                        >
                            <span>{state.button_label()}</span>
                        </button>
                    </div>
                }
            </form>
        </section>
    }
}
