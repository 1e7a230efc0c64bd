use gloo_timers::callback::{Interval, Timeout};
use web_sys::js_sys::Math;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use crate::animation::counter::CounterSpec;
use crate::animation::drift::{drift_from_unit, drift_period, DriftAction, DriftState, SETTLE_AFTER_MS};
use crate::animation::reveal::RevealOptions;
use crate::animation::scroll::indicator_opacity;
use crate::hooks::counter::use_counter;
use crate::hooks::reveal::{use_delayed, use_reveal};
use crate::hooks::scroll::use_scroll_y;

const STATS: &[(&str, &str)] = &[("120", "projects shipped"), ("8", "crew specialists"), ("∞", "ideas in the queue")];
const STATS_DELAY_MS: u32 = 1000;

const FLOATING_CARDS: &[(&str, &str)] = &[
    ("🚀", "Landing page deployed"),
    ("✅", "12 tests passing"),
    ("💬", "Nova left a comment"),
];

#[derive(Properties, PartialEq)]
struct StatNumberProps {
    value: AttrValue,
    label: AttrValue,
    start: bool,
}

#[function_component(StatNumber)]
fn stat_number(props: &StatNumberProps) -> Html {
    let shown = use_counter(props.value.to_string(), CounterSpec::STATS, props.start);
    html! {
        <div class="stat">
            <span class="stat-number">{shown}</span>
            <span class="stat-label">{props.label.clone()}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FloatingCardProps {
    index: usize,
    icon: AttrValue,
    text: AttrValue,
}

#[function_component(FloatingCard)]
fn floating_card(props: &FloatingCardProps) -> Html {
    let drift = use_reducer(DriftState::default);

    {
        let dispatcher = drift.dispatcher();
        let index = props.index;
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(drift_period(index), move || {
                    let (dx, dy) = drift_from_unit(Math::random(), Math::random());
                    // Ignored by the reducer while hovered.
                    dispatcher.dispatch(DriftAction::Nudge(dx, dy));
                    let dispatcher = dispatcher.clone();
                    Timeout::new(SETTLE_AFTER_MS, move || {
                        dispatcher.dispatch(DriftAction::Settle(dx, dy));
                    })
                    .forget();
                });
                move || drop(interval)
            },
            (),
        );
    }

    let onmouseenter = {
        let drift = drift.dispatcher();
        Callback::from(move |_: MouseEvent| drift.dispatch(DriftAction::Enter))
    };
    let onmouseleave = {
        let drift = drift.dispatcher();
        Callback::from(move |_: MouseEvent| drift.dispatch(DriftAction::Leave))
    };

    let style = drift.transform().map(|transform| format!("transform: {};", transform));

    html! {
        <div
            class={classes!("floating-card", format!("floating-card-{}", props.index + 1), drift.hovered.then(|| "hovered"))}
            {style}
            {onmouseenter}
            {onmouseleave}
        >
            <span class="floating-icon">{props.icon.clone()}</span>
            <span class="floating-text">{props.text.clone()}</span>
        </div>
    }
}

#[function_component(ScrollIndicator)]
fn scroll_indicator() -> Html {
    let scroll_y = use_scroll_y();

    let opacity = window()
        .and_then(|w| {
            let viewport = w.inner_height().ok()?.as_f64()?;
            let page = w.document()?.body()?.scroll_height() as f64;
            Some(indicator_opacity(scroll_y, page, viewport))
        })
        .unwrap_or(1.0);

    html! {
        <div class="scroll-hint" style={format!("opacity: {:.3};", opacity)}>
            <div class="scroll-indicator"></div>
            <span>{"Scroll"}</span>
        </div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let stats_ref = use_node_ref();
    let stats_visible = use_reveal(stats_ref.clone(), RevealOptions::any_visible());
    let counting = use_delayed(stats_visible, STATS_DELAY_MS);

    html! {
        <section id="home" class="hero">
            <div class="hero-content">
                <span class="hero-badge">{"Early access opening soon"}</span>
                <h1 class="hero-title">
                    {"Your ideas deserve a "}
                    <span class="gradient-text">{"crew"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"SparkCrew gives you a team of AI partners that plan, build and ship with you, around the clock."}
                </p>
                <div class="hero-actions">
                    <a href="#waitlist" class="btn-primary">{"Join the waitlist"}</a>
                    <a href="#how-it-works" class="btn-secondary">{"See how it works"}</a>
                </div>
                <div class="hero-stats" ref={stats_ref}>
                    { for STATS.iter().map(|(value, label)| html! {
                        <StatNumber value={*value} label={*label} start={counting} />
                    }) }
                </div>
            </div>
            <div class="hero-visual">
                { for FLOATING_CARDS.iter().enumerate().map(|(index, (icon, text))| html! {
                    <FloatingCard {index} icon={*icon} text={*text} />
                }) }
            </div>
            <ScrollIndicator />
        </section>
    }
}
