use yew::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::animation::reveal::{skill_delay, ElementRole, RevealOptions};
use crate::animation::tilt::tilt_transform;
use crate::components::section_header::SectionHeader;
use crate::hooks::reveal::{use_choreography, use_delayed, use_reveal};

struct Partner {
    name: &'static str,
    role: &'static str,
    avatar: &'static str,
    skills: &'static [&'static str],
}

const PARTNERS: &[Partner] = &[
    Partner { name: "Nova", role: "Product strategist", avatar: "🧭", skills: &["Roadmaps", "User research", "Pricing"] },
    Partner { name: "Bolt", role: "Full-stack engineer", avatar: "⚡", skills: &["Rust", "TypeScript", "Postgres", "CI"] },
    Partner { name: "Iris", role: "Designer", avatar: "🎨", skills: &["Brand", "UI systems", "Motion"] },
    Partner { name: "Echo", role: "Growth lead", avatar: "📣", skills: &["Copy", "SEO", "Launches"] },
];

#[derive(Properties, PartialEq)]
struct SkillChipProps {
    label: AttrValue,
    index: usize,
    revealed: bool,
}

#[function_component(SkillChip)]
fn skill_chip(props: &SkillChipProps) -> Html {
    let shown = use_delayed(props.revealed, skill_delay(props.index));
    html! {
        <span class={classes!("skill", shown.then(|| "shown"))}>{props.label.clone()}</span>
    }
}

#[derive(Properties, PartialEq)]
struct PartnerCardProps {
    index: usize,
}

#[function_component(PartnerCard)]
fn partner_card(props: &PartnerCardProps) -> Html {
    let partner = &PARTNERS[props.index];
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), RevealOptions::default());
    let pose = use_choreography(revealed, ElementRole::PartnerCard.choreography());
    let tilt = use_state(|| None::<String>);

    let onmousemove = {
        let node = node.clone();
        let tilt = tilt.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(card) = node.cast::<Element>() {
                let rect = card.get_bounding_client_rect();
                let x = e.client_x() as f64 - rect.left();
                let y = e.client_y() as f64 - rect.top();
                tilt.set(Some(tilt_transform(x, y, rect.width(), rect.height())));
            }
        })
    };

    let onmouseleave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| tilt.set(None))
    };

    let style = (*tilt).as_ref().map(|transform| format!("transform: {};", transform));

    html! {
        <div
            ref={node}
            class={classes!(ElementRole::PartnerCard.class(), revealed.then(|| "animate-in"))}
            {style}
            {onmousemove}
            {onmouseleave}
        >
            <div class={classes!("partner-avatar", pose.class())}>{partner.avatar}</div>
            <h3 class="partner-name">{partner.name}</h3>
            <p class="partner-role">{partner.role}</p>
            <div class="partner-skills">
                { for partner.skills.iter().enumerate().map(|(index, skill)| html! {
                    <SkillChip label={*skill} {index} {revealed} />
                }) }
            </div>
        </div>
    }
}

#[function_component(Partners)]
pub fn partners() -> Html {
    html! {
        <section id="crew" class="partners-section">
            <SectionHeader title="Meet the crew" subtitle="Specialists who never get tired of your project" />
            <div class="partners-grid">
                { for (0..PARTNERS.len()).map(|index| html! { <PartnerCard {index} /> }) }
            </div>
        </section>
    }
}
