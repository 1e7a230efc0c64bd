use yew::prelude::*;

use crate::animation::reveal::{ElementRole, RevealOptions};
use crate::components::section_header::SectionHeader;
use crate::hooks::reveal::{use_choreography, use_reveal};

const FEATURES: &[(&str, &str, &str)] = &[
    ("🧠", "Shared memory", "Every partner knows what the others did yesterday, so nothing gets explained twice."),
    ("🔁", "Always on", "Work keeps moving around the clock. Wake up to progress, not a to-do list."),
    ("🛡️", "You stay in charge", "Nothing ships without your say. Approve, tweak or roll back with one click."),
    ("🔌", "Plugs into your tools", "GitHub, Figma, Notion, Slack and the rest of the stack you already use."),
];

#[derive(Properties, PartialEq)]
struct FeatureProps {
    icon: AttrValue,
    title: AttrValue,
    body: AttrValue,
}

#[function_component(Feature)]
fn feature(props: &FeatureProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), RevealOptions::default());
    let pose = use_choreography(revealed, ElementRole::Feature.choreography());

    html! {
        <div ref={node} class={classes!(ElementRole::Feature.class(), revealed.then(|| "animate-in"))}>
            <div class={classes!("feature-icon", pose.class())}>{props.icon.clone()}</div>
            <h3>{props.title.clone()}</h3>
            <p>{props.body.clone()}</p>
        </div>
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id="features" class="features-section">
            <SectionHeader title="Built for momentum" />
            <div class="features-grid">
                { for FEATURES.iter().map(|(icon, title, body)| html! {
                    <Feature icon={*icon} title={*title} body={*body} />
                }) }
            </div>
        </section>
    }
}
