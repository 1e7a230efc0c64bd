use yew::prelude::*;

use crate::animation::reveal::{ElementRole, RevealOptions};
use crate::components::section_header::SectionHeader;
use crate::hooks::reveal::{use_choreography, use_reveal};

const STEPS: &[(&str, &str, &str)] = &[
    ("01", "Tell us what you're building", "Describe your idea, your goals and your deadline. No templates, no forms."),
    ("02", "Meet your crew", "We assemble a team of specialist partners matched to the work in front of you."),
    ("03", "Ship together", "Your crew plans, builds and reviews with you, and keeps going while you sleep."),
];

#[derive(Properties, PartialEq)]
struct StepProps {
    number: AttrValue,
    title: AttrValue,
    body: AttrValue,
}

#[function_component(Step)]
fn step(props: &StepProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), RevealOptions::default());
    let pose = use_choreography(revealed, ElementRole::Step.choreography());

    html! {
        <div ref={node} class={classes!(ElementRole::Step.class(), revealed.then(|| "animate-in"))}>
            <div class={classes!("step-visual", pose.class())}>
                <span class="step-number">{props.number.clone()}</span>
            </div>
            <div class="step-content">
                <h3>{props.title.clone()}</h3>
                <p>{props.body.clone()}</p>
            </div>
        </div>
    }
}

#[function_component(Steps)]
pub fn steps() -> Html {
    html! {
        <section id="how-it-works" class="steps-section">
            <SectionHeader title="How it works" subtitle="From idea to launch in three steps" />
            <div class="steps">
                { for STEPS.iter().map(|(number, title, body)| html! {
                    <Step number={*number} title={*title} body={*body} />
                }) }
            </div>
        </section>
    }
}
