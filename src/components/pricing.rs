use yew::prelude::*;

use crate::animation::counter::CounterSpec;
use crate::animation::reveal::{ElementRole, RevealOptions};
use crate::components::section_header::SectionHeader;
use crate::hooks::counter::use_counter;
use crate::hooks::reveal::use_reveal;

struct Plan {
    name: &'static str,
    amount: &'static str,
    period: &'static str,
    perks: &'static [&'static str],
    featured: bool,
}

const PLANS: &[Plan] = &[
    Plan {
        name: "Solo",
        amount: "29",
        period: "/month",
        perks: &["2 crew partners", "Shared memory", "Email support"],
        featured: false,
    },
    Plan {
        name: "Crew",
        amount: "79",
        period: "/month",
        perks: &["5 crew partners", "Always-on work", "Tool integrations", "Priority support"],
        featured: true,
    },
    Plan {
        name: "Fleet",
        amount: "∞",
        period: "talk to us",
        perks: &["Unlimited partners", "Custom skills", "Dedicated success lead"],
        featured: false,
    },
];

#[derive(Properties, PartialEq)]
struct PricingCardProps {
    index: usize,
}

#[function_component(PricingCard)]
fn pricing_card(props: &PricingCardProps) -> Html {
    let plan = &PLANS[props.index];
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), RevealOptions::default());
    let amount = use_counter(plan.amount.to_string(), CounterSpec::PRICING, revealed);

    html! {
        <div
            ref={node}
            class={classes!(
                ElementRole::PricingCard.class(),
                plan.featured.then(|| "featured"),
                revealed.then(|| "animate-in"),
            )}
        >
            <h3 class="pricing-name">{plan.name}</h3>
            <div class="price">
                <span class="price-currency">{"$"}</span>
                <span class="price-amount">{amount}</span>
                <span class="price-period">{plan.period}</span>
            </div>
            <ul class="pricing-perks">
                { for plan.perks.iter().map(|perk| html! { <li>{*perk}</li> }) }
            </ul>
            <a href="#waitlist" class="pricing-cta">{"Get early access"}</a>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <section id="pricing" class="pricing-section">
            <SectionHeader title="Simple pricing" subtitle="Lock in early-access rates when you join the waitlist" />
            <div class="pricing-grid">
                { for (0..PLANS.len()).map(|index| html! { <PricingCard {index} /> }) }
            </div>
        </section>
    }
}
