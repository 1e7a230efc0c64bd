use yew::prelude::*;

use crate::animation::reveal::{ElementRole, RevealOptions};
use crate::hooks::reveal::use_reveal;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), RevealOptions::default());

    html! {
        <div ref={node} class={classes!(ElementRole::SectionHeader.class(), revealed.then(|| "animate-in"))}>
            <h2 class="section-title">{props.title.clone()}</h2>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! { <p class="section-subtitle">{subtitle.clone()}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
