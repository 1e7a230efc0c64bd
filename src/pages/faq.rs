use yew::prelude::*;
use web_sys::{Element, KeyboardEvent, MouseEvent};

use crate::components::section_header::SectionHeader;

/// Which answer is expanded. Only one at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    /// Close everything, then open `index` unless it was the open one.
    pub fn toggle(self, index: usize) -> Self {
        match self.open {
            Some(current) if current == index => Self { open: None },
            _ => Self { open: Some(index) },
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_count(&self) -> usize {
        usize::from(self.open.is_some())
    }
}

pub const FAQ_ENTRIES: &[(&str, &str)] = &[
    (
        "What exactly is SparkCrew?",
        "SparkCrew pairs you with a small crew of AI partners, each with its own skills, that plan, build and ship alongside you.",
    ),
    (
        "When does early access open?",
        "We are letting people in from the waitlist in small batches. Join and you will hear from us as soon as your spot is ready.",
    ),
    (
        "Do I need to know how to code?",
        "No. Tell your crew what you want in plain words. If you do code, they will happily work in your repository and your style.",
    ),
    (
        "What happens to my data?",
        "Your projects stay yours. We never train on your work, and you can export or delete everything at any time.",
    ),
    (
        "Can I cancel anytime?",
        "Yes. Plans are monthly and there is nothing to sign. Cancel from your settings and you keep access until the end of the period.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    open: bool,
    /// Height to expand the answer to while open.
    open_height: i32,
    /// Emits the answer's natural height, measured at click time.
    on_toggle: Callback<i32>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let answer_ref = use_node_ref();

    let measure_and_toggle = {
        let answer_ref = answer_ref.clone();
        let on_toggle = props.on_toggle.clone();
        move || {
            let height = answer_ref
                .cast::<Element>()
                .map(|answer| answer.scroll_height())
                .unwrap_or(0);
            on_toggle.emit(height);
        }
    };

    let onclick = {
        let toggle = measure_and_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            toggle();
        })
    };

    let onkeydown = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" || e.key() == " " {
            e.prevent_default();
            measure_and_toggle();
        }
    });

    let answer_style = if props.open {
        format!("max-height: {}px;", props.open_height)
    } else {
        "max-height: 0;".to_string()
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "active"))}>
            <div class="faq-question" role="button" tabindex="0" aria-expanded={props.open.to_string()} {onclick} {onkeydown}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </div>
            <div class="faq-answer" ref={answer_ref} style={answer_style}>
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let accordion = use_state(AccordionState::default);
    let open_height = use_state(|| 0);

    html! {
        <section id="faq" class="faq-section">
            <SectionHeader
                title="Questions, answered"
                subtitle="Everything you want to know before you join the crew"
            />
            <div class="faq-list">
                { for FAQ_ENTRIES.iter().enumerate().map(|(index, (question, answer))| {
                    let open = accordion.is_open(index);
                    let on_toggle = {
                        let accordion = accordion.clone();
                        let open_height = open_height.clone();
                        Callback::from(move |height: i32| {
                            open_height.set(height);
                            accordion.set((*accordion).toggle(index));
                        })
                    };
                    html! {
                        <FaqItem
                            question={*question}
                            answer={*answer}
                            {open}
                            open_height={*open_height}
                            {on_toggle}
                        />
                    }
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_closes_the_other() {
        let state = AccordionState::default().toggle(0).toggle(2);
        assert!(!state.is_open(0));
        assert!(state.is_open(2));
    }

    #[test]
    fn toggling_the_open_item_closes_all() {
        let state = AccordionState::default().toggle(1).toggle(1);
        assert_eq!(state.open_count(), 0);
        assert_eq!(state, AccordionState::default());
    }

    #[test]
    fn never_more_than_one_open() {
        let clicks = [0, 1, 1, 3, 0, 0, 4, 2, 2, 2, 1, 3];
        let mut state = AccordionState::default();
        for (n, index) in clicks.into_iter().enumerate() {
            let was_open = state.is_open(index);
            state = state.toggle(index);
            assert!(state.open_count() <= 1, "after click {n}");
            assert_eq!(state.is_open(index), !was_open);
        }
    }
}
