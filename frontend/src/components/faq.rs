use yew::prelude::*;
use web_sys::MouseEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Which accordion item is expanded. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqAccordion {
    open: Option<usize>,
}

impl Default for FaqAccordion {
    fn default() -> Self {
        Self { open: Some(0) }
    }
}

impl FaqAccordion {
    pub fn toggle(self, index: usize) -> Self {
        let open = if self.open == Some(index) { None } else { Some(index) };
        Self { open }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span>{&props.question}</span>
                <span class="faq-icon">{"+"}</span>
            </button>
            <div class="faq-answer">{&props.answer}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: &'static [FaqEntry],
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let accordion = use_state(FaqAccordion::default);

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(i, entry)| {
                let on_toggle = {
                    let accordion = accordion.clone();
                    Callback::from(move |()| accordion.set(accordion.toggle(i)))
                };
                html! {
                    <FaqItem
                        key={i.to_string()}
                        question={entry.question}
                        answer={entry.answer}
                        is_open={accordion.is_open(i)}
                        {on_toggle}
                    />
                }
            }) }
        </div>
    }
}
