use yew::prelude::*;

use crate::hooks::{delay_ms, reveal, use_in_view};

const FAQS: [(&str, &str); 6] = [
    (
        "Does it sound robotic?",
        "Not at all. Our AI is powered by ElevenLabs, the industry leader in voice AI. It sounds natural, professional, and conversational. Your customers won't know they're talking to AI unless you tell them.",
    ),
    (
        "How does booking work?",
        "The AI checks your real-time availability and books appointments directly into your calendar. It handles rescheduling, cancellations, and can even send confirmation texts to customers.",
    ),
    (
        "Will it handle emergency service?",
        "Absolutely. The AI is trained to identify emergency situations (no heat, no cooling, gas leaks) and can immediately dispatch your on-call technician while capturing all the details.",
    ),
    (
        "Can I use my current phone number?",
        "Yes! You can forward your existing business number to our AI, or we can provide a new number. Most clients forward calls after-hours or when lines are busy.",
    ),
    (
        "How long does setup take?",
        "Typical setup is 5-7 business days. We'll work with you to customize call flows, FAQs, and integrations to match your business exactly.",
    ),
    (
        "Do I need tech skills?",
        "Zero tech skills required. We handle all the setup, integration, and maintenance. You just forward your calls and watch the bookings come in.",
    ),
];

/// Accordion state after clicking item `index`: opens it, or closes it if it
/// was the open one.
pub fn toggle(open: Option<usize>, index: usize) -> Option<usize> {
    if open == Some(index) {
        None
    } else {
        Some(index)
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
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then_some("open"))}>
            <button class="faq-question" aria-expanded={props.is_open.to_string()} {onclick}>
                <span class="question-text">{props.question.clone()}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer.clone()}</p>
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), 0.1);
    let open = use_state(|| Some(0usize));

    html! {
        <section id="faq" class="faq" ref={node}>
            <div class="section-header">
                <span class={classes!(reveal(in_view), "eyebrow")}>{"FAQ"}</span>
                <h2 class={reveal(in_view)} style={delay_ms(100)}>
                    {"Got "}<span class="accent">{"Questions?"}</span>
                </h2>
            </div>
            <div class="faq-list">
                { for FAQS.iter().enumerate().map(|(index, &(question, answer))| {
                    let on_toggle = {
                        let open = open.clone();
                        Callback::from(move |_: ()| open.set(toggle(*open, index)))
                    };
                    html! {
                        <div class={reveal(in_view)} style={delay_ms(200 + index as u32 * 80)}>
                            <FaqItem
                                {question}
                                {answer}
                                is_open={*open == Some(index)}
                                {on_toggle}
                            />
                        </div>
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
    fn clicking_opens_one_item_at_a_time() {
        let open = toggle(Some(0), 2);
        assert_eq!(open, Some(2));
        assert_eq!(toggle(open, 4), Some(4));
    }

    #[test]
    fn clicking_the_open_item_closes_it() {
        assert_eq!(toggle(Some(3), 3), None);
        assert_eq!(toggle(None, 3), Some(3));
    }
}
