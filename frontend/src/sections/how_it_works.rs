use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::wrap_next;
use crate::hooks::{delay_ms, reveal, use_in_view};

const AUTO_ADVANCE_MS: u32 = 3_000;

struct Step {
    number: &'static str,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

const STEPS: [Step; 4] = [
    Step {
        number: "01",
        title: "We Setup",
        description: "Your HVAC call flows, FAQs, integrations, and service catalog. We customize everything to match your business.",
        icon: "fa-gear",
    },
    Step {
        number: "02",
        title: "You Forward Calls",
        description: "Forward calls to the AI during after-hours, busy hours, or full-time. You control when it answers.",
        icon: "fa-phone-volume",
    },
    Step {
        number: "03",
        title: "AI Books Jobs",
        description: "Based on urgency, availability, and your rules. Emergency calls get prioritized automatically.",
        icon: "fa-calendar-check",
    },
    Step {
        number: "04",
        title: "You Get Leads",
        description: "Bookings sent directly to your email, CRM, or SMS. Real-time notifications keep you in the loop.",
        icon: "fa-envelope",
    },
];

/// Width of the progress bar for the active step, as a CSS percentage.
fn progress_width(active: usize, len: usize) -> String {
    let percent = if len == 0 { 0 } else { (active + 1) * 100 / len };
    format!("width: {}%;", percent)
}

/// Step the timer moves to next, or `None` while the section is off screen.
fn auto_advance(in_view: bool, current: usize) -> Option<usize> {
    in_view.then(|| wrap_next(current, STEPS.len()))
}

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), 0.2);
    let active = use_state(|| 0usize);

    // Re-armed on every step change.
    {
        let deps = (in_view, *active);
        let active = active.clone();
        use_effect_with_deps(
            move |&(in_view, current)| {
                let timer = auto_advance(in_view, current).map(|next| {
                    Timeout::new(AUTO_ADVANCE_MS, move || active.set(next))
                });
                move || drop(timer)
            },
            deps,
        );
    }

    let select = |index: usize| {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(index))
    };

    html! {
        <section id="how-it-works" class="how-it-works" ref={node}>
            <div class="section-header">
                <span class={classes!(reveal(in_view), "eyebrow")}>{"How It Works"}</span>
                <h2 class={reveal(in_view)} style={delay_ms(100)}>
                    {"Up and Running in "}<span class="accent">{"48 Hours"}</span>
                </h2>
            </div>
            <div class="steps-progress">
                <div class="steps-progress-bar" style={progress_width(*active, STEPS.len())}></div>
            </div>
            <div class="steps-grid">
                { for STEPS.iter().enumerate().map(|(index, step)| html! {
                    <div
                        class={classes!(reveal(in_view), "step-card", (index == *active).then_some("active"))}
                        style={delay_ms(200 + index as u32 * 100)}
                        onmouseenter={select(index)}
                    >
                        <div class="step-icon"><i class={classes!("fas", step.icon)}></i></div>
                        <span class="step-number">{step.number}</span>
                        <h3>{step.title}</h3>
                        <p>{step.description}</p>
                    </div>
                }) }
            </div>
            <div class="step-dots">
                { for (0..STEPS.len()).map(|index| html! {
                    <button
                        class={classes!("dot", (index == *active).then_some("active"))}
                        aria-label={format!("Go to step {}", index + 1)}
                        onclick={select(index)}
                    />
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_fills_with_each_step() {
        assert_eq!(progress_width(0, 4), "width: 25%;");
        assert_eq!(progress_width(3, 4), "width: 100%;");
    }

    #[test]
    fn auto_advance_waits_until_in_view() {
        assert_eq!(auto_advance(false, 1), None);
        assert_eq!(auto_advance(true, 1), Some(2));
    }

    #[test]
    fn auto_advance_wraps_to_first_step() {
        let mut active = 0;
        for _ in 0..STEPS.len() {
            active = auto_advance(true, active).unwrap();
        }
        assert_eq!(active, 0);
    }
}
