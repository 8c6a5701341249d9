use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::hooks::{delay_ms, reveal, use_in_view};

/// Delay between the section entering view and the stats switching over.
const COUNT_IN_DELAY_MS: u32 = 500;

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat {
        value: "81%",
        label: "of customers hang up if they reach voicemail",
        icon: "fa-phone-slash",
    },
    Stat {
        value: "3x",
        label: "more calls during seasonal peak times",
        icon: "fa-arrow-trend-up",
    },
    Stat {
        value: "0",
        label: "technicians available to answer phones on jobs",
        icon: "fa-users",
    },
];

pub fn displayed_value(stat: &Stat, counted_in: bool) -> &'static str {
    if counted_in {
        stat.value
    } else {
        "0"
    }
}

#[function_component(ProblemSection)]
pub fn problem_section() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), 0.2);
    let counted_in = use_state(|| false);

    {
        let counted_in = counted_in.clone();
        use_effect_with_deps(
            move |in_view| {
                let timer = in_view
                    .then(|| Timeout::new(COUNT_IN_DELAY_MS, move || counted_in.set(true)));
                move || drop(timer)
            },
            in_view,
        );
    }

    html! {
        <section id="problem" class="problem" ref={node}>
            <div class="section-header">
                <span class={classes!(reveal(in_view), "eyebrow", "danger")}>
                    <i class="fas fa-triangle-exclamation"></i>{" The Problem"}
                </span>
                <h2 class={reveal(in_view)} style={delay_ms(100)}>
                    {"Voicemail Isn't a "}<span class="danger">{"Business Strategy."}</span>
                </h2>
                <p class={reveal(in_view)} style={delay_ms(200)}>
                    {"Customers don't wait. They call the next HVAC company when no one answers. Every missed call = a lost job."}
                </p>
            </div>
            <div class="stats-grid">
                { for STATS.iter().enumerate().map(|(index, stat)| html! {
                    <div class={classes!(reveal(in_view), "stat-card")} style={delay_ms(300 + index as u32 * 100)}>
                        <i class={classes!("fas", stat.icon)}></i>
                        <div class="stat-value">{displayed_value(stat, *counted_in)}</div>
                        <p class="stat-label">{stat.label}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
