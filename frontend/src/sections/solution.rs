use yew::prelude::*;

use crate::hooks::{delay_ms, reveal, use_in_view};

struct Feature {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

const FEATURES: [Feature; 7] = [
    Feature {
        title: "24/7 Call Answering",
        description: "Never miss a call, even at 2 AM or during holidays.",
        icon: "fa-clock",
    },
    Feature {
        title: "Instant Booking",
        description: "Appointments scheduled directly into your calendar.",
        icon: "fa-bolt",
    },
    Feature {
        title: "Lead Capture",
        description: "Full customer details: name, phone, address, service needed.",
        icon: "fa-message",
    },
    Feature {
        title: "HVAC Expertise",
        description: "Trained on warranties, brands, pricing, and common issues.",
        icon: "fa-shield-halved",
    },
    Feature {
        title: "Spam Filtering",
        description: "Automatically filters telemarketers and robocalls.",
        icon: "fa-filter",
    },
    Feature {
        title: "Your Phone Number",
        description: "Works with your existing business line.",
        icon: "fa-phone",
    },
    Feature {
        title: "CRM Integration",
        description: "Leads sent to email, SMS, or your existing CRM.",
        icon: "fa-paper-plane",
    },
];

#[function_component(SolutionSection)]
pub fn solution_section() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), 0.1);

    html! {
        <section id="features" class="solution" ref={node}>
            <div class="section-header">
                <span class={classes!(reveal(in_view), "eyebrow")}>{"The Solution"}</span>
                <h2 class={reveal(in_view)} style={delay_ms(100)}>
                    {"Meet Your New "}<span class="accent">{"AI Receptionist"}</span>
                </h2>
                <p class={reveal(in_view)} style={delay_ms(200)}>
                    {"Answers every call, books every job, and sends you the details."}
                </p>
            </div>
            <div class="feature-grid">
                { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                    <div class={classes!(reveal(in_view), "feature-card")} style={delay_ms(300 + index as u32 * 80)}>
                        <div class="feature-icon"><i class={classes!("fas", feature.icon)}></i></div>
                        <h3>{feature.title}</h3>
                        <p>{feature.description}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
