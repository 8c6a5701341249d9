use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::hooks::{delay_ms, reveal};
use crate::lead::TrialModal;
use crate::utils::dom;

const ENTRANCE_DELAY_MS: u32 = 200;

const TRUST_BADGES: [&str; 3] = [
    "No credit card required",
    "Setup in 48 hours",
    "Cancel anytime",
];

#[function_component(Hero)]
pub fn hero() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let timer = Timeout::new(ENTRANCE_DELAY_MS, move || visible.set(true));
                move || drop(timer)
            },
            (),
        );
    }

    let talk_to_ai = Callback::from(|_: MouseEvent| dom::scroll_to("#ai-demo"));
    let shown = *visible;

    html! {
        <section id="hero" class="hero">
            <div class="hero-background">
                <img src="/images/hero-hvac.jpg" alt="HVAC Technician" />
                <div class="hero-overlay"></div>
            </div>
            <div class="hero-content">
                <div class={reveal(shown)}>
                    <span class="badge">{"Trusted by 20+ HVAC Companies"}</span>
                </div>
                <h1>
                    <span class={reveal(shown)} style={delay_ms(200)}>{"Never Miss Another"}</span>
                    <span class={classes!(reveal(shown), "accent")} style={delay_ms(400)}>
                        {"HVAC Job Again."}
                    </span>
                </h1>
                <p class={classes!(reveal(shown), "hero-subtitle")} style={delay_ms(600)}>
                    {"Our AI receptionist answers calls 24/7, books appointments, and captures every lead while you focus on the work that matters."}
                </p>
                <div class={classes!(reveal(shown), "hero-actions")} style={delay_ms(800)}>
                    <TrialModal trigger_class={classes!("cta-button", "large")}>
                        <i class="fas fa-phone"></i>
                        {" Start Your Free 7-Day Trial "}
                        <i class="fas fa-arrow-right"></i>
                    </TrialModal>
                    <button class="secondary-button" onclick={talk_to_ai}>
                        {"Or talk to our AI first"}
                    </button>
                </div>
                <div class={classes!(reveal(shown), "trust-badges")} style={delay_ms(1000)}>
                    { for TRUST_BADGES.iter().map(|badge| html! {
                        <div class="trust-badge">
                            <i class="fas fa-circle-check"></i>{" "}{*badge}
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
