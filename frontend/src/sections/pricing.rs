use yew::prelude::*;

use crate::estimator::{format_usd, Usd};
use crate::hooks::{delay_ms, reveal, use_in_view};
use crate::lead::TrialModal;

const SETUP_PRICE: Usd = Usd::from_dollars(1_493);
const MONTHLY_PRICE: Usd = Usd::from_dollars(293);

const SETUP_FEATURES: [&str; 6] = [
    "HVAC call flow design",
    "FAQ database build-out",
    "Service catalog mapping",
    "CRM/email/SMS integration",
    "Call routing & forwarding",
    "Onboarding & testing",
];

const MONTHLY_FEATURES: [&str; 5] = [
    "Seasonal updates",
    "FAQ changes & tuning",
    "Analytics & reporting",
    "Voice accuracy improvements",
    "24/7 support & monitoring",
];

fn feature_list(items: &[&'static str]) -> Html {
    html! {
        <ul class="price-features">
            { for items.iter().map(|item| html! {
                <li><i class="fas fa-check"></i>{" "}{*item}</li>
            }) }
        </ul>
    }
}

#[function_component(PricingSection)]
pub fn pricing_section() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), 0.2);

    html! {
        <section id="pricing" class="pricing" ref={node}>
            <div class="section-header">
                <span class={classes!(reveal(in_view), "eyebrow")}>{"Simple Pricing"}</span>
                <h2 class={reveal(in_view)} style={delay_ms(100)}>
                    {"One Price. "}<span class="accent">{"Every Call Answered."}</span>
                </h2>
                <p class={reveal(in_view)} style={delay_ms(200)}>
                    {"No hidden fees. No long-term contracts. Start capturing every call today."}
                </p>
            </div>
            <div class="pricing-grid">
                <div class={classes!(reveal(in_view), "price-card")} style={delay_ms(300)}>
                    <h3>{"One-Time Setup"}</h3>
                    <p class="price-caption">{"Everything you need to get started"}</p>
                    <div class="price">{format_usd(SETUP_PRICE)}</div>
                    {feature_list(&SETUP_FEATURES)}
                </div>
                <div class={classes!(reveal(in_view), "price-card", "featured")} style={delay_ms(400)}>
                    <span class="price-badge"><i class="fas fa-star"></i>{" MOST POPULAR"}</span>
                    <h3>{"Monthly Maintenance"}</h3>
                    <p class="price-caption">{"Ongoing support and optimization"}</p>
                    <div class="price">{format_usd(MONTHLY_PRICE)}<span class="per">{"/mo"}</span></div>
                    {feature_list(&MONTHLY_FEATURES)}
                    <p class="roi">{"10x return in first month"}</p>
                </div>
            </div>
            <div class={classes!(reveal(in_view), "pricing-cta")} style={delay_ms(500)}>
                <TrialModal trigger_class={classes!("cta-button", "large")}>
                    {"Start Your Free 7-Day Trial"}
                </TrialModal>
                <div class="trust-badges">
                    <span>{"No credit card required"}</span>
                    <span>{"Cancel anytime"}</span>
                    <span>{"48-hour setup"}</span>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_render_as_whole_dollars() {
        assert_eq!(format_usd(SETUP_PRICE), "$1,493");
        assert_eq!(format_usd(MONTHLY_PRICE), "$293");
    }
}
