use yew::prelude::*;

use crate::config::CONTACT_EMAIL;
use crate::hooks::{delay_ms, reveal, use_in_view};
use crate::lead::TrialModal;

const POWERED_BY_URL: &str = "https://elevenlabs.io/conversational-ai";
const COPYRIGHT_YEAR: u32 = 2024;

#[function_component(Footer)]
pub fn footer() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), 0.2);

    html! {
        <footer class="footer" ref={node}>
            <div class="final-cta">
                <h2 class={reveal(in_view)}>
                    {"Ready to Never Miss "}<span class="accent">{"Another Call?"}</span>
                </h2>
                <p class={reveal(in_view)} style={delay_ms(100)}>
                    {"Join 20+ HVAC companies capturing every call 24/7. Start your free trial today. No credit card required."}
                </p>
                <div class={reveal(in_view)} style={delay_ms(200)}>
                    <TrialModal trigger_class={classes!("cta-button", "large", "inverted")}>
                        <i class="fas fa-phone"></i>{" Start Your Free 7-Day Trial"}
                    </TrialModal>
                </div>
                <div class={classes!(reveal(in_view), "trust-badges")} style={delay_ms(300)}>
                    <span>{"48-hour setup"}</span>
                    <span>{"No credit card required"}</span>
                    <span>{"Cancel anytime"}</span>
                </div>
            </div>
            <div class="footer-content">
                <div class={classes!(reveal(in_view), "footer-brand")} style={delay_ms(400)}>
                    <a href="#" class="nav-logo">{"MVMNT"}<span class="accent">{"."}</span></a>
                    <p>{"AI receptionists for HVAC companies."}</p>
                </div>
                <div class={classes!(reveal(in_view), "footer-contact")} style={delay_ms(500)}>
                    <a href={format!("mailto:{}", CONTACT_EMAIL)}>
                        <i class="fas fa-envelope"></i>{" "}{CONTACT_EMAIL}
                    </a>
                    <TrialModal trigger_class={classes!("link-button")}>
                        {"Free 7-Day Trial"}
                    </TrialModal>
                </div>
            </div>
            <div class={classes!(reveal(in_view), "footer-bottom")} style={delay_ms(600)}>
                <p>{format!("© {} MVMNT. All rights reserved.", COPYRIGHT_YEAR)}</p>
                <div class="powered-by">
                    <span>{"Powered by"}</span>
                    <a href={POWERED_BY_URL} target="_blank" rel="noopener noreferrer">{"ElevenLabs"}</a>
                </div>
            </div>
        </footer>
    }
}
