use yew::prelude::*;

use crate::hooks::{delay_ms, reveal, use_in_view};
use crate::voice::VoiceModal;

const WAVE_BARS: u32 = 20;

/// Fixed per-bar heights for the decorative waveform, 20% to 80%.
fn bar_style(index: u32) -> String {
    let height = 20 + (index * 37 + 11) % 61;
    format!(
        "height: {}%; animation-delay: {:.1}s; animation-duration: {:.1}s;",
        height,
        f64::from(index) * 0.1,
        0.5 + f64::from(index % 5) * 0.1,
    )
}

#[function_component(AiDemoSection)]
pub fn ai_demo_section() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), 0.1);

    html! {
        <section id="ai-demo" class="ai-demo" ref={node}>
            <div class="section-header">
                <span class={classes!(reveal(in_view), "eyebrow")}>{"Live Demo"}</span>
                <h2 class={reveal(in_view)} style={delay_ms(100)}>
                    {"This Is What It "}<span class="accent">{"Sounds Like"}</span>
                </h2>
                <p class={reveal(in_view)} style={delay_ms(200)}>
                    {"The AI is trained on real HVAC scenarios so it sounds natural, professional, and helpful. It knows how to handle emergency \"no heat\" calls, tune-ups, maintenance plans, and new system installs."}
                </p>
            </div>
            <div class={classes!(reveal(in_view), "waveform")} style={delay_ms(400)}>
                { for (0..WAVE_BARS).map(|i| html! { <div class="wave-bar" style={bar_style(i)}></div> }) }
            </div>
            <div class={classes!(reveal(in_view), "demo-card")} style={delay_ms(600)}>
                <div class="status-pill"><span class="status-dot"></span>{"Online & Ready to Talk"}</div>
                <h3>{"Ready to hear how it sounds?"}</h3>
                <p>
                    {"Click below to start a live conversation with our AI agent. Ask about furnace repairs, AC tune-ups, or schedule service."}
                </p>
                <VoiceModal trigger_class={classes!("cta-button", "large")}>
                    <i class="fas fa-microphone"></i>{" Try Live Demo"}
                </VoiceModal>
                <p class="fine-print">{"*Click to open the AI voice agent"}</p>
            </div>
            <div class={classes!(reveal(in_view), "sample-prompt")} style={delay_ms(800)}>
                <i class="fas fa-quote-left"></i>{" \"I need to schedule an AC tune-up\""}
            </div>
        </section>
    }
}
