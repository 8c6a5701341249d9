use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::lead::TrialModal;

const SHOW_AFTER_PX: f64 = 600.0;
const HIDE_AT_PX: f64 = 500.0;
const DISMISS_ANIMATION_MS: u32 = 300;

/// Whether the bar shows at `scroll_y`. Between the two thresholds the
/// previous state holds.
pub fn sticky_visible(was_visible: bool, scroll_y: f64) -> bool {
    if scroll_y > SHOW_AFTER_PX {
        true
    } else if scroll_y <= HIDE_AT_PX {
        false
    } else {
        was_visible
    }
}

#[derive(Properties, PartialEq)]
pub struct StickyCtaProps {
    pub scroll_y: f64,
}

#[function_component(StickyCta)]
pub fn sticky_cta(props: &StickyCtaProps) -> Html {
    let visible = use_state(|| false);
    // `closing` hides the bar right away; `dismissed` unmounts it after the slide-out.
    let closing = use_state(|| false);
    let dismissed = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |scroll_y| {
                let next = sticky_visible(*visible, *scroll_y);
                if next != *visible {
                    visible.set(next);
                }
                || ()
            },
            props.scroll_y,
        );
    }

    let dismiss = {
        let closing = closing.clone();
        let dismissed = dismissed.clone();
        Callback::from(move |_: MouseEvent| {
            closing.set(true);
            let dismissed = dismissed.clone();
            Timeout::new(DISMISS_ANIMATION_MS, move || dismissed.set(true)).forget();
        })
    };

    if *dismissed {
        return html! {};
    }

    let shown = *visible && !*closing;

    html! {
        <div class={classes!("sticky-cta", shown.then_some("visible"))}>
            <div class="sticky-cta-inner">
                <div class="sticky-cta-text">
                    <strong class="desktop-only">{"Start Your Free 7-Day Trial"}</strong>
                    <span class="desktop-only">{"No credit card required • Cancel anytime"}</span>
                    <strong class="mobile-only">{"Free 7-Day Trial"}</strong>
                </div>
                <div class="sticky-cta-actions">
                    <TrialModal trigger_class={classes!("cta-button", "small")}>
                        <i class="fas fa-phone"></i>{" Get Started"}
                    </TrialModal>
                    <button class="close-button" aria-label="Dismiss" onclick={dismiss}>
                        <i class="fas fa-xmark"></i>
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_past_upper_threshold() {
        assert!(!sticky_visible(false, 600.0));
        assert!(sticky_visible(false, 601.0));
    }

    #[test]
    fn hides_at_lower_threshold() {
        assert!(!sticky_visible(true, 500.0));
        assert!(!sticky_visible(true, 0.0));
    }

    #[test]
    fn keeps_previous_state_in_between() {
        assert!(sticky_visible(true, 550.0));
        assert!(!sticky_visible(false, 550.0));
    }
}
