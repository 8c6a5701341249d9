use yew::prelude::*;

use crate::lead::TrialModal;
use crate::utils::dom;

const SCROLLED_AFTER_PX: f64 = 100.0;

pub const NAV_LINKS: [(&str, &str); 4] = [
    ("Features", "#features"),
    ("How It Works", "#how-it-works"),
    ("Pricing", "#pricing"),
    ("FAQ", "#faq"),
];

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_AFTER_PX
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub scroll_y: f64,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);
    let scrolled = is_scrolled(props.scroll_y);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let link = |label: &'static str, href: &'static str, class: &'static str| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            dom::scroll_to(href);
            menu_open.set(false);
        });
        html! { <button class={class} {onclick}>{label}</button> }
    };

    html! {
        <>
            <nav class={classes!("navbar", scrolled.then_some("scrolled"))}>
                <div class="nav-inner">
                    <a href="#" class="nav-logo">{"MVMNT"}<span class="accent">{"."}</span></a>
                    <div class="nav-links">
                        { for NAV_LINKS.iter().map(|&(label, href)| link(label, href, "nav-link")) }
                    </div>
                    <div class="nav-cta">
                        <TrialModal trigger_class={classes!("cta-button", "small")}>
                            <i class="fas fa-phone"></i>{" Free 7-Day Trial"}
                        </TrialModal>
                    </div>
                    <button class="menu-toggle" aria-label="Toggle menu" onclick={toggle_menu}>
                        <i class={classes!("fas", if *menu_open { "fa-xmark" } else { "fa-bars" })}></i>
                    </button>
                </div>
            </nav>
            <div class={classes!("mobile-menu", menu_open.then_some("open"))}>
                <div class="mobile-menu-backdrop" onclick={close_menu}></div>
                <div class="mobile-menu-panel">
                    { for NAV_LINKS.iter().map(|&(label, href)| link(label, href, "mobile-link")) }
                    <TrialModal trigger_class={classes!("cta-button", "full-width")}>
                        <i class="fas fa-phone"></i>{" Free 7-Day Trial"}
                    </TrialModal>
                    <p class="fine-print">{"*No attachment issues"}</p>
                </div>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_only_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(100.0));
        assert!(is_scrolled(100.5));
    }

    #[test]
    fn links_point_at_section_anchors() {
        assert!(NAV_LINKS.iter().all(|(_, href)| href.starts_with('#')));
    }
}
