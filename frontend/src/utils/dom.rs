use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scrolls to the first element matching `selector`, if any.
pub fn scroll_to(selector: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    match document.query_selector(selector) {
        Ok(Some(element)) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        Ok(None) => log::debug!("No element matches {}", selector),
        Err(e) => log::warn!("Bad selector {}: {:?}", selector, e),
    }
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", e);
        }
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}
