use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::utils::dom;

/// Current `window.scrollY`, updated on every scroll event.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state(dom::scroll_y);

    {
        let scroll_y = scroll_y.setter();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().and_then(|window| {
                    let callback = Closure::<dyn Fn()>::new(move || scroll_y.set(dom::scroll_y()));
                    match window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
                        Ok(()) => Some((window, callback)),
                        Err(e) => {
                            log::warn!("Failed to add scroll listener: {:?}", e);
                            None
                        }
                    }
                });
                move || {
                    if let Some((window, callback)) = listener {
                        let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    *scroll_y
}
