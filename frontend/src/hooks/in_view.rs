use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Becomes `true` the first time `node` shows at least `threshold` of itself
/// in the viewport, then stays `true`. Browsers without
/// `IntersectionObserver` get `true` right away.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.setter();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node
                    .cast::<Element>()
                    .map(|element| observe_once(&element, threshold, in_view.clone()));
                let observer = match observer {
                    Some(Ok(observer)) => Some(observer),
                    Some(Err(e)) => {
                        log::warn!("IntersectionObserver unavailable: {:?}", e);
                        in_view.set(true);
                        None
                    }
                    None => None,
                };
                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *in_view
}

type Observed = (IntersectionObserver, Closure<dyn FnMut(Array, IntersectionObserver)>);

fn observe_once(element: &Element, threshold: f64, in_view: UseStateSetter<bool>) -> Result<Observed, JsValue> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let entered = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if entered {
                in_view.set(true);
                observer.disconnect();
            }
        },
    );
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);
    Ok((observer, callback))
}

/// Class list for an element that animates in once its section is visible.
pub fn reveal(in_view: bool) -> Classes {
    classes!("reveal", in_view.then_some("is-visible"))
}

/// Inline transition delay used to stagger reveals.
pub fn delay_ms(ms: u32) -> String {
    format!("transition-delay: {}ms;", ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_classes_follow_visibility() {
        assert_eq!(reveal(false).to_string(), "reveal");
        assert_eq!(reveal(true).to_string(), "reveal is-visible");
    }

    #[test]
    fn delay_style() {
        assert_eq!(delay_ms(280), "transition-delay: 280ms;");
    }
}
