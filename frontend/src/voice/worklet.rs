//! Compatibility shim for the voice widget's audio worklets.
//!
//! The widget loads its processor modules from its own CDN, which the
//! browser refuses cross-origin. We wrap `AudioWorklet.prototype.addModule`
//! and send those module URLs to a copy served from our origin. Matching
//! relies on the vendor's current file names, so expect to revisit this
//! whenever the embed script changes.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{self, Function, Reflect};

use crate::config::LOCAL_WORKLET_PATH;
use crate::utils::once::InitOnce;

const REDIRECTED_PROCESSORS: [&str; 2] = ["rawAudioProcessor", "audioConcatProcessor"];

static WORKLET_PATCH: InitOnce = InitOnce::new();

// `this` must be forwarded, so the wrapper itself has to be a JS function.
const WRAPPER_BODY: &str = "return function (url, options) {\
    const local = redirect(String(url));\
    return original.call(this, local === null ? url : local, options);\
};";

/// Local replacement for a worklet module URL, if it is one we redirect.
pub fn redirect_target(url: &str) -> Option<&'static str> {
    REDIRECTED_PROCESSORS
        .iter()
        .any(|name| url.contains(name))
        .then_some(LOCAL_WORKLET_PATH)
}

/// Installs the `addModule` wrapper once per page. Returns `Ok(true)` when
/// this call installed it.
pub fn install_redirect() -> Result<bool, JsValue> {
    WORKLET_PATCH.ensure(patch_add_module)
}

fn patch_add_module() -> Result<(), JsValue> {
    let audio_worklet = Reflect::get(&js_sys::global(), &JsValue::from_str("AudioWorklet"))?;
    if audio_worklet.is_undefined() {
        log::warn!("AudioWorklet is not available, skipping processor redirect");
        return Ok(());
    }
    let prototype = Reflect::get(&audio_worklet, &JsValue::from_str("prototype"))?;
    let original: Function = Reflect::get(&prototype, &JsValue::from_str("addModule"))?.dyn_into()?;

    let redirect = Closure::<dyn Fn(String) -> JsValue>::new(|url: String| {
        log::debug!("Worklet request: {}", url);
        match redirect_target(&url) {
            Some(local) => {
                log::info!("Redirecting worklet {} to {}", url, local);
                JsValue::from_str(local)
            }
            None => JsValue::NULL,
        }
    });

    let wrap = Function::new_with_args("original, redirect", WRAPPER_BODY);
    let patched = wrap.call2(&JsValue::NULL, &original, redirect.as_ref())?;
    Reflect::set(&prototype, &JsValue::from_str("addModule"), &patched)?;
    // The patched prototype keeps calling into this for the rest of the page.
    redirect.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirects_known_processors() {
        assert_eq!(
            redirect_target("https://cdn.example.com/lib/rawAudioProcessor.worklet.js"),
            Some(LOCAL_WORKLET_PATH)
        );
        assert_eq!(
            redirect_target("blob:https://unpkg.com/audioConcatProcessor-3f2a"),
            Some(LOCAL_WORKLET_PATH)
        );
    }

    #[test]
    fn leaves_other_modules_alone() {
        assert_eq!(redirect_target("https://cdn.example.com/lib/noiseGate.worklet.js"), None);
        assert_eq!(redirect_target(""), None);
        // Matching is case sensitive, like the vendor's file names.
        assert_eq!(redirect_target("/rawaudioprocessor.js"), None);
    }
}
