use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlScriptElement};
use yew::{Callback, Reducible};

use crate::config::{VOICE_AGENT_ID, VOICE_CONTAINER_ID, VOICE_SCRIPT_ID, VOICE_SCRIPT_SRC, VOICE_WIDGET_TAG};
use crate::utils::once::InitOnce;

static SCRIPT_INJECTED: InitOnce = InitOnce::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetFailure {
    Script,
    Mount,
}

impl WidgetFailure {
    pub fn message(self) -> &'static str {
        match self {
            WidgetFailure::Script => "Failed to load AI agent. Please check your connection.",
            WidgetFailure::Mount => "Failed to load AI agent. Please try again.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(WidgetFailure),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetAction {
    Start,
    Mounted,
    Failed(WidgetFailure),
    Retry,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VoiceWidget {
    pub phase: WidgetPhase,
}

impl VoiceWidget {
    pub fn apply(&self, action: WidgetAction) -> Self {
        let phase = match (self.phase, action) {
            (WidgetPhase::Idle, WidgetAction::Start) => WidgetPhase::Loading,
            (WidgetPhase::Loading, WidgetAction::Mounted) => WidgetPhase::Ready,
            (WidgetPhase::Loading, WidgetAction::Failed(failure)) => WidgetPhase::Failed(failure),
            (WidgetPhase::Failed(_), WidgetAction::Retry | WidgetAction::Closed) => WidgetPhase::Idle,
            (phase, _) => phase,
        };
        Self { phase }
    }

    pub fn error(&self) -> Option<&'static str> {
        match self.phase {
            WidgetPhase::Failed(failure) => Some(failure.message()),
            _ => None,
        }
    }
}

impl Reducible for VoiceWidget {
    type Action = WidgetAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedStep {
    Wait,
    MountExisting,
    InjectScript,
}

/// What the open modal should do next. Only an idle widget starts work, so
/// one open session makes at most one attempt and a mounted widget is
/// never loaded twice.
pub fn next_step(phase: WidgetPhase, is_open: bool, script_present: bool) -> EmbedStep {
    match (is_open, phase) {
        (true, WidgetPhase::Idle) if script_present => EmbedStep::MountExisting,
        (true, WidgetPhase::Idle) => EmbedStep::InjectScript,
        _ => EmbedStep::Wait,
    }
}

/// Where loading stands once a step has been started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The script tag was just added; mounting waits for its `load` event.
    AwaitScript,
    /// The script is already on the page, so the widget can be mounted.
    MountNow,
    Failed(WidgetFailure),
}

/// Starts `step`, calling `inject` only when a script must be added.
/// `inject` follows [`inject_script`]: `Ok(false)` means an earlier call
/// already injected it.
pub fn begin<E: std::fmt::Debug>(
    step: EmbedStep,
    inject: impl FnOnce() -> Result<bool, E>,
) -> Option<LoadOutcome> {
    match step {
        EmbedStep::Wait => None,
        EmbedStep::MountExisting => Some(LoadOutcome::MountNow),
        EmbedStep::InjectScript => Some(match inject() {
            Ok(true) => LoadOutcome::AwaitScript,
            Ok(false) => LoadOutcome::MountNow,
            Err(e) => {
                log::error!("Failed to inject voice widget script: {:?}", e);
                LoadOutcome::Failed(WidgetFailure::Script)
            }
        }),
    }
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

pub fn script_present() -> bool {
    document()
        .map(|d| d.get_element_by_id(VOICE_SCRIPT_ID).is_some())
        .unwrap_or(false)
}

/// Appends the embed script to `<body>` unless this page already did.
/// Returns `Ok(false)` when an earlier call injected it.
pub fn inject_script(on_load: Callback<()>, on_error: Callback<()>) -> Result<bool, JsValue> {
    SCRIPT_INJECTED.ensure(|| {
        let document = document()?;
        let script: HtmlScriptElement = document.create_element("script")?.dyn_into()?;
        script.set_id(VOICE_SCRIPT_ID);
        script.set_src(VOICE_SCRIPT_SRC);
        script.set_async(true);

        let onload = Closure::<dyn Fn()>::new(move || on_load.emit(()));
        let onerror = Closure::<dyn Fn()>::new(move || on_error.emit(()));
        script.set_onload(Some(onload.as_ref().unchecked_ref()));
        script.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onload.forget();
        onerror.forget();

        document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?
            .append_child(&script)?;
        log::info!("Injected voice widget script");
        Ok(())
    })
}

/// Removes a script tag that failed to load and re-arms injection.
pub fn discard_failed_script() {
    if let Ok(document) = document() {
        if let Some(script) = document.get_element_by_id(VOICE_SCRIPT_ID) {
            script.remove();
        }
    }
    SCRIPT_INJECTED.reset();
}

/// Creates the widget element inside its container. A container that
/// already holds a widget is left as is.
pub fn mount_widget() -> Result<(), JsValue> {
    let document = document()?;
    let container = document
        .get_element_by_id(VOICE_CONTAINER_ID)
        .ok_or_else(|| JsValue::from_str("voice widget container missing"))?;
    if container.query_selector(VOICE_WIDGET_TAG)?.is_some() {
        return Ok(());
    }
    let widget = document.create_element(VOICE_WIDGET_TAG)?;
    widget.set_attribute("agent-id", VOICE_AGENT_ID)?;
    container.append_child(&widget)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_modal_does_nothing() {
        assert_eq!(next_step(WidgetPhase::Idle, false, false), EmbedStep::Wait);
    }

    #[test]
    fn first_open_injects_script() {
        assert_eq!(next_step(WidgetPhase::Idle, true, false), EmbedStep::InjectScript);
        assert_eq!(next_step(WidgetPhase::Idle, true, true), EmbedStep::MountExisting);
    }

    #[test]
    fn loading_or_ready_widget_waits() {
        assert_eq!(next_step(WidgetPhase::Loading, true, true), EmbedStep::Wait);
        assert_eq!(next_step(WidgetPhase::Ready, true, true), EmbedStep::Wait);
        assert_eq!(
            next_step(WidgetPhase::Failed(WidgetFailure::Mount), true, true),
            EmbedStep::Wait
        );
    }

    /// Script loading as the page sees it: a page-wide guard plus whether
    /// the tag actually loaded.
    struct FakePage {
        injected: InitOnce,
        script_present: bool,
        injections: usize,
    }

    impl FakePage {
        fn new() -> Self {
            Self { injected: InitOnce::new(), script_present: false, injections: 0 }
        }

        fn inject(&mut self) -> Result<bool, ()> {
            let injections = &mut self.injections;
            self.injected.ensure(|| {
                *injections += 1;
                Ok(())
            })
        }
    }

    #[derive(Clone, Copy)]
    enum Event {
        Open,
        Close,
        Retry,
    }

    /// Replays modal events through `next_step` and `begin` the way the
    /// component's effect does. `loads` says whether each injected script
    /// loads.
    fn run_session(page: &mut FakePage, events: &[Event], loads: bool) -> VoiceWidget {
        let mut widget = VoiceWidget::default();
        let mut is_open = false;
        for &event in events {
            let failed_script = widget.phase == WidgetPhase::Failed(WidgetFailure::Script);
            match event {
                Event::Open => is_open = true,
                Event::Close => {
                    is_open = false;
                    if failed_script {
                        page.injected.reset();
                    }
                    widget = widget.apply(WidgetAction::Closed);
                }
                Event::Retry => {
                    if failed_script {
                        page.injected.reset();
                    }
                    widget = widget.apply(WidgetAction::Retry);
                }
            }
            let step = next_step(widget.phase, is_open, page.script_present);
            if step != EmbedStep::Wait {
                widget = widget.apply(WidgetAction::Start);
            }
            match begin(step, || page.inject()) {
                None => {}
                Some(LoadOutcome::MountNow) => widget = widget.apply(WidgetAction::Mounted),
                Some(LoadOutcome::AwaitScript) if loads => {
                    page.script_present = true;
                    widget = widget.apply(WidgetAction::Mounted);
                }
                Some(LoadOutcome::AwaitScript) => {
                    widget = widget.apply(WidgetAction::Failed(WidgetFailure::Script));
                }
                Some(LoadOutcome::Failed(failure)) => {
                    widget = widget.apply(WidgetAction::Failed(failure));
                }
            }
        }
        widget
    }

    #[test]
    fn reopening_after_success_does_not_reinject() {
        let mut page = FakePage::new();
        let widget = run_session(&mut page, &[Event::Open, Event::Close, Event::Open], true);
        assert_eq!(widget.phase, WidgetPhase::Ready);
        assert_eq!(page.injections, 1);
    }

    #[test]
    fn failure_shows_message_until_retry() {
        let mut page = FakePage::new();
        let widget = run_session(&mut page, &[Event::Open], false);
        assert_eq!(widget.error(), Some("Failed to load AI agent. Please check your connection."));
        assert_eq!(page.injections, 1);

        let mut page = FakePage::new();
        let widget = run_session(&mut page, &[Event::Open, Event::Retry], false);
        assert_eq!(widget.phase, WidgetPhase::Failed(WidgetFailure::Script));
        assert_eq!(page.injections, 2);
    }

    #[test]
    fn already_injected_script_goes_straight_to_mount() {
        let mut page = FakePage::new();
        assert_eq!(page.inject(), Ok(true));
        let widget = run_session(&mut page, &[Event::Open], false);
        assert_eq!(widget.phase, WidgetPhase::Ready);
        assert_eq!(page.injections, 1);
    }

    #[test]
    fn begin_maps_injection_results() {
        assert_eq!(begin(EmbedStep::Wait, || -> Result<bool, ()> { panic!("not called") }), None);
        assert_eq!(
            begin(EmbedStep::MountExisting, || -> Result<bool, ()> { panic!("not called") }),
            Some(LoadOutcome::MountNow)
        );
        assert_eq!(begin(EmbedStep::InjectScript, || Ok::<_, ()>(true)), Some(LoadOutcome::AwaitScript));
        assert_eq!(begin(EmbedStep::InjectScript, || Ok::<_, ()>(false)), Some(LoadOutcome::MountNow));
        assert_eq!(
            begin(EmbedStep::InjectScript, || Err::<bool, _>("blocked")),
            Some(LoadOutcome::Failed(WidgetFailure::Script))
        );
    }

    #[test]
    fn closing_clears_failure_but_keeps_ready_widget() {
        let failed = VoiceWidget { phase: WidgetPhase::Failed(WidgetFailure::Mount) };
        assert_eq!(failed.apply(WidgetAction::Closed).phase, WidgetPhase::Idle);
        let ready = VoiceWidget { phase: WidgetPhase::Ready };
        assert_eq!(ready.apply(WidgetAction::Closed).phase, WidgetPhase::Ready);
    }

    #[test]
    fn late_events_are_ignored() {
        let ready = VoiceWidget { phase: WidgetPhase::Ready };
        assert_eq!(ready.apply(WidgetAction::Failed(WidgetFailure::Script)), ready);
        assert_eq!(ready.apply(WidgetAction::Start), ready);
    }
}
