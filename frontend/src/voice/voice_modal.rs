use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::VOICE_CONTAINER_ID;
use crate::voice::embed::{
    self, EmbedStep, LoadOutcome, VoiceWidget, WidgetAction, WidgetFailure, WidgetPhase,
};
use crate::voice::worklet;

const MOUNT_DELAY_MS: u32 = 100;

#[derive(Properties, PartialEq)]
pub struct VoiceModalProps {
    #[prop_or_default]
    pub trigger_class: Classes,
    pub children: Children,
}

fn schedule_mount(widget: UseReducerHandle<VoiceWidget>) {
    Timeout::new(MOUNT_DELAY_MS, move || match embed::mount_widget() {
        Ok(()) => widget.dispatch(WidgetAction::Mounted),
        Err(e) => {
            log::error!("Error creating voice widget: {:?}", e);
            widget.dispatch(WidgetAction::Failed(WidgetFailure::Mount));
        }
    })
    .forget();
}

fn start_loading(widget: &UseReducerHandle<VoiceWidget>, step: EmbedStep) {
    widget.dispatch(WidgetAction::Start);
    // The widget still works without the redirect on browsers that allow
    // the cross-origin worklet, so a failed patch is only logged.
    if let Err(e) = worklet::install_redirect() {
        log::warn!("Could not patch AudioWorklet loader: {:?}", e);
    }
    let inject = || {
        let on_load = {
            let widget = widget.clone();
            Callback::from(move |_: ()| schedule_mount(widget.clone()))
        };
        let on_error = {
            let widget = widget.clone();
            Callback::from(move |_: ()| {
                log::error!("Failed to load voice widget script");
                widget.dispatch(WidgetAction::Failed(WidgetFailure::Script));
            })
        };
        embed::inject_script(on_load, on_error)
    };
    match embed::begin(step, inject) {
        Some(LoadOutcome::MountNow) => schedule_mount(widget.clone()),
        Some(LoadOutcome::Failed(failure)) => widget.dispatch(WidgetAction::Failed(failure)),
        Some(LoadOutcome::AwaitScript) | None => {}
    }
}

/// Opens the live voice-agent demo. The dialog stays in the DOM while
/// hidden so a loaded widget survives closing and reopening.
#[function_component(VoiceModal)]
pub fn voice_modal(props: &VoiceModalProps) -> Html {
    let is_open = use_state(|| false);
    let widget = use_reducer(VoiceWidget::default);

    {
        let deps = (*is_open, widget.phase);
        let widget = widget.clone();
        use_effect_with_deps(
            move |(open, phase): &(bool, WidgetPhase)| {
                let step = embed::next_step(*phase, *open, embed::script_present());
                if step != EmbedStep::Wait {
                    start_loading(&widget, step);
                }
                || ()
            },
            deps,
        );
    }

    let open = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(true))
    };

    // Clearing a failure (on close or retry) also drops a script tag that
    // never loaded so the next attempt fetches it again.
    let recover = {
        let widget = widget.clone();
        move |action: WidgetAction| {
            if widget.phase == WidgetPhase::Failed(WidgetFailure::Script) {
                embed::discard_failed_script();
            }
            widget.dispatch(action);
        }
    };

    let close = {
        let is_open = is_open.clone();
        let recover = recover.clone();
        Callback::from(move |_: MouseEvent| {
            is_open.set(false);
            recover(WidgetAction::Closed);
        })
    };

    let retry = Callback::from(move |_: MouseEvent| recover(WidgetAction::Retry));

    let is_ready = widget.phase == WidgetPhase::Ready;

    html! {
        <>
            <button class={props.trigger_class.clone()} onclick={open}>
                { for props.children.iter() }
            </button>
            <div class={classes!("modal-overlay", (!*is_open).then_some("hidden"))} onclick={close.clone()}>
                <div class="modal-content voice-modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                    <button class="modal-close" aria-label="Close" onclick={close}>
                        <i class="fas fa-xmark"></i>
                    </button>
                    <div class="voice-modal-header">
                        <div class="voice-avatar"><i class="fas fa-volume-high"></i></div>
                        <div>
                            <h2>{"MVMNT AI Agent"}</h2>
                            <div class="online-status"><span class="pulse-dot"></span>{"Online & Ready to Talk"}</div>
                        </div>
                    </div>
                    <div class="voice-modal-body">
                        {
                            match widget.error() {
                                Some(message) => html! {
                                    <div class="widget-error">
                                        <div class="error-icon"><i class="fas fa-triangle-exclamation"></i></div>
                                        <p>{message}</p>
                                        <button class="link-button" onclick={retry}>{"Try Again"}</button>
                                    </div>
                                },
                                None if !is_ready => html! {
                                    <div class="widget-loading">
                                        <div class="spinner large"></div>
                                        <p>{"Loading AI Agent..."}</p>
                                        <p class="hint">{"This may take a few seconds"}</p>
                                    </div>
                                },
                                None => html! {},
                            }
                        }
                        <div id={VOICE_CONTAINER_ID} class={classes!("widget-container", (!is_ready).then_some("hidden"))}></div>
                    </div>
                    <div class="voice-modal-footer">
                        <p class="try-saying"><i class="fas fa-microphone"></i>{" Try saying:"}</p>
                        <p>{"\"My furnace isn't working\" or \"I need to schedule an AC tune-up\""}</p>
                    </div>
                </div>
            </div>
        </>
    }
}
