use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::lead::form::{FormPhase, LeadAction, LeadField, LeadForm, MissedCallsRange, RETRY_NOTICE};
use crate::lead::submit::{send_to_form_endpoint, submit_lead};
use crate::utils::dom;

const CLOSE_ANIMATION_MS: u32 = 300;

#[derive(Properties, PartialEq)]
pub struct TrialModalProps {
    /// Classes for the button that opens the modal.
    #[prop_or_default]
    pub trigger_class: Classes,
    pub children: Children,
}

/// A CTA button that opens the free-trial request form.
#[function_component(TrialModal)]
pub fn trial_modal(props: &TrialModalProps) -> Html {
    let is_open = use_state(|| false);
    let form = use_reducer(LeadForm::default);

    let open = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(true))
    };

    let close = {
        let is_open = is_open.clone();
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            is_open.set(false);
            let form = form.clone();
            Timeout::new(CLOSE_ANIMATION_MS, move || form.dispatch(LeadAction::Reset)).forget();
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let ready = form.can_submit();
            form.dispatch(LeadAction::Submit);
            if !ready {
                return;
            }
            let fields = form.fields.clone();
            let form = form.clone();
            spawn_local(async move {
                let action = submit_lead(&fields, send_to_form_endpoint).await;
                if action == LeadAction::Failed {
                    dom::alert(RETRY_NOTICE);
                }
                form.dispatch(action);
            });
        })
    };

    let on_missed_calls = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(LeadAction::Edit(LeadField::MissedCalls, select.value()));
        })
    };

    let text_input = |field: LeadField, id: &'static str, kind: &'static str, placeholder: &'static str, icon: &'static str| {
        let oninput = {
            let form = form.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                form.dispatch(LeadAction::Edit(field, input.value()));
            })
        };
        html! {
            <div class="form-field">
                <label for={id}>{field.label()}<span class="required">{" *"}</span></label>
                <div class="input-with-icon">
                    <i class={classes!("fas", icon)}></i>
                    <input
                        id={id}
                        name={id}
                        type={kind}
                        required=true
                        placeholder={placeholder}
                        value={form.fields.get(field).to_string()}
                        disabled={form.is_submitting()}
                        {oninput}
                    />
                </div>
            </div>
        }
    };

    let body = match form.phase {
        FormPhase::Submitted => html! {
            <div class="trial-success">
                <div class="success-icon"><i class="fas fa-circle-check"></i></div>
                <h3>{"You're All Set!"}</h3>
                <p>{"Expect an email/text soon. Our team will reach out within 24 hours to set up your free trial."}</p>
                <button class="cta-button" onclick={close.clone()}>{"Got It!"}</button>
            </div>
        },
        FormPhase::Editing | FormPhase::Submitting => html! {
            <>
                <div class="modal-header">
                    <h2>{"Start Your "}<span class="accent">{"Free 7-Day Trial"}</span></h2>
                    <p class="modal-subtitle">{"No credit card required • Setup in 48 hours"}</p>
                </div>
                <form class="trial-form" onsubmit={on_submit}>
                    { text_input(LeadField::FullName, "fullName", "text", "John Smith", "fa-user") }
                    { text_input(LeadField::Phone, "phone", "tel", "(555) 123-4567", "fa-phone") }
                    { text_input(LeadField::Email, "email", "email", "john@yourcompany.com", "fa-envelope") }
                    { text_input(LeadField::Company, "company", "text", "Your HVAC Company", "fa-building") }
                    <div class="form-field">
                        <label for="missedCalls">{"Do you know how many calls you miss in a week?"}</label>
                        <select id="missedCalls" name="missedCalls" onchange={on_missed_calls} disabled={form.is_submitting()}>
                            { for MissedCallsRange::ALL.iter().map(|range| html! {
                                <option value={range.value()} selected={form.fields.missed_calls == *range}>
                                    {range.label()}
                                </option>
                            }) }
                        </select>
                    </div>
                    if let Some(notice) = &form.notice {
                        <p class="form-notice" role="alert">{notice}</p>
                    }
                    <button type="submit" class="cta-button full-width" disabled={form.is_submitting()}>
                        if form.is_submitting() {
                            <span class="spinner"></span>{"Submitting..."}
                        } else {
                            {"Get My Free Trial"}
                        }
                    </button>
                    <p class="fine-print">{"*No attachment issues • Cancel anytime"}</p>
                </form>
            </>
        },
    };

    html! {
        <>
            <button class={props.trigger_class.clone()} onclick={open}>
                { for props.children.iter() }
            </button>
            if *is_open {
                <div class="modal-overlay" onclick={close.clone()}>
                    <div class="modal-content trial-modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                        <button class="modal-close" aria-label="Close" onclick={close}>
                            <i class="fas fa-xmark"></i>
                        </button>
                        { body }
                    </div>
                </div>
            }
        </>
    }
}
