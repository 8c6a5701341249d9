use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::estimator::{
    format_usd, EstimatorInputs, CLOSE_RATE_RANGE, MISSED_CALLS_RANGE, TICKET_VALUE_RANGE,
    TICKET_VALUE_STEP,
};
use crate::hooks::{delay_ms, reveal, use_in_view};

/// Reads a slider's current value. Non-numeric input yields `None`.
fn slider_value(e: &InputEvent) -> Option<u32> {
    e.target_dyn_into::<HtmlInputElement>()
        .and_then(|input| input.value().parse().ok())
}

/// Callback that folds a slider value into the current inputs.
fn on_slide(
    inputs: &UseStateHandle<EstimatorInputs>,
    apply: fn(EstimatorInputs, u32) -> EstimatorInputs,
) -> Callback<InputEvent> {
    let inputs = inputs.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(value) = slider_value(&e) {
            inputs.set(apply(*inputs, value));
        }
    })
}

#[derive(Properties, PartialEq)]
struct SliderProps {
    label: AttrValue,
    display: String,
    min: u32,
    max: u32,
    step: u32,
    value: u32,
    oninput: Callback<InputEvent>,
}

#[function_component(Slider)]
fn slider(props: &SliderProps) -> Html {
    html! {
        <div class="slider-field">
            <div class="slider-header">
                <label>{props.label.clone()}</label>
                <span class="slider-value">{props.display.clone()}</span>
            </div>
            <input
                type="range"
                min={props.min.to_string()}
                max={props.max.to_string()}
                step={props.step.to_string()}
                value={props.value.to_string()}
                oninput={props.oninput.clone()}
            />
        </div>
    }
}

#[function_component(RevenueCalculator)]
pub fn revenue_calculator() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), 0.2);
    let inputs = use_state(EstimatorInputs::default);
    let outputs = inputs.estimate();

    html! {
        <section id="calculator" class="calculator" ref={node}>
            <div class="calculator-inputs">
                <span class={classes!(reveal(in_view), "eyebrow")}>{"Revenue Calculator"}</span>
                <h2 class={reveal(in_view)} style={delay_ms(100)}>
                    {"How Much Revenue Are "}<span class="accent">{"You Losing?"}</span>
                </h2>
                <p class={reveal(in_view)} style={delay_ms(200)}>
                    {"Most HVAC companies miss between 5-35 calls per week. See exactly how much that's costing your business."}
                </p>
                <div class={classes!(reveal(in_view), "card")} style={delay_ms(300)}>
                    <Slider
                        label="Missed Calls Per Week"
                        display={inputs.missed_calls_per_week.to_string()}
                        min={*MISSED_CALLS_RANGE.start()}
                        max={*MISSED_CALLS_RANGE.end()}
                        step={1}
                        value={inputs.missed_calls_per_week}
                        oninput={on_slide(&inputs, EstimatorInputs::with_missed_calls)}
                    />
                    <Slider
                        label="Close Rate"
                        display={format!("{}%", inputs.close_rate_percent)}
                        min={*CLOSE_RATE_RANGE.start()}
                        max={*CLOSE_RATE_RANGE.end()}
                        step={1}
                        value={inputs.close_rate_percent}
                        oninput={on_slide(&inputs, EstimatorInputs::with_close_rate)}
                    />
                    <Slider
                        label="Average Ticket Value"
                        display={format!("${}", inputs.average_ticket_value)}
                        min={*TICKET_VALUE_RANGE.start()}
                        max={*TICKET_VALUE_RANGE.end()}
                        step={TICKET_VALUE_STEP}
                        value={inputs.average_ticket_value}
                        oninput={on_slide(&inputs, EstimatorInputs::with_ticket_value)}
                    />
                </div>
            </div>
            <div class={classes!(reveal(in_view), "calculator-results")} style={delay_ms(400)}>
                <div class="result-row">
                    <span>{"Weekly Lost Revenue"}</span>
                    <strong>{format_usd(outputs.weekly)}</strong>
                </div>
                <div class="result-row">
                    <span>{"Monthly Lost Revenue"}</span>
                    <strong>{format_usd(outputs.monthly)}</strong>
                </div>
                <div class="result-row highlight">
                    <span>{"Yearly Lost Revenue"}</span>
                    <strong>{format_usd(outputs.yearly)}</strong>
                </div>
                <p class={classes!(reveal(in_view), "fine-print")} style={delay_ms(600)}>
                    {"And that's just from missed calls, not including after-hours emergencies or high-value installs."}
                </p>
            </div>
        </section>
    }
}
