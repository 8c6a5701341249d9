use yew::prelude::*;

use super::{wrap_next, wrap_prev};
use crate::hooks::{delay_ms, reveal, use_in_view};

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    role: &'static str,
    company: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "We stopped losing after-hours calls completely. Our maintenance schedule is full for the next 3 months.",
        name: "Mark Thompson",
        role: "HVAC Owner",
        company: "Thompson Heating & Cooling",
    },
    Testimonial {
        quote: "No more voicemails to return. Customers actually get booked while we're on job sites. It's like having a full-time receptionist for a fraction of the cost.",
        name: "Carla Rodriguez",
        role: "Dispatch Manager",
        company: "Air Comfort Solutions",
    },
    Testimonial {
        quote: "Emergency calls used to slip through the cracks. Now we capture them instantly. Our response time went from hours to minutes.",
        name: "Jason Miller",
        role: "Service Tech",
        company: "Miller HVAC Services",
    },
];

fn initials(name: &str) -> String {
    name.split_whitespace().filter_map(|part| part.chars().next()).collect()
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), 0.2);
    let current = use_state(|| 0usize);

    let step = |advance: fn(usize, usize) -> usize| {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(advance(*current, TESTIMONIALS.len())))
    };
    let go_to = |index: usize| {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(index))
    };

    let shown = &TESTIMONIALS[*current % TESTIMONIALS.len()];

    html! {
        <section id="testimonials" class="testimonials" ref={node}>
            <div class="section-header">
                <span class={classes!(reveal(in_view), "eyebrow")}>{"Customer Stories"}</span>
                <h2 class={reveal(in_view)} style={delay_ms(100)}>
                    {"HVAC Pros "}<span class="accent">{"Love It"}</span>
                </h2>
            </div>
            <div class={classes!(reveal(in_view), "carousel")} style={delay_ms(200)}>
                <button class="carousel-arrow" aria-label="Previous testimonial" onclick={step(wrap_prev)}>
                    <i class="fas fa-chevron-left"></i>
                </button>
                <blockquote class="testimonial" key={*current}>
                    <div class="stars">
                        { for (0..5).map(|_| html! { <i class="fas fa-star"></i> }) }
                    </div>
                    <p>{format!("\"{}\"", shown.quote)}</p>
                    <footer>
                        <span class="avatar">{initials(shown.name)}</span>
                        <div>
                            <strong>{shown.name}</strong>
                            <span class="role">{format!("{}, {}", shown.role, shown.company)}</span>
                        </div>
                    </footer>
                </blockquote>
                <button class="carousel-arrow" aria-label="Next testimonial" onclick={step(wrap_next)}>
                    <i class="fas fa-chevron-right"></i>
                </button>
            </div>
            <div class="carousel-dots">
                { for (0..TESTIMONIALS.len()).map(|index| html! {
                    <button
                        class={classes!("dot", (index == *current).then_some("active"))}
                        aria-label={format!("Go to testimonial {}", index + 1)}
                        onclick={go_to(index)}
                    />
                }) }
            </div>
        </section>
    }
}
