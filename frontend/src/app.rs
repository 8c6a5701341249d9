use yew::prelude::*;

use crate::hooks::use_scroll_y;
use crate::sections::{
    AiDemoSection, FaqSection, Footer, Hero, HowItWorks, Navbar, PricingSection, ProblemSection,
    RevenueCalculator, SolutionSection, StickyCta, TestimonialsSection,
};

#[function_component(App)]
pub fn app() -> Html {
    let scroll_y = use_scroll_y();

    html! {
        <div class="app">
            <Navbar {scroll_y} />
            <main>
                <Hero />
                <ProblemSection />
                <SolutionSection />
                <HowItWorks />
                <AiDemoSection />
                <RevenueCalculator />
                <PricingSection />
                <TestimonialsSection />
                <FaqSection />
            </main>
            <Footer />
            <StickyCta {scroll_y} />
        </div>
    }
}
