pub mod ai_demo;
pub mod faq;
pub mod footer;
pub mod hero;
pub mod how_it_works;
pub mod navbar;
pub mod pricing;
pub mod problem;
pub mod revenue_calculator;
pub mod solution;
pub mod sticky_cta;
pub mod testimonials;

pub use ai_demo::AiDemoSection;
pub use faq::FaqSection;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use navbar::Navbar;
pub use pricing::PricingSection;
pub use problem::ProblemSection;
pub use revenue_calculator::RevenueCalculator;
pub use solution::SolutionSection;
pub use sticky_cta::StickyCta;
pub use testimonials::TestimonialsSection;

/// Index after `current` in a list of `len`, wrapping to the start.
pub fn wrap_next(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Index before `current`, wrapping to the end.
pub fn wrap_prev(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + len - 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_ways() {
        assert_eq!(wrap_next(0, 3), 1);
        assert_eq!(wrap_next(2, 3), 0);
        assert_eq!(wrap_prev(0, 3), 2);
        assert_eq!(wrap_prev(1, 3), 0);
        assert_eq!(wrap_next(3, 4), 0);
    }

    #[test]
    fn empty_lists_stay_at_zero() {
        assert_eq!(wrap_next(0, 0), 0);
        assert_eq!(wrap_prev(0, 0), 0);
    }
}
