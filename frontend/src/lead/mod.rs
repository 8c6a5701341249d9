pub mod form;
pub mod submit;
pub mod trial_modal;

pub use trial_modal::TrialModal;
