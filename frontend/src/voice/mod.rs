pub mod embed;
pub mod voice_modal;
pub mod worklet;

pub use voice_modal::VoiceModal;
