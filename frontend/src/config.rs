//! Fixed endpoints and identifiers for the two hosted integrations.

/// Form backend receiving trial requests. `LEAD_FORM_ENDPOINT` at build time
/// points staging builds somewhere else.
pub fn lead_form_endpoint() -> &'static str {
    option_env!("LEAD_FORM_ENDPOINT").unwrap_or("https://formspree.io/f/xdazlbyo")
}

pub const LEAD_SUBJECT: &str = "New Free Trial Request - MVMNT";

pub const VOICE_AGENT_ID: &str = "agent_4501kf5q61e9fh9vnmqjnn5jry8e";
pub const VOICE_WIDGET_TAG: &str = "elevenlabs-convai";
pub const VOICE_SCRIPT_ID: &str = "elevenlabs-convai-script";
pub const VOICE_SCRIPT_SRC: &str = "https://unpkg.com/@elevenlabs/convai-widget-embed";
pub const VOICE_CONTAINER_ID: &str = "elevenlabs-widget-container";

/// Locally hosted copy of the widget's audio processor module.
pub const LOCAL_WORKLET_PATH: &str = "/worklets/rawAudioProcessor.worklet.js";

pub const CONTACT_EMAIL: &str = "owner@mvmntmarketing.com";
