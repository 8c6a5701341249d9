pub mod in_view;
pub mod scroll;

pub use in_view::{delay_ms, reveal, use_in_view};
pub use scroll::use_scroll_y;
