pub mod config;
pub mod error;
pub mod router;
pub mod security_headers;

pub use config::SiteConfig;
pub use error::ServerError;
pub use router::{bind_listener, build_router};
