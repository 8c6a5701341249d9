use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid port '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid listen address: {0}")]
    InvalidAddress(#[from] std::net::AddrParseError),
    #[error("Site directory {0} does not exist, build the frontend first")]
    MissingSiteDir(PathBuf),
    #[error("Site directory {0} has no index.html")]
    MissingIndex(PathBuf),
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}
