use std::{io, net::SocketAddr};

use thiserror::Error;

/// Failures that end the process. There is no request-level error type:
/// the handler cannot fail, and write errors on a dropped connection are
/// discarded by the server.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to bind to {addr}")]
    Bind {
        addr:   SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Server error")]
    Serve(#[source] io::Error),
}
