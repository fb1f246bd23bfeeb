use std::io;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors surfaced by the codec.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The encoder rejected its block layout before writing any bytes.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The input bytes violate the wire format. `offset` is the byte
    /// position where the violation was detected.
    #[error("malformed stream at byte {offset}: {message}")]
    Malformed { offset: usize, message: String },

    /// The byte sink failed while encoding.
    #[error(transparent)]
    Io(#[from] io::Error),
}

macro_rules! invalid_config_err {
    ($fmt:expr) => (crate::errors::Error::InvalidConfig($fmt.to_owned()));
    ($fmt:expr, $($args:expr),*) => (crate::errors::Error::InvalidConfig(format!($fmt, $($args),*)));
}

macro_rules! malformed_err {
    ($offset:expr, $fmt:expr) => (crate::errors::Error::Malformed {
        offset: $offset,
        message: $fmt.to_owned(),
    });
    ($offset:expr, $fmt:expr, $($args:expr),*) => (crate::errors::Error::Malformed {
        offset: $offset,
        message: format!($fmt, $($args),*),
    });
}
