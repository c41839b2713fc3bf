// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Variants are cheap to clone and carry plain strings so they can travel
//! inside Iced messages. Backend failures keep the raw message from the
//! remote service: screens surface it verbatim in a blocking alert and take
//! no recovery action.

use std::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Configuration file could not be read or written.
    Config(String),
    /// Filesystem error outside the config layer.
    Io(String),
    /// Transport-level HTTP failure (connect, TLS, decode).
    Http(String),
    /// Auth endpoint rejected a sign-in/sign-up/sign-out operation.
    Auth(String),
    /// Row store returned an error payload or an unusable row set.
    Store(String),
}

impl Error {
    /// The raw message shown to the user in an alert.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Error::Config(msg)
            | Error::Io(msg)
            | Error::Http(msg)
            | Error::Auth(msg)
            | Error::Store(msg) => msg,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "Configuration error: {msg}"),
            Error::Io(msg) => write!(f, "I/O error: {msg}"),
            Error::Http(msg) => write!(f, "Network error: {msg}"),
            Error::Auth(msg) => write!(f, "{msg}"),
            Error::Store(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_and_store_display_the_raw_message() {
        // Alerts show backend messages verbatim, without a category prefix.
        let auth = Error::Auth("Invalid login credentials".to_string());
        assert_eq!(auth.to_string(), "Invalid login credentials");

        let store = Error::Store("duplicate key value".to_string());
        assert_eq!(store.to_string(), "duplicate key value");
    }

    #[test]
    fn message_returns_the_payload_for_every_variant() {
        for err in [
            Error::Config("a".into()),
            Error::Io("a".into()),
            Error::Http("a".into()),
            Error::Auth("a".into()),
            Error::Store("a".into()),
        ] {
            assert_eq!(err.message(), "a");
        }
    }
}
