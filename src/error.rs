//! Crate-level error types.

use std::fmt;

/// Which host notification channel a subscription failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Viewport size changes (hard resize).
    Viewport,
    /// Document content extent changes (soft height sync).
    ContentExtent,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport => write!(f, "viewport"),
            Self::ContentExtent => write!(f, "content extent"),
        }
    }
}

/// Errors produced by the backdrop crate.
#[derive(Debug)]
pub enum BackdropError {
    /// The 2D drawing context could not be acquired.
    SurfaceUnavailable(String),
    /// The host has no per-frame callback mechanism.
    SchedulerUnavailable(String),
    /// A resize notification source could not be subscribed.
    NotificationUnavailable {
        /// The channel that failed.
        channel: Channel,
        /// Host-provided reason.
        reason: String,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML/JSON options parsing or serialization failure.
    OptionsParse(String),
}

impl fmt::Display for BackdropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurfaceUnavailable(msg) => {
                write!(f, "drawing surface unavailable: {msg}")
            }
            Self::SchedulerUnavailable(msg) => {
                write!(f, "frame scheduler unavailable: {msg}")
            }
            Self::NotificationUnavailable { channel, reason } => {
                write!(f, "{channel} notifications unavailable: {reason}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for BackdropError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BackdropError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
