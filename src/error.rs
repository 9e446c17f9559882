//! Errors surfaced by the binding layer

/// Errors that can occur while talking to the native toolkit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `uiInit` refused to start; carries the toolkit's own message.
    Init(String),
    /// A native constructor returned a null control.
    Allocation { kind: &'static str },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Init(msg) => write!(f, "Failed to initialize libui: {}", msg),
            Self::Allocation { kind } => write!(f, "Native allocation of {} failed", kind),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
