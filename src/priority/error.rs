use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalErrorKind {
    MissingData,
    OutOfRange,
    ProviderFailure,
    Internal,
}

/// Fault raised by a signal provider or inside a consideration. Never
/// fatal: the pipeline isolates it to the one consideration (or one
/// evaluation) that raised it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalError {
    pub kind: SignalErrorKind,
    pub message: String,
}

impl SignalError {
    pub fn new(kind: SignalErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn missing_data(message: impl Into<String>) -> Self {
        Self::new(SignalErrorKind::MissingData, message)
    }

    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(SignalErrorKind::OutOfRange, message)
    }

    pub fn provider_failure(message: impl Into<String>) -> Self {
        Self::new(SignalErrorKind::ProviderFailure, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(SignalErrorKind::Internal, message)
    }
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SignalError {}
