use thiserror::Error;

/// Custom error types for eventide
///
/// Library modules keep their own typed errors (AiError, PaymentError,
/// WizardError, StoreError); this enum is the CLI layer's view of them.
#[derive(Debug, Error)]
pub enum EventideError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Ai(#[from] crate::ai::AiError),

    #[error(transparent)]
    Payment(#[from] crate::payment::PaymentError),

    #[error(transparent)]
    Wizard(#[from] crate::event::WizardError),

    #[error(transparent)]
    Store(#[from] crate::event::StoreError),

    #[error("invalid {field}: {message}")]
    InvalidArgument { field: String, message: String },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
