use crate::enrollment::EnrollmentRejection;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A selection request failed one of the enrollment guards.
    #[error(transparent)]
    Rejected(#[from] EnrollmentRejection),
}
