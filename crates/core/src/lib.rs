//! Pure domain logic for elective enrollment.
//!
//! Nothing in this crate touches the database: callers load catalog rows,
//! student records, and ledger counts, and pass them in.

pub mod elective;
pub mod eligibility;
pub mod enrollment;
pub mod error;
pub mod report_time;
pub mod types;
