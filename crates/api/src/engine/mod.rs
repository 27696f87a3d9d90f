//! Eligibility & enrollment engine.
//!
//! Composes the repositories in `elective_db` with the pure rules in
//! `elective_core`. Reads are independent queries with no locking; the
//! selection write runs as a single transaction.

pub mod eligibility;
pub mod selection;

pub use eligibility::{compute_eligibility, CourseAvailability};
pub use selection::{select_course, SelectionRequest};
