//! Request handlers.
//!
//! Handlers extract and validate request input, resolve the elective
//! category, delegate to the engine or a repository, and map errors via
//! [`AppError`](crate::error::AppError).

pub mod courses;
pub mod grades;
pub mod selection;
pub mod students;
