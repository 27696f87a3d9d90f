//! Row structs and insert DTOs.
//!
//! Each submodule contains `FromRow` + `Serialize` structs matching database
//! rows, plus any DTOs used for inserts.

pub mod course;
pub mod grade;
pub mod selection;
