//! Wire-facing request/response shapes and their explicit entity mappings.
//!
//! Mapping is hand-written field-for-field; response-only projections
//! (display names of referenced entities) are never accepted on input.

pub mod course;
pub mod evaluation;
pub mod matriculation;
pub mod schedule;
pub mod student;
pub mod teacher;
