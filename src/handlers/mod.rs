//! HTTP handlers, one per route. All share the same shape: extract, execute
//! one statement, respond.

pub mod sales;
pub mod student;

pub use sales::*;
pub use student::*;
