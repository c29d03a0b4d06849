//! Core library for the timetable-tools command line application.
//!
//! The library turns a university class schedule kept in an Excel workbook
//! into a calendar-import CSV of class sessions ("couples"). Responsibilities
//! are kept narrow: workbook and CSV adapters live under [`io`], the data
//! representations inside [`model`], the row interpretation rules in
//! [`schedule`], and the end-to-end orchestration under [`sync`].

pub mod error;
pub mod io;
pub mod model;
pub mod schedule;
pub mod sync;

pub use error::{Result, ToolError};
