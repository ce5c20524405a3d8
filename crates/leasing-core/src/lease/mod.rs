//! Equipment-leasing net cost analysis.
//!
//! `calculator` holds the closed-form pipeline, `form` the raw field state a
//! UI edits, and `report` the labelled rows a results panel displays.

pub mod calculator;
pub mod form;
pub mod report;
