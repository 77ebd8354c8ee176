//! Shared UI crate for LoanScope. The data pipeline, charts, and views live here.

pub mod charts;
pub mod components;
pub mod core;
pub mod views;
