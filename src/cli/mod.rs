//! Terminal presentation layer

pub mod breakdown;
pub mod estimate;
pub mod setup;
pub mod tips;
pub mod ui;
