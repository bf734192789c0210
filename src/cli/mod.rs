//! Terminal front end over the core engines

pub mod plan;
pub mod scenarios;
pub mod setup;
pub mod ui;
