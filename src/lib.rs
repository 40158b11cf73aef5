#![warn(
    clippy::all,
    // clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]

pub mod calendar;
pub mod config;

pub use chrono::prelude::*;
