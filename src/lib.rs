//! Time Cost Engine
//!
//! This crate converts a price into the amount of working time needed to pay
//! for it, given a yearly net income and daily working hours. Monthly
//! recurring costs are converted per month and annualized.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod currency;
pub mod error;
pub mod form;
pub mod logging;
pub mod models;
