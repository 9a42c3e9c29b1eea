//! LearnHub - Learning platform lecture state and subscription billing
//!
//! This crate implements the course lecture store used by the player UI
//! and the billing service wrapping the recurring-payment gateway.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
