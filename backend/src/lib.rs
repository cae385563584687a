//! Franchise Calculator - Location viability estimates for small franchises
//!
//! This crate evaluates a prospective franchise location from setup cost,
//! rent, footfall and ticket size against an industry cost profile, and
//! returns revenue and cost figures, a payback-based verdict and two
//! narratives for the presentation layer.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
