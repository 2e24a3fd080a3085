// src/pid.rs

//! # PID Control Module
//!
//! This module provides the configuration and controller data structures
//! to perform PID (Proportional-Integral-Derivative) control calculations
//! with an anti-windup integral term and a filtered derivative term.

pub mod config;
pub use config::*;
pub mod controller;
pub use controller::*;
