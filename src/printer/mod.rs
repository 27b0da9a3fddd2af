//! # Printer Module
//!
//! This module provides printer-class specific configuration.
//!
//! ## Modules
//!
//! - [`config`]: Device classes and their resident font tables

pub mod config;

pub use config::DeviceClass;
