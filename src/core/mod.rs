//! Core library components.
//!
//! This module contains the configuration value model, scope resolution,
//! encryption and project file handling.

pub mod cipher;
pub mod constants;
pub mod domain;
pub mod key;
pub mod project;
pub mod resolve;
pub mod store;
pub mod types;
pub mod value;
