//! # packrs Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by the CLI shell and the
//! archive pipeline:
//! - `config`: Layered configuration loading and validation
//! - `error`: The `PackError` taxonomy and the crate-wide `Result` alias
//! - `mode`: `OperationMode` and the `Outcome` handed to reporters
//!
//! ```rust
//! use crate::core::config;
//! use crate::core::error::{PackError, Result};
//! ```
//!
pub mod config;
pub mod error;
pub mod mode;
