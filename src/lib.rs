//! adx-rtb - A command-line client for the Authorized Buyers Real-time Bidding API
//!
//! This library provides the pieces behind the CLI: resource name helpers,
//! service account credential handling, and a thin REST client for
//! pretargeting configuration and creative operations.

pub mod error;
pub mod commands;
pub mod cli;
pub mod rtb;

pub use error::{RtbError, Result};
