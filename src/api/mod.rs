//! API module for HTTP endpoints
//!
//! This module provides the storefront's REST surface and shared state.

pub mod http;
pub mod rest;
pub mod state;
