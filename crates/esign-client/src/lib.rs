//! # esign-client
//!
//! Client configuration for the eSignLive e-signature REST API. Validates
//! a region/version and environment against the supported deployments,
//! resolves the base URL, and builds the authentication headers carried on
//! every request.

pub mod client;
pub mod config;

pub use client::Client;
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_ENVIRONMENT, DEFAULT_URL_VERSION};
