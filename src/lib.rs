//! Library exports for the inspect-admin client SDK, shared between the
//! binary and tests.

pub mod config;
pub mod context;
pub mod error;
pub mod gateway;
pub mod identity;
pub mod models;
pub mod services;
pub mod session;
pub mod utils;
