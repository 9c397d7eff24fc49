//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Key-value storage (the server-side stand-in for browser local storage)
//! - Simulated network latency for the mock services
//! - Password strength rules and clear-text password handling

pub mod latency;
pub mod password;
pub mod storage;
