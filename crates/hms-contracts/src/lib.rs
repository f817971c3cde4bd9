//! # hms-contracts
//!
//! Shared types, settings, and error contracts for the hospital access shell.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod access;
pub mod error;
pub mod identity;
pub mod notification;
pub mod role;
pub mod settings;
