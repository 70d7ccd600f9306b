//! Common library for the Deus Movies application
//!
//! This crate provides the functionality shared by the proxy relay and the
//! terminal client: the data transfer objects mirrored from the upstream
//! rent-store API, pagination arithmetic, catalog helpers and input
//! validation.

pub mod catalog;
pub mod error;
pub mod models;
pub mod pagination;
pub mod validation;
