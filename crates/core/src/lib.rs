//! fba-sync core - shared types library.
//!
//! This crate provides the types shared between the fetch engine and its
//! collaborators:
//!
//! - the destination cell/row model with its defaulting rules
//! - the source-kind enumeration (endpoint, table, column layout)
//! - the terminal outcomes of a fetch session
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP, no
//! storage access. Everything that talks to the outside world lives in the
//! CLI crate.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
