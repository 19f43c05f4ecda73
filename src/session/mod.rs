// SPDX-License-Identifier: MIT

//! Namespaced per-session workflow state
//!
//! This module provides:
//! - `SessionTransport` - the opaque persistence boundary and its in-memory
//!   implementation
//! - `SessionStore` - merge-on-write get/set/clear over a transport
//! - typed payload structs for the built-in workflow namespaces

pub mod store;
pub mod transport;
pub mod workflows;
