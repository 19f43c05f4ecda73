// SPDX-License-Identifier: MIT

//! tideflow - session-backed workflow state for multi-page form journeys
//!
//! The crate owns the accumulated, partially-filled state a user builds up
//! while stepping through a multi-page workflow (exemption and marine
//! licence applications), keyed by browser session and partitioned into one
//! namespace per workflow. It provides:
//!
//! - `SessionStore` - namespaced get/set/clear with merge-on-write semantics
//! - `SessionTransport` - the opaque persistence boundary, with an in-memory
//!   implementation for tests and single-process use
//! - view helpers deriving task-list status and navigation active state from
//!   stored session data
//!
//! Routing, templating, authentication and the backend API live in the
//! consuming application, not here.

pub mod error;
pub mod session;
pub mod view;

pub use error::{SessionError, TransportError};
pub use session::store::SessionStore;
pub use session::transport::{MemoryTransport, SessionId, SessionTransport};
pub use session::workflows::Workflow;
pub use view::{build_navigation, primary_links, NavLink, NavigationEntry, TaskListEntry, TaskStatus};
