// SPDX-License-Identifier: MIT

//! Read-only projections derived from session state
//!
//! This module provides:
//! - `TaskStatus` / `TaskListEntry` - progress-indicator classification
//! - `build_navigation` - active-state derivation for the top-level links
//!
//! Everything here is a pure function over its inputs; nothing reads or
//! writes the session transport.

mod navigation;
mod task_list;

pub use navigation::{build_navigation, primary_links, NavLink, NavigationEntry};
pub use task_list::{TaskListEntry, TaskStatus};
