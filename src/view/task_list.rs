// SPDX-License-Identifier: MIT

//! Task-list status classification

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Display status of one workflow step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    Complete,
}

impl TaskStatus {
    /// Classify a raw stored marker.
    ///
    /// Total over every possible input: absent, null, the empty string and
    /// the explicit `INCOMPLETE` marker are not-started; the `IN_PROGRESS`
    /// marker is in progress; any other defined value counts as complete.
    pub fn classify(raw: Option<&Value>) -> TaskStatus {
        match raw {
            None | Some(Value::Null) => TaskStatus::NotStarted,
            Some(Value::String(marker)) => match marker.as_str() {
                "" | "INCOMPLETE" => TaskStatus::NotStarted,
                "IN_PROGRESS" => TaskStatus::InProgress,
                _ => TaskStatus::Complete,
            },
            Some(_) => TaskStatus::Complete,
        }
    }

    /// Label shown on progress indicators
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Not started",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Complete => "Completed",
        }
    }
}

/// One row of a task-list progress indicator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskListEntry {
    pub title: String,
    pub status: TaskStatus,
}

impl TaskListEntry {
    pub fn new(title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            title: title.into(),
            status,
        }
    }

    /// Project one step's entry out of a namespace payload.
    ///
    /// Steps stored as objects carry their marker in a `status` member;
    /// plain markers classify directly.
    pub fn derive(title: impl Into<String>, payload: &Map<String, Value>, key: &str) -> Self {
        let raw = payload.get(key);
        let marker = match raw {
            Some(Value::Object(step)) => step.get("status"),
            other => other,
        };
        Self::new(title, TaskStatus::classify(marker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_is_not_started() {
        assert_eq!(TaskStatus::classify(None), TaskStatus::NotStarted);
        assert_eq!(
            TaskStatus::classify(Some(&Value::Null)),
            TaskStatus::NotStarted
        );
    }

    #[test]
    fn test_incomplete_marker_is_not_started() {
        assert_eq!(
            TaskStatus::classify(Some(&json!("INCOMPLETE"))),
            TaskStatus::NotStarted
        );
        assert_eq!(
            TaskStatus::classify(Some(&json!(""))),
            TaskStatus::NotStarted
        );
    }

    #[test]
    fn test_in_progress_marker() {
        assert_eq!(
            TaskStatus::classify(Some(&json!("IN_PROGRESS"))),
            TaskStatus::InProgress
        );
    }

    #[test]
    fn test_any_other_defined_value_is_complete() {
        assert_eq!(
            TaskStatus::classify(Some(&json!("COMPLETED"))),
            TaskStatus::Complete
        );
        assert_eq!(
            TaskStatus::classify(Some(&json!("ANY_OTHER_NONEMPTY_STRING"))),
            TaskStatus::Complete
        );
        assert_eq!(
            TaskStatus::classify(Some(&json!(true))),
            TaskStatus::Complete
        );
        assert_eq!(TaskStatus::classify(Some(&json!(42))), TaskStatus::Complete);
    }

    #[test]
    fn test_labels() {
        assert_eq!(TaskStatus::NotStarted.label(), "Not started");
        assert_eq!(TaskStatus::InProgress.label(), "In progress");
        assert_eq!(TaskStatus::Complete.label(), "Completed");
    }

    #[test]
    fn test_derive_from_plain_marker() {
        let mut payload = Map::new();
        payload.insert("projectName".to_string(), json!("Test Project"));

        let entry = TaskListEntry::derive("Project name", &payload, "projectName");
        assert_eq!(entry.status, TaskStatus::Complete);
        assert_eq!(entry.title, "Project name");
    }

    #[test]
    fn test_derive_from_step_object() {
        let mut payload = Map::new();
        payload.insert("siteDetails".to_string(), json!({"status": "IN_PROGRESS"}));

        let entry = TaskListEntry::derive("Site details", &payload, "siteDetails");
        assert_eq!(entry.status, TaskStatus::InProgress);
    }

    #[test]
    fn test_derive_from_step_object_without_status() {
        let mut payload = Map::new();
        payload.insert("siteDetails".to_string(), json!({}));

        let entry = TaskListEntry::derive("Site details", &payload, "siteDetails");
        assert_eq!(entry.status, TaskStatus::NotStarted);
    }

    #[test]
    fn test_derive_from_absent_key() {
        let payload = Map::new();

        let entry = TaskListEntry::derive("Public register", &payload, "publicRegister");
        assert_eq!(entry.status, TaskStatus::NotStarted);
    }
}
