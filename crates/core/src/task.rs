//! Task and staff types for the operations dashboard
//!
//! A task is created from a guest request, optionally assigned to a staff
//! member, and moves through `pending → assigned → completed` (or is cancelled).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Created, nobody is working on it yet
    #[default]
    Pending,
    /// Handed to a staff member
    Assigned,
    /// Done
    Completed,
    /// Dropped without completion
    Cancelled,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Assigned => "assigned",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task category
///
/// The three departments the concierge routes to are named variants; anything
/// else is carried through as free text. On the wire this is always the
/// display string (`"Room Service"`, not `"room_service"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskCategory {
    Housekeeping,
    Maintenance,
    RoomService,
    Other(String),
}

impl TaskCategory {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Housekeeping => "Housekeeping",
            Self::Maintenance => "Maintenance",
            Self::RoomService => "Room Service",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for TaskCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Housekeeping" => Self::Housekeeping,
            "Maintenance" => Self::Maintenance,
            "Room Service" => Self::RoomService,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for TaskCategory {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<TaskCategory> for String {
    fn from(category: TaskCategory) -> Self {
        match category {
            TaskCategory::Other(name) => name,
            named => named.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A member of hotel staff who can be assigned tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub role: String,
}

impl StaffMember {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
        }
    }
}

/// An unsaved task proposed by the intent extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    /// The guest's request, verbatim
    pub guest_request: String,
    #[serde(default)]
    pub room_number: Option<String>,
    pub category: TaskCategory,
    #[serde(default)]
    pub priority: TaskPriority,
}

impl TaskDraft {
    pub fn new(guest_request: impl Into<String>, category: TaskCategory) -> Self {
        Self {
            guest_request: guest_request.into(),
            room_number: None,
            category,
            priority: TaskPriority::default(),
        }
    }

    pub fn with_room(mut self, room_number: Option<String>) -> Self {
        self.room_number = room_number;
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }
}

/// Partial update of a stored task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdate {
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub assigned_to_id: Option<String>,
}

impl TaskUpdate {
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            assigned_to_id: None,
        }
    }

    pub fn assign(staff_id: impl Into<String>) -> Self {
        Self {
            status: None,
            assigned_to_id: Some(staff_id.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.assigned_to_id.is_none()
    }
}

/// A stored task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub guest_request: String,
    pub room_number: Option<String>,
    pub category: TaskCategory,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub assigned_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub assigned_to: Option<StaffMember>,
}

impl Task {
    /// Materialize a draft as a fresh pending task with a new UUID
    pub fn from_draft(draft: TaskDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            guest_request: draft.guest_request,
            room_number: draft.room_number,
            category: draft.category,
            priority: draft.priority,
            status: TaskStatus::Pending,
            created_at: now,
            assigned_at: None,
            completed_at: None,
            assigned_to: None,
        }
    }

    /// Move to `status`, stamping lifecycle timestamps.
    ///
    /// `assigned_at` is written at most once. `completed_at` is written only on
    /// the transition into `Completed`; re-completing keeps the first stamp.
    pub fn set_status(&mut self, status: TaskStatus, now: DateTime<Utc>) {
        match status {
            TaskStatus::Completed if self.status != TaskStatus::Completed => {
                self.completed_at = Some(now);
            },
            TaskStatus::Assigned => {
                self.assigned_at.get_or_insert(now);
            },
            _ => {},
        }
        self.status = status;
    }

    /// Hand the task to `staff`. A pending task advances to `Assigned`.
    pub fn assign(&mut self, staff: StaffMember, now: DateTime<Utc>) {
        self.assigned_to = Some(staff);
        if self.status == TaskStatus::Pending {
            self.status = TaskStatus::Assigned;
        }
        self.assigned_at.get_or_insert(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn draft() -> TaskDraft {
        TaskDraft::new("fresh towels please", TaskCategory::Housekeeping)
            .with_room(Some("204".to_string()))
    }

    fn staff() -> StaffMember {
        StaffMember::new("staff_hk_001", "Maria Rodriguez", "Housekeeping")
    }

    #[test]
    fn test_from_draft_is_pending() {
        let now = Utc::now();
        let task = Task::from_draft(draft(), now);

        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.created_at, now);
        assert!(task.assigned_at.is_none());
        assert!(task.completed_at.is_none());
        assert!(Uuid::parse_str(&task.id).is_ok());
    }

    #[test]
    fn test_ids_are_unique() {
        let now = Utc::now();
        let a = Task::from_draft(draft(), now);
        let b = Task::from_draft(draft(), now);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_assign_advances_pending() {
        let now = Utc::now();
        let mut task = Task::from_draft(draft(), now);
        task.assign(staff(), now);

        assert_eq!(task.status, TaskStatus::Assigned);
        assert_eq!(task.assigned_at, Some(now));
        assert_eq!(task.assigned_to.as_ref().map(|s| s.id.as_str()), Some("staff_hk_001"));
    }

    #[test]
    fn test_assigned_at_never_overwritten() {
        let first = Utc::now();
        let later = first + Duration::seconds(30);
        let mut task = Task::from_draft(draft(), first);

        task.set_status(TaskStatus::Assigned, first);
        task.assign(staff(), later);
        task.set_status(TaskStatus::Assigned, later);

        assert_eq!(task.assigned_at, Some(first));
    }

    #[test]
    fn test_assign_does_not_reopen_completed() {
        let now = Utc::now();
        let mut task = Task::from_draft(draft(), now);
        task.set_status(TaskStatus::Completed, now);
        task.assign(staff(), now);

        assert_eq!(task.status, TaskStatus::Completed);
        assert!(task.assigned_at.is_some());
    }

    #[test]
    fn test_completed_at_set_once() {
        let first = Utc::now();
        let later = first + Duration::minutes(5);
        let mut task = Task::from_draft(draft(), first);

        task.set_status(TaskStatus::Completed, first);
        task.set_status(TaskStatus::Completed, later);

        assert_eq!(task.completed_at, Some(first));
    }

    #[test]
    fn test_cancel_leaves_timestamps() {
        let now = Utc::now();
        let mut task = Task::from_draft(draft(), now);
        task.set_status(TaskStatus::Cancelled, now);

        assert_eq!(task.status, TaskStatus::Cancelled);
        assert!(task.assigned_at.is_none());
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn test_category_wire_format() {
        let json = serde_json::to_string(&TaskCategory::RoomService).unwrap();
        assert_eq!(json, "\"Room Service\"");

        let parsed: TaskCategory = serde_json::from_str("\"Concierge\"").unwrap();
        assert_eq!(parsed, TaskCategory::Other("Concierge".to_string()));

        let parsed: TaskCategory = serde_json::from_str("\"Maintenance\"").unwrap();
        assert_eq!(parsed, TaskCategory::Maintenance);
    }

    #[test]
    fn test_update_deserializes_partial() {
        let update: TaskUpdate = serde_json::from_str(r#"{"status":"completed"}"#).unwrap();
        assert_eq!(update.status, Some(TaskStatus::Completed));
        assert!(update.assigned_to_id.is_none());

        assert!(serde_json::from_str::<TaskUpdate>(r#"{"status":"done"}"#).is_err());
        assert!(serde_json::from_str::<TaskUpdate>("{}").unwrap().is_empty());
    }
}
