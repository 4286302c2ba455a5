//! Task store
//!
//! Tasks live in an insertion-ordered list and are found by linear scan; the
//! dashboard holds tens of tasks, not millions.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use concierge_core::{Result, StaffMember, Task, TaskDraft, TaskUpdate};

use crate::staff::default_roster;

/// Task store trait
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Store a draft as a new pending task
    async fn create(&self, draft: TaskDraft) -> Result<Task>;

    async fn get(&self, id: &str) -> Result<Option<Task>>;

    /// All tasks, newest first
    async fn list(&self) -> Result<Vec<Task>>;

    /// Apply a status change and/or staff assignment.
    ///
    /// Returns `None` when the task does not exist. An unknown staff id is
    /// logged and ignored; the rest of the update still applies. An empty
    /// update returns the task untouched.
    async fn update(&self, id: &str, update: TaskUpdate) -> Result<Option<Task>>;

    async fn list_staff(&self) -> Result<Vec<StaffMember>>;

    async fn count(&self) -> Result<usize>;
}

/// In-memory task store (default)
///
/// No persistence across restarts.
pub struct InMemoryTaskStore {
    tasks: RwLock<Vec<Task>>,
    staff: Vec<StaffMember>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::with_staff(default_roster())
    }

    pub fn with_staff(staff: Vec<StaffMember>) -> Self {
        tracing::info!(staff = staff.len(), "Task store initialized with empty task list");
        Self {
            tasks: RwLock::new(Vec::new()),
            staff,
        }
    }

    fn find_staff(&self, id: &str) -> Option<&StaffMember> {
        self.staff.iter().find(|s| s.id == id)
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn create(&self, draft: TaskDraft) -> Result<Task> {
        let task = Task::from_draft(draft, Utc::now());
        self.tasks.write().push(task.clone());

        tracing::info!(
            task_id = %task.id,
            category = %task.category,
            priority = %task.priority,
            room = task.room_number.as_deref().unwrap_or("-"),
            "Created task"
        );

        Ok(task)
    }

    async fn get(&self, id: &str) -> Result<Option<Task>> {
        Ok(self.tasks.read().iter().find(|t| t.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Task>> {
        let mut tasks = self.tasks.read().clone();
        // Stable sort: equal timestamps keep insertion order
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tasks)
    }

    async fn update(&self, id: &str, update: TaskUpdate) -> Result<Option<Task>> {
        let now = Utc::now();
        let mut tasks = self.tasks.write();

        let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };

        if update.is_empty() {
            tracing::debug!(task_id = %id, "Empty update, task unchanged");
            return Ok(Some(task.clone()));
        }

        if let Some(status) = update.status {
            task.set_status(status, now);
        }

        if let Some(staff_id) = update.assigned_to_id.as_deref() {
            match self.find_staff(staff_id) {
                Some(staff) => task.assign(staff.clone(), now),
                None => {
                    tracing::warn!(
                        task_id = %id,
                        staff_id = %staff_id,
                        "Staff member not found, assignment ignored"
                    );
                },
            }
        }

        tracing::info!(
            task_id = %task.id,
            status = %task.status,
            assigned_to = task.assigned_to.as_ref().map(|s| s.name.as_str()).unwrap_or("None"),
            "Updated task"
        );

        Ok(Some(task.clone()))
    }

    async fn list_staff(&self) -> Result<Vec<StaffMember>> {
        Ok(self.staff.clone())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.tasks.read().len())
    }
}
