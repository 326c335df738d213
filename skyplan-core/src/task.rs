//! Task model.
//!
//! The engine only reads a task's name and status; ownership, storage and
//! mutation live with the caller.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub status: TaskStatus,
}

impl Task {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: TaskStatus::Pending,
        }
    }

    pub fn completed(mut self) -> Self {
        self.status = TaskStatus::Completed;
        self
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        let t = Task::new("t1", "Go hiking").completed();
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"completed\""));

        let back: Task = serde_json::from_str(&json).unwrap();
        assert!(back.is_completed());
    }
}
