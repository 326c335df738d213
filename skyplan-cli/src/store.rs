//! Local JSON task store under `~/.skyplan/tasks.json`.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use skyplan_core::{RiskLevel, Task, TaskStatus};

use crate::state::ensure_skyplan_home;

/// A stored task: the core `Task` fields plus the cached advisory from when
/// the task was added. The engine never sees the extras.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredTask {
    pub id: String,
    pub name: String,
    pub status: TaskStatus,
    pub created_at_utc: DateTime<Utc>,
    pub advisory: Option<String>,
    pub risk: Option<RiskLevel>,
}

impl StoredTask {
    pub fn as_task(&self) -> Task {
        Task {
            id: self.id.clone(),
            name: self.name.clone(),
            status: self.status,
        }
    }
}

pub fn tasks_path() -> Result<PathBuf> {
    Ok(ensure_skyplan_home()?.join("tasks.json"))
}

pub fn load_tasks() -> Result<Vec<StoredTask>> {
    let p = tasks_path()?;
    if !p.exists() {
        return Ok(Vec::new());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(serde_json::from_str(&s).with_context(|| format!("parse {}", p.display()))?)
}

pub fn save_tasks(tasks: &[StoredTask]) -> Result<()> {
    let p = tasks_path()?;
    let json = serde_json::to_string_pretty(tasks)?;
    fs::write(&p, json).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

/// Append a new pending task with a fresh sequential id ("t1", "t2", ...).
pub fn add_task(
    tasks: &mut Vec<StoredTask>,
    name: impl Into<String>,
    advisory: Option<String>,
    risk: Option<RiskLevel>,
) -> StoredTask {
    let next = tasks
        .iter()
        .filter_map(|t| t.id.strip_prefix('t').and_then(|n| n.parse::<u64>().ok()))
        .max()
        .unwrap_or(0)
        + 1;
    let task = StoredTask {
        id: format!("t{next}"),
        name: name.into(),
        status: TaskStatus::Pending,
        created_at_utc: Utc::now(),
        advisory,
        risk,
    };
    tasks.push(task.clone());
    task
}

/// Flip a task between pending and completed.
pub fn toggle_task(tasks: &mut [StoredTask], id: &str) -> Result<TaskStatus> {
    let task = tasks
        .iter_mut()
        .find(|t| t.id == id)
        .with_context(|| format!("no task with id '{id}'"))?;
    task.status = match task.status {
        TaskStatus::Pending => TaskStatus::Completed,
        TaskStatus::Completed => TaskStatus::Pending,
    };
    Ok(task.status)
}

pub fn remove_task(tasks: &mut Vec<StoredTask>, id: &str) -> Result<StoredTask> {
    let idx = tasks.iter().position(|t| t.id == id);
    match idx {
        Some(i) => Ok(tasks.remove(i)),
        None => bail!("no task with id '{id}'"),
    }
}
