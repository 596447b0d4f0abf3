use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::error::CoreError;

/// Team capacity as submitted by the planning form. The field arrives as
/// either a JSON number or a string, so both are accepted on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(untagged)]
pub enum Capacity {
    Number(f64),
    Text(String),
}

impl Capacity {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Number(_) => false,
            Self::Text(s) => s.trim().is_empty(),
        }
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// One task row from the planning form. Only `name` is required; the other
/// fields default to empty strings when the form leaves them blank.
#[derive(Debug, Clone, Serialize, Deserialize, Default, ToSchema)]
pub struct TaskInput {
    pub name: String,
    #[serde(default)]
    pub dependency: String,
    #[serde(default)]
    pub risks: String,
    #[serde(default)]
    pub milestones: String,
}

impl TaskInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// The full roadmap-generation request collected from the planning form.
#[derive(Debug, Clone, Serialize, Deserialize, Default, ToSchema)]
pub struct RoadmapRequest {
    pub project_name: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub capacity: Capacity,
    pub resources: String,
    #[serde(default)]
    pub tasks: Vec<TaskInput>,
}

impl RoadmapRequest {
    /// Check that every required field and every task name is present.
    ///
    /// All missing fields are collected into one aggregate failure so the
    /// caller reports a single message instead of the first gap found.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut missing = Vec::new();

        if self.project_name.trim().is_empty() {
            missing.push("project_name".to_string());
        }
        if self.start_date.trim().is_empty() {
            missing.push("start_date".to_string());
        }
        if self.end_date.trim().is_empty() {
            missing.push("end_date".to_string());
        }
        if self.capacity.is_empty() {
            missing.push("capacity".to_string());
        }
        if self.resources.trim().is_empty() {
            missing.push("resources".to_string());
        }
        if self.tasks.is_empty() {
            missing.push("tasks".to_string());
        }
        for (i, task) in self.tasks.iter().enumerate() {
            if task.name.trim().is_empty() {
                missing.push(format!("tasks[{}].name", i));
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}
