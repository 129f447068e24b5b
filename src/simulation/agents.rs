//! Simulated agent narrative records
//!
//! Messages are an immutable, append-only log. Activities are appended when
//! a script step begins and completed in place (matched by stable id) when
//! the step finishes; they are never deleted.

use std::fmt;

/// Severity/kind tag for an agent message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warning,
    Recommendation,
    Success,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Info => write!(f, "info"),
            MessageKind::Warning => write!(f, "warning"),
            MessageKind::Recommendation => write!(f, "recommendation"),
            MessageKind::Success => write!(f, "success"),
        }
    }
}

/// An append-only log entry from a simulated agent
#[derive(Debug, Clone)]
pub struct AgentMessage {
    pub agent: &'static str,
    pub message: &'static str,
    pub kind: MessageKind,
}

/// Lifecycle status of an agent activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityStatus {
    Idle,
    Working,
    Completed,
    Waiting,
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityStatus::Idle => write!(f, "idle"),
            ActivityStatus::Working => write!(f, "working"),
            ActivityStatus::Completed => write!(f, "completed"),
            ActivityStatus::Waiting => write!(f, "waiting"),
        }
    }
}

/// A simulated autonomous worker's current or past task
#[derive(Debug, Clone)]
pub struct AgentActivity {
    pub id: &'static str,
    pub agent: &'static str,
    pub action: &'static str,
    pub status: ActivityStatus,
    /// Simulation time when the activity was registered
    pub start_time: f32,
    /// Simulation time when the activity completed, if it has
    pub completion_time: Option<f32>,
}

/// The ordered activity timeline for the current scenario
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: Vec<AgentActivity>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new working activity
    pub fn begin(&mut self, id: &'static str, agent: &'static str, action: &'static str, now: f32) {
        self.entries.push(AgentActivity {
            id,
            agent,
            action,
            status: ActivityStatus::Working,
            start_time: now,
            completion_time: None,
        });
    }

    /// Complete an activity in place, updating its action description.
    /// Unknown ids are ignored; the script and the log share one source of
    /// truth for ids, so a miss means the scenario was reset underneath.
    pub fn complete(&mut self, id: &str, action: &'static str, now: f32) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.action = action;
            entry.status = ActivityStatus::Completed;
            entry.completion_time = Some(now);
        }
    }

    pub fn get(&self, id: &str) -> Option<&AgentActivity> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn entries(&self) -> &[AgentActivity] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
