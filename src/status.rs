//! Task Status Palette
//!
//! Status values carried in `mdtask/status/<STATUS>` tags and the colour
//! each one is rendered with.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Tag prefix marking a task's status
pub const STATUS_TAG_PREFIX: &str = "mdtask/status/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Todo,
    Wip,
    Wait,
    Sche,
    Done,
}

impl Status {
    pub const ALL: [Status; 5] = [Status::Todo, Status::Wip, Status::Wait, Status::Sche, Status::Done];

    /// Value as stored in the status tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "TODO",
            Status::Wip => "WIP",
            Status::Wait => "WAIT",
            Status::Sche => "SCHE",
            Status::Done => "DONE",
        }
    }

    /// Palette key, e.g. `bg-wip`
    pub fn palette_key(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::Wip => "wip",
            Status::Wait => "wait",
            Status::Sche => "sche",
            Status::Done => "done",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Status::Todo => "#3B82F6",
            Status::Wip => "#F59E0B",
            Status::Wait => "#6B7280",
            Status::Sche => "#8B5CF6",
            Status::Done => "#10B981",
        }
    }

    pub fn tag(&self) -> String {
        format!("{}{}", STATUS_TAG_PREFIX, self.as_str())
    }

    /// Status named by a tag, if it is a status tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        tag.strip_prefix(STATUS_TAG_PREFIX)?.parse().ok()
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown status: {}", s))
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
