use serde::{Deserialize, Serialize};

use super::task::TaskStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnColor {
    Todo,
    Progress,
    Complete,
}

/// Static board column configuration. Not persisted; the fixed set below
/// is the whole universe of columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub id: TaskStatus,
    pub title: &'static str,
    pub color: ColumnColor,
}

pub const COLUMNS: [Column; 3] = [
    Column {
        id: TaskStatus::Todo,
        title: "To-Do",
        color: ColumnColor::Todo,
    },
    Column {
        id: TaskStatus::InProgress,
        title: "In Progress",
        color: ColumnColor::Progress,
    },
    Column {
        id: TaskStatus::Complete,
        title: "Complete",
        color: ColumnColor::Complete,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_cover_every_status_once() {
        assert_eq!(COLUMNS.len(), 3);
        for status in [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Complete] {
            assert_eq!(COLUMNS.iter().filter(|c| c.id == status).count(), 1);
        }
    }
}
