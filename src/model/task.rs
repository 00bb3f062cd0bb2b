use serde::{Deserialize, Serialize};

use super::id::Id;

/// Board column a task sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "To Do")]
    Todo,
    #[serde(rename = "Doing")]
    Doing,
    #[serde(rename = "Done")]
    Done,
}

impl TaskStatus {
    /// Column order on the board
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::Doing, TaskStatus::Done];

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::Doing => "Doing",
            TaskStatus::Done => "Done",
        }
    }

    /// Parse a column label ("To Do", "Doing", "Done")
    pub fn from_label(s: &str) -> Option<TaskStatus> {
        match s {
            "To Do" => Some(TaskStatus::Todo),
            "Doing" => Some(TaskStatus::Doing),
            "Done" => Some(TaskStatus::Done),
            _ => None,
        }
    }

    /// Index of this column on the board (0-based)
    pub fn column(self) -> usize {
        match self {
            TaskStatus::Todo => 0,
            TaskStatus::Doing => 1,
            TaskStatus::Done => 2,
        }
    }

    /// Column to the left, if any
    pub fn prev(self) -> Option<TaskStatus> {
        self.column().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Column to the right, if any
    pub fn next(self) -> Option<TaskStatus> {
        Self::ALL.get(self.column() + 1).copied()
    }
}

/// A comment on a task. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Id,
    /// Display name of the author
    pub user: String,
    pub text: String,
    /// Time of day, e.g. `03:45 PM`
    pub timestamp: String,
}

/// A card on a task board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Id,
    pub name: String,
    pub status: TaskStatus,
    pub assignee_id: Option<Id>,
    pub comments: Vec<Comment>,
}

impl Task {
    /// A fresh task in the "To Do" column with no comments
    pub fn new(id: Id, name: String, assignee_id: Option<Id>) -> Self {
        Task {
            id,
            name,
            status: TaskStatus::Todo,
            assignee_id,
            comments: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_round_trip() {
        for status in TaskStatus::ALL {
            assert_eq!(TaskStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(TaskStatus::from_label("Blocked"), None);
    }

    #[test]
    fn neighbours_stop_at_board_edges() {
        assert_eq!(TaskStatus::Todo.prev(), None);
        assert_eq!(TaskStatus::Todo.next(), Some(TaskStatus::Doing));
        assert_eq!(TaskStatus::Doing.prev(), Some(TaskStatus::Todo));
        assert_eq!(TaskStatus::Done.next(), None);
    }

    #[test]
    fn status_serializes_as_column_label() {
        let json = serde_json::to_string(&TaskStatus::Todo).unwrap();
        assert_eq!(json, "\"To Do\"");
    }

    #[test]
    fn new_task_starts_in_todo() {
        let task = Task::new(Id(1), "Storyboard".into(), None);
        assert_eq!(task.status, TaskStatus::Todo);
        assert!(task.comments.is_empty());
    }
}
