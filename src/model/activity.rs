use serde::{Deserialize, Serialize};

use super::id::Id;

/// One line of the activity feed, e.g. `Justin Wilson created the project "Pilot".`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: Id,
    /// Display name of the acting user
    pub user: String,
    /// Verb phrase, e.g. `created the task`
    pub action: String,
    /// Quoted subject, e.g. `"Pilot"`
    pub target: String,
    pub timestamp: String,
}

pub const CREATED_PROJECT: &str = "created the project";
pub const CREATED_TASK: &str = "created the task";
pub const INVITED_USER: &str = "invited a new user";
pub const ADDED_CONTACT: &str = "added the contact";

/// Wrap a subject in double quotes for the feed
pub fn quoted(subject: &str) -> String {
    format!("\"{}\"", subject)
}
