use serde::{Deserialize, Serialize};

use super::id::Id;

/// Seat status of a team member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Pending,
}

impl UserStatus {
    pub fn label(self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Pending => "Pending",
        }
    }
}

/// Roles offered by the invite form. Stored roles are free-form strings.
pub const INVITE_ROLES: [&str; 3] = ["Member", "Admin", "Owner"];

/// Role given to the user who signs in
pub const OWNER_ROLE: &str = "Owner";

/// Placeholder phone number for users who have not filled one in
pub const NO_PHONE: &str = "-";

/// A team member occupying a seat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub status: UserStatus,
}

/// The signed-in identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub email: String,
}
