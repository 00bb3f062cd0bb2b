use std::collections::VecDeque;

use chrono::{DateTime, Local};
use indexmap::IndexMap;

use crate::model::activity::{self, ActivityEntry, quoted};
use crate::model::{
    AppConfig, Comment, Contact, ContactDraft, Id, IdGen, Identity, NO_PHONE, OWNER_ROLE,
    Project, Task, TaskStatus, User, UserStatus,
};
use crate::ops::names::display_name_from_email;

/// Error type for store mutations. A failed mutation leaves the store untouched.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0} is required")]
    EmptyField(&'static str),
    #[error("seat limit reached: {used} of {limit} seats in use")]
    SeatLimitReached { used: usize, limit: usize },
    #[error("task not found: {0}")]
    TaskNotFound(Id),
    #[error("no user with id {0} to assign")]
    UnknownAssignee(Id),
}

/// Source of "now" for ids and timestamps
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// The wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Time of day as shown on comments and the activity feed, e.g. `03:45 PM`
pub fn time_of_day(at: &DateTime<Local>) -> String {
    at.format("%I:%M %p").to_string()
}

/// Shared application state: every collection the pages read, plus the
/// mutations they are allowed to make.
pub struct Store {
    session: Option<Identity>,
    /// Who actions are attributed to when nobody has signed in
    fallback_actor: String,
    projects: Vec<Project>,
    users: Vec<User>,
    boards: IndexMap<String, Vec<Task>>,
    contacts: Vec<Contact>,
    /// Newest first
    activity: VecDeque<ActivityEntry>,
    seat_limit: usize,
    ids: IdGen,
    clock: Box<dyn Clock>,
}

impl Store {
    pub fn new(config: &AppConfig) -> Self {
        Store::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(config: &AppConfig, clock: Box<dyn Clock>) -> Self {
        let mut store = Store {
            session: None,
            fallback_actor: config.identity.display_name.clone(),
            projects: Vec::new(),
            users: Vec::new(),
            boards: config
                .workspace
                .boards
                .iter()
                .map(|name| (name.clone(), Vec::new()))
                .collect(),
            contacts: Vec::new(),
            activity: VecDeque::new(),
            seat_limit: config.workspace.seat_limit,
            ids: IdGen::new(),
            clock,
        };

        // The address book starts with the account holder's own card
        let id = store.next_id();
        store.contacts.push(Contact {
            id,
            name: config.identity.display_name.clone(),
            role: "Assign Role".into(),
            email: config.identity.email.clone(),
            phone: "Phone number...".into(),
            rate: "Contact rate...".into(),
            notes: "...".into(),
        });

        // Without a login step the account holder still owns the first seat
        if !config.features.auth {
            let id = store.next_id();
            store.users.push(owner_user(
                id,
                &Identity {
                    name: config.identity.display_name.clone(),
                    email: config.identity.email.clone(),
                },
            ));
        }
        store
    }

    // -----------------------------------------------------------------------
    // Readers
    // -----------------------------------------------------------------------

    pub fn session(&self) -> Option<&Identity> {
        self.session.as_ref()
    }

    /// Display name actions are attributed to
    pub fn actor_name(&self) -> &str {
        self.session
            .as_ref()
            .map_or(self.fallback_actor.as_str(), |s| s.name.as_str())
    }

    /// The user record of whoever is acting (the Owner)
    pub fn current_user(&self) -> Option<&User> {
        let name = self.actor_name();
        self.users
            .iter()
            .find(|u| u.role == OWNER_ROLE && u.name == name)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user(&self, id: Id) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Activity feed, newest first
    pub fn activity(&self) -> &VecDeque<ActivityEntry> {
        &self.activity
    }

    pub fn seat_limit(&self) -> usize {
        self.seat_limit
    }

    /// Boards in display order with their tasks
    pub fn boards(&self) -> &IndexMap<String, Vec<Task>> {
        &self.boards
    }

    pub fn board_tasks(&self, board: &str) -> &[Task] {
        self.boards.get(board).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn task(&self, id: Id) -> Option<&Task> {
        self.boards.values().flatten().find(|t| t.id == id)
    }

    /// Tasks across all boards assigned to `user_id`
    pub fn tasks_assigned_to(&self, user_id: Id) -> impl Iterator<Item = &Task> {
        self.boards
            .values()
            .flatten()
            .filter(move |t| t.assignee_id == Some(user_id))
    }

    /// Current time by the store's clock
    pub fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    /// Whether another user can be invited without buying a seat
    pub fn can_invite(&self) -> bool {
        self.users.len() < self.seat_limit
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Start a session. The signed-in identity becomes the only user, as the
    /// Active Owner.
    pub fn login(&mut self, identity: Identity) {
        let id = self.next_id();
        tracing::info!(user = %identity.name, "signed in");
        self.users = vec![owner_user(id, &identity)];
        self.session = Some(identity);
    }

    pub fn create_project(&mut self, name: &str, description: &str) -> Result<Id, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::EmptyField("name"));
        }
        let id = self.next_id();
        let description = Some(description.to_string()).filter(|d| !d.trim().is_empty());
        self.projects.push(Project {
            id,
            name: name.to_string(),
            description,
        });
        tracing::info!(%id, name, "project created");
        self.record(activity::CREATED_PROJECT, &quoted(name));
        Ok(id)
    }

    /// Add a task to the "To Do" column of `board`. Unknown boards are created.
    pub fn create_task(
        &mut self,
        board: &str,
        name: &str,
        assignee_id: Option<Id>,
    ) -> Result<Id, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::EmptyField("name"));
        }
        if let Some(assignee) = assignee_id
            && self.user(assignee).is_none()
        {
            return Err(StoreError::UnknownAssignee(assignee));
        }
        let id = self.next_id();
        self.boards
            .entry(board.to_string())
            .or_default()
            .push(Task::new(id, name.to_string(), assignee_id));
        tracing::info!(%id, board, name, "task created");
        self.record(activity::CREATED_TASK, &quoted(name));
        Ok(id)
    }

    /// Put a task in another column. Any column can follow any other.
    pub fn move_task(&mut self, task_id: Id, status: TaskStatus) -> Result<(), StoreError> {
        let task = self
            .task_mut(task_id)
            .ok_or(StoreError::TaskNotFound(task_id))?;
        task.status = status;
        tracing::debug!(%task_id, status = status.label(), "task moved");
        Ok(())
    }

    pub fn add_comment(&mut self, task_id: Id, text: &str) -> Result<Id, StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::EmptyField("text"));
        }
        if self.task(task_id).is_none() {
            return Err(StoreError::TaskNotFound(task_id));
        }
        let id = self.next_id();
        let comment = Comment {
            id,
            user: self.actor_name().to_string(),
            text: text.to_string(),
            timestamp: time_of_day(&self.clock.now()),
        };
        if let Some(task) = self.task_mut(task_id) {
            task.comments.push(comment);
        }
        tracing::debug!(%task_id, comment = %id, "comment added");
        Ok(id)
    }

    /// Invite a user into a free seat. The invitee stays Pending.
    pub fn invite_user(&mut self, email: &str, role: &str) -> Result<Id, StoreError> {
        if email.trim().is_empty() {
            return Err(StoreError::EmptyField("email"));
        }
        if !self.can_invite() {
            tracing::warn!(
                used = self.users.len(),
                limit = self.seat_limit,
                "invite refused: no free seat"
            );
            return Err(StoreError::SeatLimitReached {
                used: self.users.len(),
                limit: self.seat_limit,
            });
        }
        let id = self.next_id();
        self.users.push(User {
            id,
            name: display_name_from_email(email),
            email: email.to_string(),
            phone: NO_PHONE.to_string(),
            role: role.to_string(),
            status: UserStatus::Pending,
        });
        tracing::info!(%id, email, role, "user invited");
        self.record(activity::INVITED_USER, &quoted(email));
        Ok(id)
    }

    /// Buy one more seat. Returns the new limit.
    pub fn add_seat(&mut self) -> usize {
        self.seat_limit += 1;
        tracing::info!(limit = self.seat_limit, "seat added");
        self.seat_limit
    }

    pub fn create_contact(&mut self, draft: ContactDraft) -> Result<Id, StoreError> {
        if draft.name.trim().is_empty() {
            return Err(StoreError::EmptyField("name"));
        }
        if draft.email.trim().is_empty() {
            return Err(StoreError::EmptyField("email"));
        }
        let id = self.next_id();
        let target = quoted(&draft.name);
        self.contacts.push(draft.into_contact(id));
        tracing::info!(%id, "contact added");
        self.record(activity::ADDED_CONTACT, &target);
        Ok(id)
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn next_id(&mut self) -> Id {
        let millis = self.clock.now().timestamp_millis().max(0) as u64;
        self.ids.next(millis)
    }

    fn task_mut(&mut self, id: Id) -> Option<&mut Task> {
        self.boards.values_mut().flatten().find(|t| t.id == id)
    }

    fn record(&mut self, action: &str, target: &str) {
        let id = self.next_id();
        let entry = ActivityEntry {
            id,
            user: self.actor_name().to_string(),
            action: action.to_string(),
            target: target.to_string(),
            timestamp: time_of_day(&self.clock.now()),
        };
        self.activity.push_front(entry);
    }
}

fn owner_user(id: Id, identity: &Identity) -> User {
    User {
        id,
        name: identity.name.clone(),
        email: identity.email.clone(),
        phone: NO_PHONE.to_string(),
        role: OWNER_ROLE.to_string(),
        status: UserStatus::Active,
    }
}
