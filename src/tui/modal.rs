use crate::model::{ContactDraft, INVITE_ROLES, Id, Task, TaskStatus, User};
use crate::ops::{Store, StoreError};

use super::form::{Field, FormState};

/// Which form a modal is collecting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalKind {
    CreateProject,
    CreateTask { board: String },
    InviteUser,
    CreateContact,
    TaskDetails { task_id: Id },
}

/// What happens to a modal after its form is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterSubmit {
    Close,
    /// Task details keep showing so the new comment is visible
    StayOpen,
}

/// An open modal form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub kind: ModalKind,
    pub form: FormState,
    /// Last rejected submission, shown under the fields
    pub error: Option<String>,
}

// Field positions in the task details form
pub const DETAILS_STATUS: usize = 0;
pub const DETAILS_COMMENT: usize = 1;

impl Modal {
    fn new(kind: ModalKind, form: FormState) -> Self {
        Modal {
            kind,
            form,
            error: None,
        }
    }

    pub fn create_project() -> Self {
        Modal::new(
            ModalKind::CreateProject,
            FormState::new(
                "Create New Project",
                vec![
                    Field::text("Project Name", true),
                    Field::text("Description", false),
                ],
            ),
        )
    }

    /// New task form. Assignees are "Unassigned" or any current user.
    pub fn create_task(board: &str, users: &[User]) -> Self {
        let mut assignees = vec![("Unassigned".to_string(), String::new())];
        assignees.extend(users.iter().map(|u| (u.name.clone(), u.id.to_string())));
        Modal::new(
            ModalKind::CreateTask {
                board: board.to_string(),
            },
            FormState::new(
                format!("Create New Task \u{00B7} {}", board),
                vec![
                    Field::text("Task Name", true),
                    Field::choice("Assign To", assignees, 0),
                ],
            ),
        )
    }

    pub fn invite_user() -> Self {
        let roles = INVITE_ROLES
            .iter()
            .map(|r| (r.to_string(), r.to_string()))
            .collect();
        Modal::new(
            ModalKind::InviteUser,
            FormState::new(
                "Invite New User",
                vec![Field::text("Email", true), Field::choice("Role", roles, 0)],
            ),
        )
    }

    pub fn create_contact() -> Self {
        Modal::new(
            ModalKind::CreateContact,
            FormState::new(
                "Add New Contact",
                vec![
                    Field::text("Name", true),
                    Field::text("Role", false),
                    Field::text("Email", true),
                    Field::text("Phone", false),
                    Field::text("Rate", false),
                    Field::text("Notes", false),
                ],
            ),
        )
    }

    /// Details for one task, focused on the comment input
    pub fn task_details(task: &Task) -> Self {
        let statuses = TaskStatus::ALL
            .iter()
            .map(|s| (s.label().to_string(), s.label().to_string()))
            .collect();
        let mut form = FormState::new(
            task.name.clone(),
            vec![
                Field::choice("Status", statuses, task.status.column()),
                Field::text("Comment", false),
            ],
        );
        form.focus = DETAILS_COMMENT;
        Modal::new(ModalKind::TaskDetails { task_id: task.id }, form)
    }

    /// Task shown by a details modal
    pub fn task_id(&self) -> Option<Id> {
        match self.kind {
            ModalKind::TaskDetails { task_id } => Some(task_id),
            _ => None,
        }
    }

    /// Status currently picked in a details modal
    pub fn chosen_status(&self) -> Option<TaskStatus> {
        self.task_id()?;
        TaskStatus::from_label(self.form.value(DETAILS_STATUS))
    }

    /// Apply the form to the store. On error nothing changed and the form
    /// keeps its input.
    pub fn submit(&mut self, store: &mut Store) -> Result<AfterSubmit, StoreError> {
        let result = match &self.kind {
            ModalKind::CreateProject => store
                .create_project(self.form.value(0), self.form.value(1))
                .map(|_| AfterSubmit::Close),
            ModalKind::CreateTask { board } => {
                let assignee = self.form.value(1).parse::<u64>().ok().map(Id);
                store
                    .create_task(board, self.form.value(0), assignee)
                    .map(|_| AfterSubmit::Close)
            }
            ModalKind::InviteUser => store
                .invite_user(self.form.value(0), self.form.value(1))
                .map(|_| AfterSubmit::Close),
            ModalKind::CreateContact => {
                let draft = ContactDraft {
                    name: self.form.value(0).to_string(),
                    role: self.form.value(1).to_string(),
                    email: self.form.value(2).to_string(),
                    phone: self.form.value(3).to_string(),
                    rate: self.form.value(4).to_string(),
                    notes: self.form.value(5).to_string(),
                };
                store.create_contact(draft).map(|_| AfterSubmit::Close)
            }
            ModalKind::TaskDetails { task_id } => store
                .add_comment(*task_id, self.form.value(DETAILS_COMMENT))
                .map(|_| AfterSubmit::StayOpen),
        };
        match &result {
            Ok(AfterSubmit::StayOpen) => {
                self.form.clear(DETAILS_COMMENT);
                self.error = None;
            }
            Ok(AfterSubmit::Close) => self.error = None,
            Err(e) => self.error = Some(e.to_string()),
        }
        result
    }
}
