use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{AppConfig, Id, PlanAudience, Task, TaskStatus};
use crate::nav::{AnyNavigator, Navigator, Page};
use crate::ops::auth::{AuthMode, Authenticator, Credentials, MockAuthenticator};
use crate::ops::{Store, StoreError};
use crate::router::{self, RenderedPage, RouteSet};

use super::form::{Field, FieldInput, FormState};
use super::input;
use super::modal::{AfterSubmit, Modal};
use super::render;
use super::theme::Theme;

pub const SEAT_ADDED: &str = "Seat added! You can now invite another user.";
pub const SEAT_LIMIT_REACHED: &str = "You have reached your seat limit. Please add more seats.";

/// Entries of the Resources menu
pub const RESOURCES: [&str; 5] = [
    "Help Center",
    "Video Tutorials",
    "Downloadables",
    "Hire Cast & Crew",
    "Partners",
];

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Auth screen before a session exists
    Login,
    Navigate,
    /// A modal form has focus
    Modal,
    /// Typing a route fragment into the location bar
    Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Alert,
}

/// One-line message in the status row, cleared on navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// Auth screen state
#[derive(Debug, Clone)]
pub struct LoginState {
    pub mode: AuthMode,
    pub form: FormState,
    pub error: Option<String>,
}

impl LoginState {
    pub fn new(mode: AuthMode) -> Self {
        let fields = match mode {
            AuthMode::Login => vec![Field::text("Email Address", true), Field::secret("Password")],
            AuthMode::SignUp => vec![
                Field::text("Full Name", true),
                Field::text("Email Address", true),
                Field::secret("Password"),
            ],
        };
        let title = match mode {
            AuthMode::Login => "Welcome back!",
            AuthMode::SignUp => "Create your account",
        };
        LoginState {
            mode,
            form: FormState::new(title, fields),
            error: None,
        }
    }

    /// What the filled-in form submits
    pub fn credentials(&self) -> Credentials {
        let offset = match self.mode {
            AuthMode::Login => 0,
            AuthMode::SignUp => 1,
        };
        Credentials {
            mode: self.mode,
            full_name: if offset == 1 {
                self.form.value(0).to_string()
            } else {
                String::new()
            },
            email: self.form.value(offset).to_string(),
            password: self.form.value(offset + 1).to_string(),
        }
    }
}

/// Selection on the task board: which board, column and row within it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardCursor {
    pub board: usize,
    pub column: usize,
    pub row: usize,
}

/// Main application state
pub struct App {
    pub config: AppConfig,
    pub routes: RouteSet,
    pub store: Store,
    pub nav: AnyNavigator,
    pub authenticator: Box<dyn Authenticator>,
    pub mode: Mode,
    pub theme: Theme,
    pub should_quit: bool,
    pub sidebar_expanded: bool,
    pub show_resources: bool,
    pub modal: Option<Modal>,
    pub login: LoginState,
    /// Location bar input while in Location mode
    pub location: FormState,
    pub status: Option<StatusMessage>,
    pub board_cursor: BoardCursor,
    pub plan_audience: PlanAudience,
    /// Set by the navigator subscription, consumed by `sync_route`
    route_changed: Rc<Cell<bool>>,
}

impl App {
    pub fn new(config: AppConfig, initial_route: Option<&str>) -> Self {
        let store = Store::new(&config);
        App::with_store(config, store, initial_route)
    }

    pub fn with_store(config: AppConfig, store: Store, initial_route: Option<&str>) -> Self {
        let route_changed = Rc::new(Cell::new(false));
        let mut nav = AnyNavigator::from_kind(config.features.navigation, initial_route);
        if let AnyNavigator::Fragment(fragment_nav) = &mut nav {
            let flag = Rc::clone(&route_changed);
            fragment_nav.subscribe(move |fragment| {
                tracing::debug!(fragment, "route changed");
                flag.set(true);
            });
        }

        let mode = if config.features.auth {
            Mode::Login
        } else {
            Mode::Navigate
        };

        App {
            routes: RouteSet::from_features(&config.features),
            authenticator: Box::new(MockAuthenticator::from_config(&config.identity)),
            theme: Theme::from_config(&config.ui),
            sidebar_expanded: config.ui.sidebar_expanded,
            store,
            nav,
            mode,
            should_quit: false,
            show_resources: false,
            modal: None,
            login: LoginState::new(AuthMode::Login),
            location: location_form(""),
            status: None,
            board_cursor: BoardCursor::default(),
            plan_audience: PlanAudience::default(),
            route_changed,
            config,
        }
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    /// The page actually shown (disabled pages fall back to Home)
    pub fn current_page(&self) -> Page {
        self.routes.resolve(self.nav.current_page())
    }

    /// The current page with the state it renders
    pub fn rendered(&self) -> RenderedPage<'_> {
        router::route(self.nav.current_page(), &self.store, &self.routes)
    }

    pub fn navigate(&mut self, page: Page) {
        let before = self.nav.current_page();
        self.nav.navigate(page);
        if matches!(self.nav, AnyNavigator::Memory(_)) && before != page {
            self.route_changed.set(true);
        }
        self.sync_route();
    }

    /// Jump to the nth enabled page (0-based)
    pub fn navigate_to_index(&mut self, index: usize) {
        if let Some(&page) = self.routes.pages().get(index) {
            self.navigate(page);
        }
    }

    /// Move through enabled pages in sidebar order, wrapping
    pub fn cycle_page(&mut self, delta: isize) {
        let pages = self.routes.pages();
        if pages.is_empty() {
            return;
        }
        let current = self.current_page();
        let idx = pages.iter().position(|&p| p == current).unwrap_or(0) as isize;
        let next = (idx + delta).rem_euclid(pages.len() as isize) as usize;
        let page = pages[next];
        self.navigate(page);
    }

    pub fn open_location_prompt(&mut self) {
        self.location = location_form(&self.nav.location());
        self.mode = Mode::Location;
    }

    pub fn submit_location(&mut self) {
        let raw = self.location.value(0).to_string();
        self.mode = Mode::Navigate;
        let before = self.nav.current_page();
        self.nav.open_location(&raw);
        if matches!(self.nav, AnyNavigator::Memory(_)) && self.nav.current_page() != before {
            self.route_changed.set(true);
        }
        self.sync_route();
    }

    /// Reset per-page UI state after the route changed
    fn sync_route(&mut self) {
        if self.route_changed.replace(false) {
            self.show_resources = false;
            self.status = None;
            self.board_cursor = BoardCursor::default();
        }
    }

    // -----------------------------------------------------------------------
    // Session
    // -----------------------------------------------------------------------

    pub fn toggle_login_mode(&mut self) {
        self.login = LoginState::new(self.login.mode.toggled());
    }

    pub fn submit_login(&mut self) {
        let credentials = self.login.credentials();
        match self.authenticator.authenticate(&credentials) {
            Ok(identity) => {
                self.store.login(identity);
                self.login = LoginState::new(AuthMode::Login);
                self.mode = Mode::Navigate;
            }
            Err(e) => self.login.error = Some(e.to_string()),
        }
    }

    // -----------------------------------------------------------------------
    // Modals and alerts
    // -----------------------------------------------------------------------

    pub fn open_modal(&mut self, modal: Modal) {
        self.modal = Some(modal);
        self.mode = Mode::Modal;
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
        self.mode = Mode::Navigate;
    }

    /// Open the invite form, or explain why not
    pub fn open_invite(&mut self) {
        if self.store.can_invite() {
            self.open_modal(Modal::invite_user());
        } else {
            self.alert(SEAT_LIMIT_REACHED);
        }
    }

    pub fn add_seat(&mut self) {
        self.store.add_seat();
        self.info(SEAT_ADDED);
    }

    pub fn open_new_task(&mut self) {
        let board = self.selected_board().map(str::to_string).unwrap_or_else(|| {
            self.config
                .workspace
                .boards
                .first()
                .cloned()
                .unwrap_or_else(|| "General".into())
        });
        let modal = Modal::create_task(&board, self.store.users());
        self.open_modal(modal);
    }

    pub fn submit_modal(&mut self) {
        let Some(modal) = self.modal.as_mut() else {
            return;
        };
        match modal.submit(&mut self.store) {
            Ok(AfterSubmit::Close) => self.close_modal(),
            Ok(AfterSubmit::StayOpen) => {}
            Err(StoreError::SeatLimitReached { .. }) => {
                self.close_modal();
                self.alert(SEAT_LIMIT_REACHED);
            }
            Err(e) => tracing::debug!(error = %e, "modal submission rejected"),
        }
    }

    /// Apply the status picked in the task details modal
    pub fn apply_details_status(&mut self) {
        let Some(modal) = &self.modal else {
            return;
        };
        if let (Some(task_id), Some(status)) = (modal.task_id(), modal.chosen_status()) {
            if let Err(e) = self.store.move_task(task_id, status) {
                tracing::warn!(error = %e, "status change failed");
                return;
            }
            self.follow_task(task_id, status);
        }
    }

    pub fn info(&mut self, text: &str) {
        self.status = Some(StatusMessage {
            text: text.to_string(),
            kind: StatusKind::Info,
        });
    }

    pub fn alert(&mut self, text: &str) {
        self.status = Some(StatusMessage {
            text: text.to_string(),
            kind: StatusKind::Alert,
        });
    }

    // -----------------------------------------------------------------------
    // Task board
    // -----------------------------------------------------------------------

    /// Name of the board the cursor is on
    pub fn selected_board(&self) -> Option<&str> {
        self.store
            .boards()
            .get_index(self.board_cursor.board)
            .map(|(name, _)| name.as_str())
    }

    /// Tasks in one column of the selected board, in creation order
    pub fn column_tasks(&self, status: TaskStatus) -> Vec<&Task> {
        let Some(board) = self.selected_board() else {
            return Vec::new();
        };
        self.store
            .board_tasks(board)
            .iter()
            .filter(|t| t.status == status)
            .collect()
    }

    pub fn selected_task(&self) -> Option<&Task> {
        let status = TaskStatus::ALL.get(self.board_cursor.column)?;
        self.column_tasks(*status).get(self.board_cursor.row).copied()
    }

    pub fn move_board_column(&mut self, delta: isize) {
        let columns = TaskStatus::ALL.len() as isize;
        let column = (self.board_cursor.column as isize + delta).clamp(0, columns - 1);
        self.board_cursor.column = column as usize;
        self.clamp_board_row();
    }

    pub fn move_board_row(&mut self, delta: isize) {
        let row = self.board_cursor.row as isize + delta;
        self.board_cursor.row = row.max(0) as usize;
        self.clamp_board_row();
    }

    pub fn cycle_board(&mut self, delta: isize) {
        let count = self.store.boards().len();
        if count < 2 {
            return;
        }
        let board = (self.board_cursor.board as isize + delta).rem_euclid(count as isize);
        self.board_cursor = BoardCursor {
            board: board as usize,
            ..BoardCursor::default()
        };
    }

    /// Move the selected task one column left (negative) or right
    pub fn move_selected_task(&mut self, delta: isize) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let target = if delta < 0 {
            task.status.prev()
        } else {
            task.status.next()
        };
        let (task_id, Some(status)) = (task.id, target) else {
            return;
        };
        match self.store.move_task(task_id, status) {
            Ok(()) => self.follow_task(task_id, status),
            Err(e) => tracing::warn!(error = %e, "task move failed"),
        }
    }

    pub fn open_task_details(&mut self) {
        if let Some(task) = self.selected_task() {
            let modal = Modal::task_details(task);
            self.open_modal(modal);
        }
    }

    /// Put the cursor on `task_id` after it changed column
    fn follow_task(&mut self, task_id: Id, status: TaskStatus) {
        self.board_cursor.column = status.column();
        self.board_cursor.row = self
            .column_tasks(status)
            .iter()
            .position(|t| t.id == task_id)
            .unwrap_or(0);
    }

    fn clamp_board_row(&mut self) {
        let status = TaskStatus::ALL[self.board_cursor.column];
        let len = self.column_tasks(status).len();
        self.board_cursor.row = self.board_cursor.row.min(len.saturating_sub(1));
    }
}

fn location_form(initial: &str) -> FormState {
    let mut field = Field::text("Location", false);
    field.input = FieldInput::Text(initial.to_string());
    FormState::new("Go to", vec![field])
}

/// Run the TUI application
pub fn run(config: AppConfig, route: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config, route);
    tracing::info!(
        page = app.current_page().slug(),
        auth = app.config.features.auth,
        "starting tui"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("tui closed");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
