//! Central application state shared across views.
//!
//! Owns the session gate, the navigation stack, the favorites registry,
//! the live event list, and the per-view working state for the detail and
//! editor views. Every backend call runs on a worker thread; its result
//! comes back over an mpsc channel that [`AppState::pump`] drains once per
//! frame on the UI thread.

use std::sync::mpsc::{channel, Receiver};

use chrono::{Local, NaiveDate, NaiveTime};

use crate::app::config::Config;
use crate::app::favorites::FavoritesRegistry;
use crate::app::feed::{EventFeedClient, FeedStatus};
use crate::app::session::{self, SessionState};
use crate::app::store::{self, FetchOutcome};
use crate::app::types::{AppView, AuthResponse, UserInfo};
use crate::shared::event::{
    is_standard_event_type, Event, EventDraft, OTHER_EVENT_TYPE,
};

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
const TIME_INPUT_FORMAT: &str = "%H:%M";

/// Working state of the detail view.
pub struct DetailState {
    pub event: Option<Event>,
    pub loading: bool,
    /// Terminal state: the point read came back empty. No retry.
    pub not_found: bool,
    pub error: Option<String>,
    /// Set whenever the view (re)gains focus; cleared once a fetch starts.
    pub needs_fetch: bool,
    pub confirm_delete: bool,
    pub deleting: bool,
    /// Pending point read, tagged with the id it was issued for so a slow
    /// completion for an event we navigated away from is discarded.
    pub pending_fetch: Option<(String, Receiver<Result<FetchOutcome, String>>)>,
    pub pending_delete: Option<(String, Receiver<Result<(), String>>)>,
}

impl DetailState {
    fn new() -> Self {
        Self {
            event: None,
            loading: false,
            not_found: false,
            error: None,
            needs_fetch: false,
            confirm_delete: false,
            deleting: false,
            pending_fetch: None,
            pending_delete: None,
        }
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Working state of the create/edit form.
pub struct EditorState {
    pub title: String,
    pub description: String,
    pub location: String,
    /// Picker selection: a standard tag or "Other"
    pub event_type: String,
    pub custom_event_type: String,
    pub date_input: String,
    pub time_input: String,
    pub validation_error: Option<String>,
    pub submit_error: Option<String>,
    pub load_error: Option<String>,
    pub loading: bool,
    pub submitting: bool,
    pub needs_prefill: bool,
    pub pending_prefill: Option<(String, Receiver<Result<FetchOutcome, String>>)>,
    pub pending_submit: Option<Receiver<Result<(), String>>>,
}

impl EditorState {
    fn new() -> Self {
        let now = Local::now();
        Self {
            title: String::new(),
            description: String::new(),
            location: String::new(),
            event_type: "Conference".to_string(),
            custom_event_type: String::new(),
            date_input: now.date_naive().format(DATE_INPUT_FORMAT).to_string(),
            time_input: now.time().format(TIME_INPUT_FORMAT).to_string(),
            validation_error: None,
            submit_error: None,
            load_error: None,
            loading: false,
            submitting: false,
            needs_prefill: false,
            pending_prefill: None,
            pending_submit: None,
        }
    }

    fn reset_for(&mut self, edit_mode: bool) {
        *self = Self::new();
        self.needs_prefill = edit_mode;
        self.loading = edit_mode;
    }

    /// Populate the form from a fetched event. A stored type outside the
    /// standard tags lands on the "Other" branch with the custom text.
    pub fn prefill_from_event(&mut self, event: &Event) {
        self.title = event.title.clone();
        self.description = event.description.clone();
        self.location = event.location.clone();
        if is_standard_event_type(&event.event_type) {
            self.event_type = event.event_type.clone();
            self.custom_event_type.clear();
        } else {
            self.event_type = OTHER_EVENT_TYPE.to_string();
            self.custom_event_type = event.event_type.clone();
        }
        if let Some(date) = event.date {
            self.date_input = date.format(DATE_INPUT_FORMAT).to_string();
        }
        if let Some(time) = event.time {
            self.time_input = time.format(TIME_INPUT_FORMAT).to_string();
        }
    }

    /// Build the draft the form would submit. An empty date falls back to
    /// today; an empty or unparsable time stays `None` and fails the
    /// draft's own validation.
    pub fn to_draft(&self) -> EventDraft {
        let date = if self.date_input.trim().is_empty() {
            Some(Local::now().date_naive())
        } else {
            NaiveDate::parse_from_str(self.date_input.trim(), DATE_INPUT_FORMAT).ok()
        };
        let time = NaiveTime::parse_from_str(self.time_input.trim(), TIME_INPUT_FORMAT).ok();
        EventDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            event_type: self.event_type.clone(),
            custom_event_type: self.custom_event_type.clone(),
            date,
            time,
        }
    }
}

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub session: SessionState,
    pub current_view: AppView,
    nav_stack: Vec<AppView>,

    // Auth form
    pub email_input: String,
    pub password_input: String,
    pub confirm_password_input: String,
    pub is_signup_mode: bool,
    pub auth_error: Option<String>,
    pub auth_loading: bool,
    pub pending_auth: Option<Receiver<Result<AuthResponse, String>>>,
    pub pending_restore: Option<Receiver<Result<UserInfo, String>>>,

    // Event list (live feed)
    pub feed: Option<EventFeedClient>,
    pub events: Vec<Event>,
    pub feed_status: Option<FeedStatus>,

    // Favorites
    pub favorites: FavoritesRegistry,
    /// Event id awaiting remove confirmation, if any
    pub confirm_remove_favorite: Option<String>,

    pub detail: DetailState,
    pub editor: EditorState,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    pub fn with_config(config: Config) -> Self {
        let mut state = Self {
            config,
            session: SessionState::SignedOut,
            current_view: AppView::Dashboard,
            nav_stack: Vec::new(),
            email_input: String::new(),
            password_input: String::new(),
            confirm_password_input: String::new(),
            is_signup_mode: false,
            auth_error: None,
            auth_loading: false,
            pending_auth: None,
            pending_restore: None,
            feed: None,
            events: Vec::new(),
            feed_status: None,
            favorites: FavoritesRegistry::new(),
            confirm_remove_favorite: None,
            detail: DetailState::new(),
            editor: EditorState::new(),
        };

        // A persisted token resolves through /api/auth/me before the gate
        // opens; without one we are signed out immediately.
        if state.config.get_token().is_some() {
            state.session = SessionState::Resolving;
            let config = state.config.clone();
            let (tx, rx) = channel();
            std::thread::spawn(move || {
                let _ = tx.send(session::restore(&config));
            });
            state.pending_restore = Some(rx);
        }

        state
    }

    /// Drain every pending worker result and kick off any fetch the
    /// current view is waiting on. Called once per frame.
    pub fn pump(&mut self) {
        self.check_restore_result();
        self.check_auth_result();
        self.poll_feed();
        self.check_detail_results();
        self.check_editor_results();
        self.kick_pending_fetches();
    }

    fn check_restore_result(&mut self) {
        let Some(ref rx) = self.pending_restore else {
            return;
        };
        if let Ok(result) = rx.try_recv() {
            self.pending_restore = None;
            match result {
                Ok(user) => {
                    tracing::info!("session restored for {}", user.email);
                    self.enter_session(user);
                }
                Err(e) => {
                    tracing::warn!("session restore failed: {}", e);
                    self.config.clear_token();
                    self.config.persist_session();
                    self.session = SessionState::SignedOut;
                }
            }
        }
    }

    fn check_auth_result(&mut self) {
        let Some(ref rx) = self.pending_auth else {
            return;
        };
        if let Ok(result) = rx.try_recv() {
            self.pending_auth = None;
            self.auth_loading = false;
            match result {
                Ok(auth) => {
                    tracing::info!("authentication successful: {}", auth.user.email);
                    self.config.set_token(Some(auth.token));
                    self.config.persist_session();
                    self.password_input.clear();
                    self.confirm_password_input.clear();
                    self.is_signup_mode = false;
                    self.auth_error = None;
                    self.enter_session(auth.user);
                }
                Err(e) => {
                    tracing::error!("authentication failed: {}", e);
                    self.auth_error = Some(e);
                }
            }
        }
    }

    fn poll_feed(&mut self) {
        let Some(ref feed) = self.feed else {
            return;
        };
        if let Some(status) = feed.poll_status() {
            tracing::debug!("feed status: {:?}", status);
            self.feed_status = Some(status);
        }
        // Snapshots are applied in delivery order; each one replaces the
        // whole list.
        let snapshots = feed.poll_snapshots();
        for snapshot in snapshots {
            self.apply_snapshot(snapshot);
        }
    }

    /// Replace the entire event sequence with a feed snapshot, keeping the
    /// delivered order (newest first by creation time).
    pub fn apply_snapshot(&mut self, events: Vec<Event>) {
        self.events = events;
    }

    fn check_detail_results(&mut self) {
        if let Some((ref for_id, ref rx)) = self.detail.pending_fetch {
            let for_id = for_id.clone();
            if let Ok(result) = rx.try_recv() {
                self.detail.pending_fetch = None;
                self.detail.loading = false;
                // Discard completions for an event the view moved away from.
                if self.current_detail_id().as_deref() == Some(for_id.as_str()) {
                    match result {
                        Ok(FetchOutcome::Found(event)) => {
                            self.detail.event = Some(event);
                            self.detail.error = None;
                        }
                        Ok(FetchOutcome::NotFound) => {
                            tracing::warn!("event {} not found", for_id);
                            self.detail.event = None;
                            self.detail.not_found = true;
                        }
                        Err(e) => {
                            tracing::error!("failed to fetch event {}: {}", for_id, e);
                            self.detail.error = Some(e);
                        }
                    }
                }
            }
        }

        if let Some((ref for_id, ref rx)) = self.detail.pending_delete {
            let for_id = for_id.clone();
            if let Ok(result) = rx.try_recv() {
                self.detail.pending_delete = None;
                self.detail.deleting = false;
                match result {
                    Ok(()) => {
                        tracing::info!("event {} deleted", for_id);
                        self.go_back();
                    }
                    Err(e) => {
                        tracing::error!("failed to delete event {}: {}", for_id, e);
                        self.detail.error = Some(e);
                    }
                }
            }
        }
    }

    fn check_editor_results(&mut self) {
        if let Some((ref for_id, ref rx)) = self.editor.pending_prefill {
            let for_id = for_id.clone();
            if let Ok(result) = rx.try_recv() {
                self.editor.pending_prefill = None;
                self.editor.loading = false;
                if self.current_editor_id().as_deref() == Some(for_id.as_str()) {
                    match result {
                        Ok(FetchOutcome::Found(event)) => self.editor.prefill_from_event(&event),
                        Ok(FetchOutcome::NotFound) => {
                            self.editor.load_error = Some("Failed to load event data.".to_string());
                        }
                        Err(e) => {
                            tracing::error!("failed to load event {} for editing: {}", for_id, e);
                            self.editor.load_error = Some("Failed to load event data.".to_string());
                        }
                    }
                }
            }
        }

        if let Some(ref rx) = self.editor.pending_submit {
            if let Ok(result) = rx.try_recv() {
                self.editor.pending_submit = None;
                self.editor.submitting = false;
                match result {
                    Ok(()) => {
                        tracing::info!("event saved");
                        self.go_back();
                    }
                    Err(e) => {
                        // Form stays populated for retry.
                        tracing::error!("failed to save event: {}", e);
                        self.editor.submit_error = Some(e);
                    }
                }
            }
        }
    }

    fn kick_pending_fetches(&mut self) {
        if let Some(event_id) = self.current_detail_id() {
            if self.detail.needs_fetch
                && self.detail.pending_fetch.is_none()
                && !self.detail.not_found
            {
                self.detail.needs_fetch = false;
                self.detail.loading = true;
                let config = self.config.clone();
                let id = event_id.clone();
                let (tx, rx) = channel();
                std::thread::spawn(move || {
                    let _ = tx.send(store::get_event(&config, &id));
                });
                self.detail.pending_fetch = Some((event_id, rx));
            }
        }

        if let Some(event_id) = self.current_editor_id() {
            if self.editor.needs_prefill && self.editor.pending_prefill.is_none() {
                self.editor.needs_prefill = false;
                let config = self.config.clone();
                let id = event_id.clone();
                let (tx, rx) = channel();
                std::thread::spawn(move || {
                    let _ = tx.send(store::get_event(&config, &id));
                });
                self.editor.pending_prefill = Some((event_id, rx));
            }
        }
    }

    fn current_detail_id(&self) -> Option<String> {
        match &self.current_view {
            AppView::EventDetail { event_id } => Some(event_id.clone()),
            _ => None,
        }
    }

    fn current_editor_id(&self) -> Option<String> {
        match &self.current_view {
            AppView::EventEditor { event_id } => event_id.clone(),
            _ => None,
        }
    }

    fn enter_session(&mut self, user: UserInfo) {
        self.session = SessionState::SignedIn(user);
        self.current_view = AppView::Dashboard;
        self.nav_stack.clear();
        self.email_input.clear();
        self.start_feed();
    }

    fn start_feed(&mut self) {
        let mut feed = EventFeedClient::new(self.config.clone());
        feed.start();
        self.feed = Some(feed);
    }

    // --- Auth handlers -----------------------------------------------------

    pub fn handle_sign_in(&mut self) {
        if self.email_input.is_empty() || self.password_input.is_empty() {
            self.auth_error = Some("Please fill all fields.".to_string());
            return;
        }

        self.auth_loading = true;
        self.auth_error = None;

        let email = self.email_input.clone();
        let password = self.password_input.clone();
        let config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(session::sign_in(&config, email, password));
        });
        self.pending_auth = Some(rx);
    }

    pub fn handle_sign_up(&mut self) {
        if self.email_input.is_empty() || self.password_input.is_empty() {
            self.auth_error = Some("Please fill all fields.".to_string());
            return;
        }

        if !self.email_input.contains('@') || !self.email_input.contains('.') {
            self.auth_error = Some("Please enter a valid email address".to_string());
            return;
        }

        if self.password_input != self.confirm_password_input {
            self.auth_error = Some("Passwords do not match".to_string());
            return;
        }

        self.auth_loading = true;
        self.auth_error = None;

        let email = self.email_input.clone();
        let password = self.password_input.clone();
        let config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(session::sign_up(&config, email, password));
        });
        self.pending_auth = Some(rx);
    }

    pub fn logout(&mut self) {
        // Fire-and-forget; the local session is dropped either way.
        if self.config.get_token().is_some() {
            let config = self.config.clone();
            std::thread::spawn(move || match session::sign_out(&config) {
                Ok(()) => tracing::info!("signed out successfully"),
                Err(e) => tracing::error!("error during sign out: {}", e),
            });
        }

        if let Some(mut feed) = self.feed.take() {
            feed.shutdown();
        }
        self.config.clear_token();
        self.config.persist_session();
        self.session = SessionState::SignedOut;
        self.current_view = AppView::Dashboard;
        self.nav_stack.clear();
        self.events.clear();
        self.feed_status = None;
        self.favorites.clear();
        self.confirm_remove_favorite = None;
        self.detail.reset();
        self.editor = EditorState::new();
        self.email_input.clear();
        self.password_input.clear();
        self.confirm_password_input.clear();
        self.auth_error = None;
        self.auth_loading = false;
        self.pending_auth = None;
    }

    pub fn toggle_auth_mode(&mut self) {
        self.is_signup_mode = !self.is_signup_mode;
        self.auth_error = None;
        self.password_input.clear();
        self.confirm_password_input.clear();
    }

    // --- Navigation --------------------------------------------------------

    pub fn navigate_to(&mut self, view: AppView) {
        self.nav_stack.push(self.current_view.clone());
        match &view {
            AppView::EventDetail { .. } => {
                self.detail.reset();
                self.detail.needs_fetch = true;
            }
            AppView::EventEditor { event_id } => {
                self.editor.reset_for(event_id.is_some());
            }
            _ => {}
        }
        self.current_view = view;
    }

    pub fn go_back(&mut self) {
        let previous = self.nav_stack.pop().unwrap_or(AppView::Dashboard);
        if matches!(previous, AppView::EventDetail { .. }) {
            // Regaining focus re-fetches: the event may have been edited
            // since it was last shown.
            self.detail.needs_fetch = true;
            self.detail.not_found = false;
        }
        self.current_view = previous;
    }

    // --- Favorites ---------------------------------------------------------

    /// Heart press on a card: favorite the event, or ask to confirm
    /// removal when it already is one.
    pub fn handle_favorite_press(&mut self, event_id: &str) {
        if self.favorites.contains(event_id) {
            self.confirm_remove_favorite = Some(event_id.to_string());
        } else {
            self.favorites.toggle(event_id);
        }
    }

    /// Ask for confirmation before removing a favorite.
    pub fn request_remove_favorite(&mut self, event_id: &str) {
        self.confirm_remove_favorite = Some(event_id.to_string());
    }

    pub fn confirm_favorite_removal(&mut self) {
        if let Some(event_id) = self.confirm_remove_favorite.take() {
            self.favorites.remove(&event_id);
        }
    }

    pub fn cancel_favorite_removal(&mut self) {
        self.confirm_remove_favorite = None;
    }

    /// Events currently favorited, in the order the list delivers them.
    pub fn favorite_events(&self) -> Vec<Event> {
        self.events
            .iter()
            .filter(|event| self.favorites.contains(&event.id))
            .cloned()
            .collect()
    }

    // --- Detail ------------------------------------------------------------

    pub fn handle_delete_confirmed(&mut self) {
        self.detail.confirm_delete = false;
        let Some(event_id) = self.current_detail_id() else {
            return;
        };
        if self.detail.pending_delete.is_some() {
            return;
        }
        self.detail.deleting = true;
        let config = self.config.clone();
        let id = event_id.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(store::delete_event(&config, &id));
        });
        self.detail.pending_delete = Some((event_id, rx));
    }

    // --- Editor ------------------------------------------------------------

    /// Validate the form and submit: update in edit mode, insert otherwise.
    pub fn handle_submit(&mut self) {
        if self.editor.pending_submit.is_some() {
            return;
        }

        let draft = self.editor.to_draft();
        if !self.editor.date_input.trim().is_empty() && draft.date.is_none() {
            self.editor.validation_error =
                Some("Enter the date as YYYY-MM-DD (e.g. 2024-06-01).".to_string());
            return;
        }
        if let Err(e) = draft.validate() {
            self.editor.validation_error = Some(match e {
                crate::shared::SharedError::ValidationError { message, .. } => message,
                other => other.to_string(),
            });
            return;
        }
        self.editor.validation_error = None;
        self.editor.submit_error = None;

        let Some(user) = self.session.user() else {
            self.editor.submit_error = Some("Not authenticated".to_string());
            return;
        };

        let payload = draft.to_payload(&user.id);
        let event_id = self.current_editor_id();
        let config = self.config.clone();

        self.editor.submitting = true;
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = match event_id {
                Some(id) => store::update_event(&config, &id, &payload),
                None => store::add_event(&config, &payload).map(|_| ()),
            };
            let _ = tx.send(result);
        });
        self.editor.pending_submit = Some(rx);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
