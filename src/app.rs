use anyhow::Result;
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::auth::{AUTH_FAILED_NOTICE, AuthForm, Submission};
use crate::dashboard::{Dashboard, Tab, Ticket};
use crate::models::{Identity, JobListing, Registration};
use crate::router::{View, route};
use crate::session::{Session, SessionStore};
use crate::store::Storage;

pub const LOGOUT_FAILED_NOTICE: &str = "Sign out failed!";

/// Everything that can change application state: user intents and effect completions.
#[derive(Debug)]
pub enum Message {
    SubmitAuth,
    ToggleAuthMode,
    DismissNotice,
    Logout,
    SelectTab(Tab),
    NextTab,
    PrevTab,
    RequestRecommendations,
    Registered(Result<Identity>),
    ListingsLoaded {
        mount: u64,
        result: Result<Vec<JobListing>>,
    },
    RecommendationsLoaded {
        ticket: Ticket,
        result: Result<String>,
    },
}

/// Network work requested by an update. Each completes with exactly one `Message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Register(Registration),
    FetchListings { mount: u64 },
    FetchRecommendations { ticket: Ticket, identity_id: String },
}

#[derive(Debug, Clone, Copy)]
pub struct AppOptions {
    /// Drop recommendation responses superseded by a newer request.
    pub fence_recommendations: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            fence_recommendations: true,
        }
    }
}

/// Sole owner of the session, the auth form and the mounted dashboard.
pub struct App<S: Storage> {
    session: SessionStore<S>,
    auth: AuthForm,
    dashboard: Option<Dashboard>,
    mounts: u64,
    notice: Option<String>,
    options: AppOptions,
}

impl<S: Storage> App<S> {
    /// Loads the persisted session and returns the effects owed by the initial view.
    pub fn start(storage: S, options: AppOptions) -> (Self, Vec<Effect>) {
        let mut app = Self {
            session: SessionStore::load(storage),
            auth: AuthForm::default(),
            dashboard: None,
            mounts: 0,
            notice: None,
            options,
        };
        let effects = app.remount().into_iter().collect();
        (app, effects)
    }

    pub fn view(&self) -> View {
        route(self.session.identity())
    }

    pub fn session(&self) -> &Session {
        self.session.session()
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        self.session.storage()
    }

    pub fn auth_form(&self) -> &AuthForm {
        &self.auth
    }

    /// Field edits only; submission goes through `Message::SubmitAuth`.
    pub fn auth_form_mut(&mut self) -> &mut AuthForm {
        &mut self.auth
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        self.dashboard.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::SubmitAuth => self.submit_auth(),
            Message::ToggleAuthMode => {
                if !self.session().is_busy() {
                    self.auth.toggle_mode();
                }
                Vec::new()
            }
            Message::DismissNotice => {
                self.notice = None;
                Vec::new()
            }
            Message::Logout => {
                self.logout();
                Vec::new()
            }
            Message::SelectTab(tab) => {
                if let Some(dashboard) = self.dashboard.as_mut() {
                    dashboard.select(tab);
                }
                Vec::new()
            }
            Message::NextTab => {
                if let Some(dashboard) = self.dashboard.as_mut() {
                    dashboard.select(dashboard.tab().next());
                }
                Vec::new()
            }
            Message::PrevTab => {
                if let Some(dashboard) = self.dashboard.as_mut() {
                    dashboard.select(dashboard.tab().prev());
                }
                Vec::new()
            }
            Message::RequestRecommendations => self.request_recommendations(),
            Message::Registered(result) => self.registered(result),
            Message::ListingsLoaded { mount, result } => {
                match self.dashboard.as_mut().filter(|d| d.mount_id() == mount) {
                    Some(dashboard) => dashboard.apply_listings(result),
                    None => debug!(mount, "Discarding listings for an unmounted dashboard"),
                }
                Vec::new()
            }
            Message::RecommendationsLoaded { ticket, result } => {
                match self.dashboard.as_mut().filter(|d| d.mount_id() == ticket.mount) {
                    Some(dashboard) => {
                        dashboard.apply_recommendation(ticket, result);
                    }
                    None => debug!(mount = ticket.mount, "Discarding recommendations for an unmounted dashboard"),
                }
                Vec::new()
            }
        }
    }

    fn submit_auth(&mut self) -> Vec<Effect> {
        if self.session().is_busy() || self.session().is_authenticated() {
            return Vec::new();
        }
        self.session.set_busy(true);

        match self.auth.submit(Utc::now()) {
            Ok(Submission::Local(identity)) => self.adopt(identity),
            Ok(Submission::Remote(registration)) => {
                info!(role = %registration.role, "Registering {}", registration.email);
                vec![Effect::Register(registration)]
            }
            Err(e) => {
                self.fail_auth(e);
                Vec::new()
            }
        }
    }

    fn registered(&mut self, result: Result<Identity>) -> Vec<Effect> {
        if !self.session().is_busy() {
            debug!("Ignoring registration response with no submission in flight");
            return Vec::new();
        }
        match result {
            Ok(identity) => self.adopt(identity),
            Err(e) => {
                self.fail_auth(e);
                Vec::new()
            }
        }
    }

    fn adopt(&mut self, identity: Identity) -> Vec<Effect> {
        self.session.set_busy(false);
        match self.session.login(identity) {
            Ok(()) => {
                self.auth = AuthForm::default();
                self.remount().into_iter().collect()
            }
            Err(e) => {
                self.fail_auth(e);
                Vec::new()
            }
        }
    }

    fn fail_auth(&mut self, error: anyhow::Error) {
        self.session.set_busy(false);
        warn!("Authentication failed: {:#}", error);
        self.notice = Some(AUTH_FAILED_NOTICE.to_string());
    }

    fn logout(&mut self) {
        match self.session.logout() {
            Ok(()) => self.dashboard = None,
            Err(e) => {
                warn!("Logout failed: {:#}", e);
                self.notice = Some(LOGOUT_FAILED_NOTICE.to_string());
            }
        }
    }

    fn request_recommendations(&mut self) -> Vec<Effect> {
        let (Some(dashboard), Some(identity)) = (self.dashboard.as_mut(), self.session.identity()) else {
            return Vec::new();
        };
        match dashboard.request_recommendations(identity) {
            Some(ticket) => vec![Effect::FetchRecommendations {
                ticket,
                identity_id: identity.id.clone(),
            }],
            None => Vec::new(),
        }
    }

    /// Replaces the dashboard to match the current view. Candidate mounts owe one listing fetch.
    fn remount(&mut self) -> Option<Effect> {
        self.dashboard = None;
        if self.view() != View::CandidateDashboard {
            return None;
        }
        self.mounts += 1;
        self.dashboard = Some(Dashboard::mount(self.mounts, self.options.fence_recommendations));
        Some(Effect::FetchListings { mount: self.mounts })
    }
}
