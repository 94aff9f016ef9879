use crate::models::{Identity, Role};

/// Top-level surface for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Marketing text and the sign-in/registration form.
    Anonymous,
    CandidateDashboard,
    EmployerDashboard,
}

pub fn route(identity: Option<&Identity>) -> View {
    match identity.map(Identity::role) {
        None => View::Anonymous,
        Some(Role::Candidate) => View::CandidateDashboard,
        Some(Role::Employer) => View::EmployerDashboard,
    }
}
