use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

use crate::models::{Identity, Registration, Role};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("valid regex"));

/// Generic notice shown for every failed sign-in or registration.
pub const AUTH_FAILED_NOTICE: &str = "Sign in / registration failed!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(&self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Register => "Create account",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// What a submit turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Login-mode: identity synthesized locally, no network call.
    Local(Identity),
    /// Register-mode: must go through the registration endpoint.
    Remote(Registration),
}

impl AuthForm {
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn submit(&self, now: DateTime<Utc>) -> Result<Submission> {
        match self.mode {
            AuthMode::Login => synthesize_identity(&self.email, &self.name, self.role, now).map(Submission::Local),
            AuthMode::Register => self.registration().map(Submission::Remote),
        }
    }

    fn registration(&self) -> Result<Registration> {
        let email = validate_email(&self.email)?;
        let name = self.name.trim();
        if name.is_empty() {
            return Err(anyhow!("Name is required to register"));
        }
        Ok(Registration {
            email: email.to_string(),
            name: name.to_string(),
            role: self.role,
        })
    }
}

/// Builds an identity from form fields without checking any credential.
pub fn synthesize_identity(email: &str, name: &str, role: Role, now: DateTime<Utc>) -> Result<Identity> {
    let email = validate_email(email)?;
    let name = match name.trim() {
        "" => email.split('@').next().unwrap_or(email),
        given => given,
    };
    Ok(Identity::new(
        now.timestamp_millis().to_string(),
        email.to_string(),
        name.to_string(),
        role,
    ))
}

pub fn validate_email(email: &str) -> Result<&str> {
    let email = email.trim();
    if EMAIL_RE.is_match(email) {
        Ok(email)
    } else {
        Err(anyhow!("Malformed email address: '{}'", email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_123).unwrap()
    }

    #[test]
    fn test_synthesize_identity_defaults_name_to_local_part() {
        let identity = synthesize_identity("a@x.com", "", Role::Employer, now()).unwrap();
        assert_eq!(identity.name, "a");
        assert_eq!(identity.email, "a@x.com");
        assert_eq!(identity.role(), Role::Employer);
        assert_eq!(identity.id, "1700000000123");
    }

    #[test]
    fn test_synthesize_identity_keeps_given_name() {
        let identity = synthesize_identity(" lan@x.vn ", "  Lan Nguyen ", Role::Candidate, now()).unwrap();
        assert_eq!(identity.name, "Lan Nguyen");
        assert_eq!(identity.email, "lan@x.vn");
    }

    #[test]
    fn test_synthesize_identity_rejects_malformed_email() {
        for email in ["", "ax.com", "a@", "@x.com", "a b@x.com", "a@@x.com"] {
            assert!(synthesize_identity(email, "", Role::Candidate, now()).is_err(), "accepted {email}");
        }
    }

    #[test]
    fn test_validate_email_shared_pattern() {
        for _ in 0..3 {
            assert_eq!(validate_email("  b@x.com ").unwrap(), "b@x.com");
            assert!(validate_email("b@x@com").is_err());
        }
        assert!(EMAIL_RE.is_match("lan@x.vn"));
        assert!(!EMAIL_RE.is_match("lan @x.vn"));
    }

    #[test]
    fn test_login_mode_submit_is_local() {
        let form = AuthForm {
            email: "a@x.com".into(),
            role: Role::Employer,
            ..Default::default()
        };
        match form.submit(now()).unwrap() {
            Submission::Local(identity) => assert_eq!(identity.role(), Role::Employer),
            other => panic!("expected local submission, got {:?}", other),
        }
    }

    #[test]
    fn test_register_mode_requires_name() {
        let mut form = AuthForm {
            mode: AuthMode::Register,
            email: "a@x.com".into(),
            ..Default::default()
        };
        assert!(form.submit(now()).is_err());

        form.name = "Nguyen Van A".into();
        assert_eq!(
            form.submit(now()).unwrap(),
            Submission::Remote(Registration {
                email: "a@x.com".into(),
                name: "Nguyen Van A".into(),
                role: Role::Candidate,
            })
        );
    }

    #[test]
    fn test_toggle_mode() {
        let mut form = AuthForm::default();
        assert_eq!(form.mode, AuthMode::Login);
        form.toggle_mode();
        assert_eq!(form.mode, AuthMode::Register);
        form.toggle_mode();
        assert_eq!(form.mode, AuthMode::Login);
    }
}
