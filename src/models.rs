use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Candidate,
    Employer,
}

impl Role {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "candidate" => Some(Self::Candidate),
            "employer" => Some(Self::Employer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Candidate => "candidate",
            Self::Employer => "employer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Candidate => "Candidate",
            Self::Employer => "Employer",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Candidate => Self::Employer,
            Self::Employer => Self::Candidate,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in actor. Role is fixed at construction; there is no setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub name: String,
    role: Role,
}

impl Identity {
    pub fn new(id: String, email: String, name: String, role: Role) -> Self {
        Self { id, email, name, role }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Required string fields must be non-blank.
    pub fn is_well_formed(&self) -> bool {
        !self.id.trim().is_empty() && !self.email.trim().is_empty() && !self.name.trim().is_empty()
    }
}

/// Body of `POST /api/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// Only the title is required. Other fields may be absent or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub title: String,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    requirements: Option<Vec<String>>,
    #[serde(default)]
    pub salary_min: Option<i64>,
    #[serde(default)]
    pub salary_max: Option<i64>,
}

impl JobListing {
    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn requirements(&self) -> &[String] {
        self.requirements.as_deref().unwrap_or_default()
    }

    pub fn pay_range(&self) -> Option<String> {
        match (self.salary_min, self.salary_max) {
            (Some(min), Some(max)) => Some(format!("{} - {}", min, max)),
            (Some(min), None) => Some(format!("{}+", min)),
            (None, Some(max)) => Some(format!("up to {}", max)),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationDomain {
    Jobs,
    Courses,
}

impl RecommendationDomain {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "jobs" | "job" => Some(Self::Jobs),
            "courses" | "course" => Some(Self::Courses),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jobs => "jobs",
            Self::Courses => "courses",
        }
    }

    /// Path segment under `/api/ai/`.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Jobs => "job-recommendations",
            Self::Courses => "course-recommendations",
        }
    }

    /// Field of the response object that carries the payload.
    pub fn response_field(&self) -> &'static str {
        match self {
            Self::Jobs => "recommendations",
            Self::Courses => "courses",
        }
    }
}

impl fmt::Display for RecommendationDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque AI output, tagged with the domain that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub domain: RecommendationDomain,
    pub payload: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        let identity = Identity::new("1".into(), "a@x.com".into(), "a".into(), Role::Employer);
        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(json["role"], "employer");
        assert_eq!(json.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!(Role::from_str("Candidate"), Some(Role::Candidate));
        assert_eq!(Role::from_str(" employer "), Some(Role::Employer));
        assert_eq!(Role::from_str("admin"), None);
    }

    #[test]
    fn test_identity_requires_role() {
        let result: Result<Identity, _> =
            serde_json::from_str(r#"{"id":"1","email":"a@x.com","name":"a"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_identity_ignores_extra_fields() {
        let identity: Identity = serde_json::from_str(
            r#"{"id":"u-1","email":"a@x.com","name":"A","role":"candidate","avatar":null,"created_at":"2025-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(identity.role(), Role::Candidate);
        assert!(identity.is_well_formed());
    }

    #[test]
    fn test_identity_blank_fields_not_well_formed() {
        let identity = Identity::new(" ".into(), "a@x.com".into(), "a".into(), Role::Candidate);
        assert!(!identity.is_well_formed());
    }

    #[test]
    fn test_listing_requirements_absent_or_null() {
        let listing: JobListing =
            serde_json::from_str(r#"{"title":"Rust dev","location":"Hanoi","description":"d"}"#).unwrap();
        assert!(listing.requirements().is_empty());

        let listing: JobListing = serde_json::from_str(
            r#"{"title":"Rust dev","location":"Hanoi","description":"d","requirements":null}"#,
        )
        .unwrap();
        assert!(listing.requirements().is_empty());

        let listing: JobListing = serde_json::from_str(
            r#"{"title":"Rust dev","requirements":["Rust","SQL"],"company_id":"c1","is_active":true}"#,
        )
        .unwrap();
        assert_eq!(listing.requirements(), ["Rust".to_string(), "SQL".to_string()]);
    }

    #[test]
    fn test_listing_null_text_fields_read_as_empty() {
        let listing: JobListing =
            serde_json::from_str(r#"{"title":"Rust dev","location":null,"description":null}"#).unwrap();
        assert_eq!(listing.location(), "");
        assert_eq!(listing.description(), "");

        let listing: JobListing = serde_json::from_str(r#"{"title":"Rust dev","location":"Hanoi"}"#).unwrap();
        assert_eq!(listing.location(), "Hanoi");
    }

    #[test]
    fn test_pay_range_formats() {
        let mut listing: JobListing = serde_json::from_str(r#"{"title":"t"}"#).unwrap();
        assert_eq!(listing.pay_range(), None);
        listing.salary_min = Some(1000);
        assert_eq!(listing.pay_range().as_deref(), Some("1000+"));
        listing.salary_max = Some(2000);
        assert_eq!(listing.pay_range().as_deref(), Some("1000 - 2000"));
        listing.salary_min = None;
        assert_eq!(listing.pay_range().as_deref(), Some("up to 2000"));
    }

    #[test]
    fn test_domain_endpoints() {
        assert_eq!(RecommendationDomain::Jobs.endpoint(), "job-recommendations");
        assert_eq!(RecommendationDomain::Courses.endpoint(), "course-recommendations");
        assert_eq!(RecommendationDomain::Jobs.response_field(), "recommendations");
        assert_eq!(RecommendationDomain::Courses.response_field(), "courses");
        assert_eq!(RecommendationDomain::from_str("course"), Some(RecommendationDomain::Courses));
    }
}
