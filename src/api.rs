use anyhow::{Context, Result, anyhow};
use reqwest::Url;
use serde_json::Value;
use std::time::Duration;

use crate::models::{Identity, JobListing, RecommendationDomain, Registration};

// --- Client trait ---

/// The backend calls the client depends on.
pub trait CareerApi: Send + Sync {
    fn register(&self, registration: &Registration) -> Result<Identity>;
    fn list_jobs(&self) -> Result<Vec<JobListing>>;
    fn recommendations(&self, domain: RecommendationDomain, identity_id: &str) -> Result<String>;
}

// --- HTTP client ---

#[derive(Debug)]
pub struct ApiClient {
    base_url: Url,
    client: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self> {
        // reqwest's blocking client has a 30s default; no timeout unless configured
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, segments: &[&str]) -> Result<Url> {
        api_url(&self.base_url, segments)
    }

    fn check(response: reqwest::blocking::Response, what: &str) -> Result<reqwest::blocking::Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let error_text = response.text().unwrap_or_default();
        Err(anyhow!("{} failed with status {}: {}", what, status, error_text))
    }
}

impl CareerApi for ApiClient {
    fn register(&self, registration: &Registration) -> Result<Identity> {
        let response = self
            .client
            .post(self.url(&["register"])?)
            .json(registration)
            .send()
            .context("Failed to send registration request")?;
        let body = Self::check(response, "Registration")?
            .text()
            .context("Failed to read registration response")?;
        parse_identity(&body)
    }

    fn list_jobs(&self) -> Result<Vec<JobListing>> {
        let response = self
            .client
            .get(self.url(&["jobs"])?)
            .send()
            .context("Failed to send job listing request")?;
        let body = Self::check(response, "Job listing")?
            .text()
            .context("Failed to read job listing response")?;
        parse_listings(&body)
    }

    fn recommendations(&self, domain: RecommendationDomain, identity_id: &str) -> Result<String> {
        let url = self.url(&recommendation_segments(domain, identity_id))?;
        let response = self
            .client
            .post(url)
            .send()
            .with_context(|| format!("Failed to send {} recommendation request", domain))?;
        let body = Self::check(response, "Recommendation request")?
            .text()
            .context("Failed to read recommendation response")?;
        parse_recommendation(domain, &body)
    }
}

// --- Wire helpers ---

/// Appends `api/<segments>` to the base path. Segments are percent-encoded, so an
/// identity id containing `/` stays one segment.
pub fn api_url(base_url: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| anyhow!("Backend URL cannot take a path: {}", base_url))?
        .pop_if_empty()
        .push("api")
        .extend(segments);
    Ok(url)
}

pub fn recommendation_segments(domain: RecommendationDomain, identity_id: &str) -> [&str; 3] {
    ["ai", domain.endpoint(), identity_id]
}

pub fn parse_identity(body: &str) -> Result<Identity> {
    let identity: Identity = serde_json::from_str(body).context("Failed to parse registration response")?;
    if !identity.is_well_formed() {
        return Err(anyhow!("Registration response is missing identity fields"));
    }
    Ok(identity)
}

pub fn parse_listings(body: &str) -> Result<Vec<JobListing>> {
    serde_json::from_str(body).context("Failed to parse job listing response")
}

/// Pulls the payload out of `{recommendations: ...}` / `{courses: ...}` without interpreting it.
pub fn parse_recommendation(domain: RecommendationDomain, body: &str) -> Result<String> {
    let value: Value = serde_json::from_str(body).context("Failed to parse recommendation response")?;
    let field = domain.response_field();
    match value.get(field) {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(Value::Null) | None => Err(anyhow!("Recommendation response has no '{}' field", field)),
        Some(other) => Ok(other.to_string()),
    }
}
