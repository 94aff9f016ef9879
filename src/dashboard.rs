use anyhow::Result;
use tracing::{debug, warn};

use crate::models::{Identity, JobListing, Recommendation, RecommendationDomain};

/// Listings shown on the listings tab.
pub const LISTING_PREVIEW_LIMIT: usize = 5;
/// Requirement tags shown per listing.
pub const REQUIREMENT_PREVIEW_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Listings,
    AiJobs,
    AiCourses,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Listings, Tab::AiJobs, Tab::AiCourses];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Listings => "Jobs",
            Self::AiJobs => "AI job picks",
            Self::AiCourses => "AI courses",
        }
    }

    /// Recommendation domain the tab's action requests, if any.
    pub fn domain(&self) -> Option<RecommendationDomain> {
        match self {
            Self::AiJobs => Some(RecommendationDomain::Jobs),
            Self::AiCourses => Some(RecommendationDomain::Courses),
            Self::Overview | Self::Listings => None,
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Identifies one recommendation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub mount: u64,
    pub seq: u64,
    pub domain: RecommendationDomain,
}

/// Candidate dashboard state for one mount.
#[derive(Debug)]
pub struct Dashboard {
    mount: u64,
    tab: Tab,
    listings: Vec<JobListing>,
    listings_loaded: bool,
    recommendation: Option<Recommendation>,
    issued: u64,
    awaiting: Option<Ticket>,
    fenced: bool,
}

impl Dashboard {
    /// A fresh dashboard. The caller owes it exactly one listing fetch for `mount`.
    pub fn mount(mount: u64, fenced: bool) -> Self {
        debug!(mount, "Dashboard mounted");
        Self {
            mount,
            tab: Tab::default(),
            listings: Vec::new(),
            listings_loaded: false,
            recommendation: None,
            issued: 0,
            awaiting: None,
            fenced,
        }
    }

    pub fn mount_id(&self) -> u64 {
        self.mount
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn select(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn listings(&self) -> &[JobListing] {
        &self.listings
    }

    pub fn listing_count(&self) -> usize {
        self.listings.len()
    }

    pub fn listings_loaded(&self) -> bool {
        self.listings_loaded
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        self.recommendation.as_ref()
    }

    /// Domain of the newest request still outstanding.
    pub fn loading(&self) -> Option<RecommendationDomain> {
        self.awaiting.map(|t| t.domain)
    }

    /// Issues a ticket for the active tab's domain. Non-AI tabs issue nothing.
    pub fn request_recommendations(&mut self, identity: &Identity) -> Option<Ticket> {
        let domain = self.tab.domain()?;
        self.issued += 1;
        let ticket = Ticket {
            mount: self.mount,
            seq: self.issued,
            domain,
        };
        debug!(seq = ticket.seq, %domain, "Requesting recommendations for {}", identity.id);
        self.awaiting = Some(ticket);
        Some(ticket)
    }

    /// Failure degrades to an empty collection.
    pub fn apply_listings(&mut self, result: Result<Vec<JobListing>>) {
        self.listings = match result {
            Ok(listings) => listings,
            Err(e) => {
                warn!("Job listing fetch failed: {:#}", e);
                Vec::new()
            }
        };
        self.listings_loaded = true;
    }

    /// Returns whether the slot changed. Failures leave the slot as it was.
    pub fn apply_recommendation(&mut self, ticket: Ticket, result: Result<String>) -> bool {
        let latest = ticket.seq == self.issued;
        if latest {
            self.awaiting = None;
        }

        if self.fenced && !latest {
            debug!(seq = ticket.seq, latest = self.issued, "Dropping superseded recommendation response");
            return false;
        }

        match result {
            Ok(payload) => {
                self.recommendation = Some(Recommendation {
                    domain: ticket.domain,
                    payload,
                });
                true
            }
            Err(e) => {
                warn!(domain = %ticket.domain, "Recommendation request failed: {:#}", e);
                false
            }
        }
    }
}
