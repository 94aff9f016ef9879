/// Aggregate counters on the employer dashboard. Static until a per-employer feed exists.
pub const EMPLOYER_COUNTERS: [(&str, &str); 3] = [
    ("Job posts", "12"),
    ("Candidates", "48"),
    ("AI matches", "15"),
];

/// Employer affordances. Placeholders only: none of them fetch anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployerAction {
    PostJob,
    FindCandidates,
}

impl EmployerAction {
    pub const ALL: [EmployerAction; 2] = [EmployerAction::PostJob, EmployerAction::FindCandidates];

    pub fn title(&self) -> &'static str {
        match self {
            Self::PostJob => "Post a job",
            Self::FindCandidates => "AI find candidates",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::PostJob => "Create a new job posting",
            Self::FindCandidates => "Suggest the best-matching candidates",
        }
    }
}
