mod api;
mod app;
mod auth;
mod config;
mod dashboard;
mod dispatch;
mod employer;
mod models;
mod router;
mod session;
mod store;
mod tui;

use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, mpsc};
use tracing::info;
use tracing_subscriber::EnvFilter;

use api::{ApiClient, CareerApi};
use app::{App, AppOptions};
use auth::{AuthForm, AuthMode, Submission};
use config::{Config, DEFAULT_BACKEND_URL};
use dispatch::Dispatcher;
use models::{RecommendationDomain, Role};
use router::{View, route};
use session::SessionStore;
use store::Database;

#[derive(Parser)]
#[command(name = "bridge")]
#[command(about = "Job board client - sign in, browse jobs, and get AI job and course picks")]
struct Cli {
    /// Backend base address (the API lives under /api)
    #[arg(long, global = true, env = "BRIDGE_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    backend_url: String,

    /// Directory for the session store and log file
    #[arg(long, global = true, env = "BRIDGE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long, global = true, env = "BRIDGE_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Apply every recommendation response in arrival order, even superseded ones
    #[arg(long, global = true, env = "BRIDGE_NO_FENCE")]
    no_fence: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboard (default)
    Ui,

    /// Sign in locally (no credential check)
    Login {
        /// Email address
        email: String,

        /// Display name (defaults to the part of the email before '@')
        #[arg(short, long)]
        name: Option<String>,

        /// Role (candidate, employer)
        #[arg(short, long, default_value = "candidate")]
        role: String,
    },

    /// Create an account on the backend and sign in
    Register {
        /// Email address
        email: String,

        /// Full name
        #[arg(short, long)]
        name: String,

        /// Role (candidate, employer)
        #[arg(short, long, default_value = "candidate")]
        role: String,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Show the signed-in identity
    Whoami,

    /// List current job postings
    Jobs,

    /// Ask the AI for job or course recommendations
    Recommend {
        /// What to recommend (jobs, courses)
        domain: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // load .env if present; ignore if missing

    let cli = Cli::parse();
    let config = Config::new(&cli.backend_url, cli.data_dir.clone(), cli.timeout_secs, cli.no_fence)?;
    init_logging(&config)?;
    info!("Starting bridge v{} against {}", env!("CARGO_PKG_VERSION"), config.backend_url);

    let db = Database::open(&config.database_path())?;

    match cli.command.unwrap_or(Commands::Ui) {
        Commands::Ui => {
            let api = ApiClient::new(config.backend_url.clone(), config.request_timeout)?;
            let options = AppOptions {
                fence_recommendations: config.fence_recommendations,
            };
            let (mut app, initial) = App::start(db, options);
            let (tx, rx) = mpsc::channel();
            let dispatcher = Dispatcher::new(Arc::new(api), tx);
            tui::run_ui(&mut app, initial, &dispatcher, &rx)?;
        }

        Commands::Login { email, name, role } => {
            let mut store = SessionStore::load(db);
            ensure_signed_out(&store)?;
            let identity = auth::synthesize_identity(&email, name.as_deref().unwrap_or(""), parse_role(&role)?, Utc::now())?;
            store.login(identity)?;
            print_identity(&store);
        }

        Commands::Register { email, name, role } => {
            let mut store = SessionStore::load(db);
            ensure_signed_out(&store)?;
            let form = AuthForm {
                mode: AuthMode::Register,
                email,
                name,
                role: parse_role(&role)?,
            };
            let Submission::Remote(registration) = form.submit(Utc::now())? else {
                return Err(anyhow!("Registration form did not produce a registration request"));
            };
            let api = ApiClient::new(config.backend_url.clone(), config.request_timeout)?;
            println!("Registering {} with {}...", registration.email, api.base_url());
            let identity = api.register(&registration)?;
            store.login(identity)?;
            print_identity(&store);
        }

        Commands::Logout => {
            let mut store = SessionStore::load(db);
            let previous = store.identity().map(|i| i.email.clone());
            store.logout()?;
            match previous {
                Some(email) => println!("Signed out {}.", email),
                None => println!("Not signed in."),
            }
        }

        Commands::Whoami => {
            let store = SessionStore::load(db);
            print_identity(&store);
            println!("Session store: {}", store.storage().path().display());
        }

        Commands::Jobs => {
            let api = ApiClient::new(config.backend_url.clone(), config.request_timeout)?;
            let jobs = api.list_jobs()?;
            if jobs.is_empty() {
                println!("No jobs found.");
            } else {
                println!("{:<30} {:<20} {:>16}  {:<30}", "TITLE", "LOCATION", "PAY", "REQUIREMENTS");
                println!("{}", "-".repeat(100));
                for job in jobs {
                    println!(
                        "{:<30} {:<20} {:>16}  {:<30}",
                        truncate(&job.title, 28),
                        truncate(job.location(), 18),
                        job.pay_range().unwrap_or_else(|| "-".to_string()),
                        truncate(&job.requirements().join(", "), 30)
                    );
                }
            }
        }

        Commands::Recommend { domain } => {
            let domain = RecommendationDomain::from_str(&domain)
                .ok_or_else(|| anyhow!("Unknown recommendation type '{}'. Available: jobs, courses", domain))?;
            let store = SessionStore::load(db);
            let identity = store
                .identity()
                .ok_or_else(|| anyhow!("Not signed in. Run 'bridge login <email>' first."))?;
            if route(Some(identity)) != View::CandidateDashboard {
                return Err(anyhow!("Recommendations are only available to candidate accounts"));
            }

            let api = ApiClient::new(config.backend_url.clone(), config.request_timeout)?;
            println!("Asking the AI for {} recommendations...", domain);
            let text = api.recommendations(domain, &identity.id)?;
            println!("\n{}", text);
        }
    }

    Ok(())
}

fn init_logging(config: &Config) -> Result<()> {
    let log_path = config.log_path();
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    // The terminal belongs to the UI, so logs go to a file
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_PKG_NAME")))),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn parse_role(role: &str) -> Result<Role> {
    Role::from_str(role).ok_or_else(|| anyhow!("Unknown role '{}'. Available: candidate, employer", role))
}

fn ensure_signed_out(store: &SessionStore<Database>) -> Result<()> {
    match store.identity() {
        Some(identity) => Err(anyhow!(
            "Already signed in as {}. Run 'bridge logout' first.",
            identity.email
        )),
        None => Ok(()),
    }
}

fn print_identity(store: &SessionStore<Database>) {
    let Some(identity) = store.identity() else {
        println!("Not signed in.");
        return;
    };
    println!("Signed in as {} <{}>", identity.name, identity.email);
    println!("Role: {}", identity.role());
    println!("ID: {}", identity.id);
    let view = match route(Some(identity)) {
        View::CandidateDashboard => "candidate dashboard",
        View::EmployerDashboard => "employer dashboard",
        View::Anonymous => "sign-in",
    };
    println!("Opens: {}", view);
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Senior Rust engineer", 10), "Senior ...");
        assert_eq!(truncate("Kỹ sư phần mềm", 14), "Kỹ sư phần mềm");
    }

    #[test]
    fn test_parse_role() {
        assert_eq!(parse_role("employer").unwrap(), Role::Employer);
        assert!(parse_role("recruiter").is_err());
    }

    #[test]
    fn test_cli_parses_global_options() {
        let cli = Cli::try_parse_from([
            "bridge",
            "login",
            "a@x.com",
            "--role",
            "employer",
            "--backend-url",
            "http://api.test",
            "--no-fence",
        ])
        .unwrap();
        assert_eq!(cli.backend_url, "http://api.test");
        assert!(cli.no_fence);
        match cli.command {
            Some(Commands::Login { email, name, role }) => {
                assert_eq!(email, "a@x.com");
                assert_eq!(name, None);
                assert_eq!(role, "employer");
            }
            _ => panic!("expected login command"),
        }
    }
}
