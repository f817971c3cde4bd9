//! Reference Hospital Access Shell — Demo CLI
//!
//! Bootstraps the reference hospital and runs its walkthroughs, or signs in a
//! single staff member to show their menu, permissions and inbox.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- sign-in
//!   cargo run -p demo -- role-menus
//!   cargo run -p demo -- inbox
//!   cargo run -p demo -- login --username aowusu --password Ward7-Nights
//!   cargo run -p demo -- menu
//!   cargo run -p demo -- audit --username kappiah --password 'Ledger$88'

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use hms_contracts::{
    error::{HmsError, HmsResult},
    settings::SessionSettings,
};
use hms_core::traits::Authorizer;
use hms_ref_hospital::{
    scenarios::{inbox, role_menus, sign_in},
    Fixtures, Hospital,
};

// ── CLI definition ────────────────────────────────────────────────────────────

/// Reference hospital access shell demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "Reference hospital access shell demo",
    long_about = "Runs the reference hospital walkthroughs: sign-in and access logging,\n\
                  role-filtered menus, and per-user notification inboxes."
)]
struct Cli {
    /// Directory holding roles.toml, staff.toml, menu.toml, notifications.toml
    /// and hospital.toml. Defaults to the embedded fixtures.
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Override the simulated login latency, in milliseconds.
    #[arg(long, global = true)]
    latency_ms: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all three walkthroughs in sequence.
    RunAll,
    /// Scenario 1: rejected and accepted sign-in, logout, access log.
    SignIn,
    /// Scenario 2: the sidebar menu for several roles.
    RoleMenus,
    /// Scenario 3: notification inbox scoping, read state and routing.
    Inbox,
    /// Sign in one staff member and show their permissions and inbox.
    Login(Credentials),
    /// Show the sidebar menu, signed out or for one staff member.
    Menu(OptionalCredentials),
    /// Sign in and out, then print the exported access log as JSON.
    Audit(Credentials),
}

#[derive(Args)]
struct Credentials {
    #[arg(long)]
    username: String,
    #[arg(long)]
    password: String,
}

#[derive(Args)]
struct OptionalCredentials {
    #[arg(long, requires = "password")]
    username: Option<String>,
    #[arg(long, requires = "username")]
    password: Option<String>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let hospital = match bootstrap(&cli) {
        Ok(hospital) => hospital,
        Err(e) => {
            eprintln!("Bootstrap error: {}", e);
            std::process::exit(2);
        }
    };

    print_banner();

    let result = match cli.command {
        Command::RunAll => run_all(&hospital).await,
        Command::SignIn => sign_in::run_scenario(&hospital).await,
        Command::RoleMenus => role_menus::run_scenario(&hospital).await,
        Command::Inbox => inbox::run_scenario(&hospital).await,
        Command::Login(creds) => show_login(&hospital, &creds).await,
        Command::Menu(creds) => show_menu(&hospital, &creds).await,
        Command::Audit(creds) => export_audit(&hospital, &creds).await,
    };

    match result {
        Ok(()) => {
            println!("Done.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

fn bootstrap(cli: &Cli) -> HmsResult<Hospital> {
    let fixtures = match &cli.config_dir {
        Some(dir) => {
            debug!(dir = %dir.display(), "loading fixtures from disk");
            Fixtures::from_dir(dir)?
        }
        None => Fixtures::embedded(),
    };

    let mut settings = fixtures.parse_settings()?;
    if let Some(ms) = cli.latency_ms {
        settings.session = SessionSettings { login_latency_ms: ms };
    }
    Hospital::build(&fixtures, settings)
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

async fn run_all(hospital: &Hospital) -> HmsResult<()> {
    sign_in::run_scenario(hospital).await?;
    role_menus::run_scenario(hospital).await?;
    inbox::run_scenario(hospital).await?;
    Ok(())
}

async fn show_login(hospital: &Hospital, creds: &Credentials) -> HmsResult<()> {
    let identity = hospital.session.login(&creds.username, &creds.password).await?;

    println!("Signed in: {} ({}, {})", identity.name, identity.id, identity.role);
    println!("Status:    {:?}", identity.status);
    if let Some(department) = &identity.contact.department {
        println!("Department: {}", department);
    }
    println!();

    println!("Permissions:");
    for permission in hospital.roles.vocabulary() {
        let mark = if hospital.gate.has_permission(permission) { "x" } else { " " };
        println!("  [{}] {}", mark, permission);
    }
    println!();

    let inbox = hospital.notifications.list();
    println!(
        "Inbox: {} notification(s), {} unread",
        inbox.len(),
        hospital.notifications.unread_count()
    );
    for n in &inbox {
        println!(
            "  {} {} {}",
            if n.read { " " } else { "*" },
            n.timestamp.format("%Y-%m-%d %H:%M"),
            n.message
        );
    }
    println!();

    hospital.session.logout();
    Ok(())
}

async fn show_menu(hospital: &Hospital, creds: &OptionalCredentials) -> HmsResult<()> {
    match (&creds.username, &creds.password) {
        (Some(username), Some(password)) => {
            let identity = hospital.session.login(username, password).await?;
            println!("Menu for {} ({}):", identity.name, identity.role);
        }
        _ => println!("Menu while signed out:"),
    }
    role_menus::print_menu(&hospital.navigation.menu());
    hospital.session.logout();
    Ok(())
}

async fn export_audit(hospital: &Hospital, creds: &Credentials) -> HmsResult<()> {
    hospital.session.login(&creds.username, &creds.password).await?;
    hospital.session.logout();

    let log = hospital.access_log.export_log();
    let json = serde_json::to_string_pretty(&log).map_err(|e| HmsError::AuditWriteFailed {
        reason: format!("failed to serialize access log: {}", e),
    })?;
    println!("{}", json);
    println!();
    println!(
        "Integrity: {}",
        if hms_audit::verify_chain(&log.entries) { "VERIFIED" } else { "FAILED" }
    );
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("Reference Hospital — Access Shell");
    println!("=================================");
    println!();
    println!("Per request:");
    println!("  [1] Session: one signed-in identity at a time, shared by every reader");
    println!("  [2] Gate: permission held iff the signed-in role grants it");
    println!("  [3] Menu: items without a permission always shown, others gated");
    println!("  [4] Inbox: scoped to the signed-in user (administrators share one bucket)");
    println!("  [5] Every login, failed login and logout is appended to a SHA-256 chain");
    println!();
}
