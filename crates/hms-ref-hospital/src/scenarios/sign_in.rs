//! Scenario 1: Sign-in
//!
//! Walks the session through its two states:
//!
//!   A — wrong password        → InvalidCredentials, still signed out
//!   B — mixed-case username   → signed in (usernames ignore case)
//!   C — logout, twice         → signed out, second call is a no-op
//!
//! Then checks that the access log recorded exactly three events and that
//! its hash chain verifies.

use hms_contracts::{
    access::AccessEvent,
    error::{HmsError, HmsResult},
};

use crate::hospital::Hospital;

pub const ADMIN_USERNAME: &str = "shacomputec";
pub const ADMIN_PASSWORD: &str = "Admin@2024";

/// Run Scenario 1 against `hospital`.
pub async fn run_scenario(hospital: &Hospital) -> HmsResult<()> {
    println!("=== Scenario 1: Sign-in ===");
    println!();

    // ── A: wrong password ─────────────────────────────────────────────────────

    println!("  A: {} / <wrong password>", ADMIN_USERNAME);
    match hospital.session.login(ADMIN_USERNAME, "admin2024").await {
        Err(HmsError::InvalidCredentials) => {
            println!("     Rejected:        {}", HmsError::InvalidCredentials);
        }
        Err(e) => return Err(e),
        Ok(identity) => {
            println!("     UNEXPECTED: signed in as {}", identity.name);
        }
    }
    println!("     Session:         {}", describe(hospital));
    println!();

    // ── B: mixed-case username ────────────────────────────────────────────────

    let mixed_case = ADMIN_USERNAME.to_uppercase();
    println!("  B: {} / <seeded password>", mixed_case);
    let identity = hospital.session.login(&mixed_case, ADMIN_PASSWORD).await?;
    println!("     Signed in:       {} ({}, role {})", identity.name, identity.id, identity.role);
    println!("     Permissions:     {}", hospital.gate.permissions().len());
    println!();

    // ── C: logout twice ───────────────────────────────────────────────────────

    println!("  C: logout, then logout again");
    hospital.session.logout();
    hospital.session.logout();
    println!("     Session:         {}", describe(hospital));
    println!();

    // ── Access log ────────────────────────────────────────────────────────────

    let log = hospital.access_log.export_log();
    for entry in &log.entries {
        let line = match &entry.record.event {
            AccessEvent::LoginFailed { username } => format!("login failed for '{}'", username),
            AccessEvent::LoginSucceeded { staff_id, role } => {
                format!("login {} as {}", staff_id, role)
            }
            AccessEvent::Logout { staff_id } => format!("logout {}", staff_id),
        };
        println!("  [{}] {}", entry.sequence, line);
    }
    println!(
        "  Access log integrity:  {} ({} event(s) in chain)",
        if hospital.access_log.verify_integrity() { "VERIFIED" } else { "FAILED" },
        log.entries.len()
    );
    println!();
    println!("  Scenario 1 complete.");
    println!();

    Ok(())
}

fn describe(hospital: &Hospital) -> String {
    match hospital.session.current() {
        Some(identity) => format!("signed in as {}", identity.id),
        None => "signed out".to_string(),
    }
}
