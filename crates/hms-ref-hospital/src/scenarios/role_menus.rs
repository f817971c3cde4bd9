//! Scenario 2: Role menus
//!
//! Renders the sidebar for a signed-out visitor and then for one member of
//! several roles, showing how the same menu tree narrows per role.

use hms_contracts::error::HmsResult;
use hms_nav::MenuGroup;

use crate::hospital::Hospital;

/// (username, password) pairs from the seed roster, one per role shown.
pub const WALKTHROUGH: &[(&str, &str)] = &[
    ("aowusu", "Ward7-Nights"),
    ("eboateng", "Rx-Counter3"),
    ("kappiah", "Ledger$88"),
    ("kasante", "Cardio#19"),
    ("shacomputec", "Admin@2024"),
];

/// Run Scenario 2 against `hospital`.
pub async fn run_scenario(hospital: &Hospital) -> HmsResult<()> {
    println!("=== Scenario 2: Role menus ===");
    println!();

    hospital.session.logout();
    println!("  Signed out:");
    print_menu(&hospital.navigation.menu());

    for (username, password) in WALKTHROUGH {
        let identity = hospital.session.login(username, password).await?;
        println!("  {} ({}):", identity.name, identity.role);
        print_menu(&hospital.navigation.menu());
    }

    hospital.session.logout();
    println!("  Scenario 2 complete.");
    println!();

    Ok(())
}

/// Print a filtered menu, one group per line.
pub fn print_menu(groups: &[MenuGroup]) {
    for group in groups {
        let labels: Vec<&str> = group.items.iter().map(|i| i.label.as_str()).collect();
        println!("    {:<15} {}", group.label, labels.join(", "));
    }
    println!();
}
