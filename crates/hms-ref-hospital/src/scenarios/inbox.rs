//! Scenario 3: Notification inbox
//!
//! Sub-case A — a nurse reads their inbox, follows links, and clears the badge.
//!              Links to pages the nurse role cannot open do not route.
//! Sub-case B — a lab result arrives while the nurse is signed in.
//! Sub-case C — a second administrator signs in and is shown the fixed
//!              administrator bucket rather than their own notifications.

use chrono::Utc;

use hms_contracts::{
    error::HmsResult,
    identity::StaffId,
    notification::{NewNotification, Notification, NotificationKind, NotificationLink},
};

use crate::hospital::Hospital;

/// Run Scenario 3 against `hospital`.
pub async fn run_scenario(hospital: &Hospital) -> HmsResult<()> {
    println!("=== Scenario 3: Notification inbox ===");
    println!();

    // ── A: read and clear ─────────────────────────────────────────────────────

    let nurse = hospital.session.login("aowusu", "Ward7-Nights").await?;
    println!("  Sub-case A: {} ({})", nurse.name, nurse.id);
    println!("  Unread: {}", hospital.notifications.unread_count());
    print_inbox(hospital, &hospital.notifications.list());

    if let Some(first) = hospital.notifications.list().into_iter().find(|n| !n.read) {
        hospital.notifications.mark_as_read(&first.id);
        println!("  Opened {}; unread now {}", first.id, hospital.notifications.unread_count());
    }
    let cleared = hospital.notifications.mark_all_as_read();
    println!(
        "  Mark all as read: {} flipped, unread now {}",
        cleared,
        hospital.notifications.unread_count()
    );
    println!();

    // ── B: new arrival ────────────────────────────────────────────────────────

    let id = hospital.notifications.add(NewNotification {
        kind: NotificationKind::Lab,
        message: "Urinalysis ready for patient P-1042".to_string(),
        timestamp: Utc::now(),
        link: Some(NotificationLink {
            page: "patients".to_string(),
            entity_id: Some("P-1042".to_string()),
        }),
        user_id: StaffId::new("S007"),
    });
    println!("  Sub-case B: {} arrives", id);
    println!("  Unread: {}", hospital.notifications.unread_count());
    print_inbox(hospital, &hospital.notifications.list()[..1]);
    hospital.session.logout();

    // ── C: administrator bucket ───────────────────────────────────────────────

    let admin = hospital.session.login("kmensah", "Ops!2024").await?;
    let scope = hospital.notifications.scope();
    println!("  Sub-case C: {} ({}, {})", admin.name, admin.id, admin.role);
    println!(
        "  Viewing bucket: {}",
        scope.as_ref().map(|s| s.0.as_str()).unwrap_or("-")
    );
    if scope.as_ref() != Some(&admin.id) {
        println!("  NOTE: administrator notifications are redirected to a shared bucket");
    }
    print_inbox(hospital, &hospital.notifications.list());
    hospital.session.logout();

    println!("  Scenario 3 complete.");
    println!();

    Ok(())
}

fn print_inbox(hospital: &Hospital, inbox: &[Notification]) {
    for n in inbox {
        let route = match &n.link {
            Some(link) => match hospital.navigation.route(link) {
                Some(item) => format!("-> {}", item.label),
                None => format!("-> {} (no access)", link.page),
            },
            None => String::new(),
        };
        println!(
            "    {} {} {:<11} {} {}",
            if n.read { " " } else { "*" },
            n.timestamp.format("%Y-%m-%d %H:%M"),
            format!("{:?}", n.kind),
            n.message,
            route
        );
    }
    println!();
}
