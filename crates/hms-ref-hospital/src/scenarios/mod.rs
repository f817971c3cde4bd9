//! Reference hospital walkthroughs.
//!
//! Each scenario drives one bootstrapped [`Hospital`](crate::hospital::Hospital)
//! through a distinct slice of the access shell and prints what a user of the
//! sidebar would see. Scenarios leave the session signed out when they finish.

pub mod inbox;
pub mod role_menus;
pub mod sign_in;

// ── Tests ─────────────────────────────────────────────────────────────────────
