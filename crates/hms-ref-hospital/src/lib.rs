//! # hms-ref-hospital
//!
//! Reference hospital for the access shell: a fictional roster, role table,
//! sidebar menu and notification seed, plus the wiring that turns them into a
//! working session, authorization gate, inbox and navigation shell.
//!
//! Three walkthroughs live under [`scenarios`]:
//!
//! 1. **Sign-in** — rejected and accepted logins, idempotent logout, and the
//!    hash-chained access log they leave behind.
//! 2. **Role menus** — the same sidebar rendered for several roles.
//! 3. **Notification inbox** — per-user scoping, read state, link routing and
//!    the shared administrator bucket.
//!
//! All data is fictional.

pub mod fixtures;
pub mod hospital;
pub mod scenarios;

pub use fixtures::Fixtures;
pub use hospital::Hospital;
