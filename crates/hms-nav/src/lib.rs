//! # hms-nav
//!
//! The permission-gated sidebar of the hospital access shell.
//!
//! A static [`MenuTree`] is filtered through an
//! [`Authorizer`](hms_core::traits::Authorizer) on every render, and
//! notification links are routed only to pages the current session may open.

pub mod menu;
pub mod shell;

pub use menu::{MenuGroup, MenuItem, MenuTree};
pub use shell::{is_visible, visible_groups, NavigationShell};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::{Arc, RwLock};

    use hms_contracts::{
        error::HmsError,
        notification::NotificationLink,
        role::{Permission, PermissionSet},
    };
    use hms_core::traits::Authorizer;

    use crate::{visible_groups, MenuGroup, MenuTree, NavigationShell};

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// An authorizer over a fixed grant set; `None` behaves as signed out.
    struct Grants(RwLock<Option<PermissionSet>>);

    impl Grants {
        fn signed_out() -> Self {
            Self(RwLock::new(None))
        }

        fn of(names: &[&str]) -> Self {
            Self(RwLock::new(Some(names.iter().map(|n| Permission::new(*n)).collect())))
        }

        fn set(&self, names: Option<&[&str]>) {
            *self.0.write().unwrap() =
                names.map(|ns| ns.iter().map(|n| Permission::new(*n)).collect());
        }
    }

    impl Authorizer for Grants {
        fn has_permission(&self, permission: &Permission) -> bool {
            self.0.read().unwrap().as_ref().is_some_and(|set| set.has(permission))
        }
    }

    const MENU: &str = r#"
        [[groups]]
        id = "main"
        label = "Main"

          [[groups.items]]
          page = "dashboard"
          label = "Dashboard"

          [[groups.items]]
          page = "patients"
          label = "Patients"
          permission = "patient:read"

        [[groups]]
        id = "clinical"
        label = "Clinical"

          [[groups.items]]
          page = "pharmacy"
          label = "Pharmacy"
          permission = "clinical:pharmacy"

          [[groups.items]]
          page = "laboratory"
          label = "Laboratory"
          permission = "clinical:lab"

        [[groups]]
        id = "admin"
        label = "Administration"

          [[groups.items]]
          page = "user-management"
          label = "User Management"
          permission = "admin:users"
    "#;

    const VOCABULARY: [&str; 4] = ["patient:read", "clinical:pharmacy", "clinical:lab", "admin:users"];

    fn tree() -> MenuTree {
        MenuTree::from_toml_str(MENU).unwrap()
    }

    fn pages(groups: &[MenuGroup]) -> Vec<&str> {
        groups.iter().flat_map(|g| g.items.iter().map(|i| i.page.as_str())).collect()
    }

    fn link(page: &str) -> NotificationLink {
        NotificationLink { page: page.to_string(), entity_id: None }
    }

    // ── Filtering ─────────────────────────────────────────────────────────────

    #[test]
    fn test_signed_out_sees_only_open_items() {
        let groups = visible_groups(&tree(), &Grants::signed_out());

        assert_eq!(pages(&groups), vec!["dashboard"]);
        assert_eq!(groups.len(), 1, "groups with nothing visible must be dropped");
    }

    #[test]
    fn test_nurse_sees_patient_pages_only() {
        let groups = visible_groups(&tree(), &Grants::of(&["patient:read", "patient:write"]));

        assert_eq!(pages(&groups), vec!["dashboard", "patients"]);
        assert!(groups.iter().all(|g| g.id != "admin"));
    }

    #[test]
    fn test_partial_group_keeps_order_and_label() {
        let groups = visible_groups(&tree(), &Grants::of(&["clinical:lab"]));

        assert_eq!(pages(&groups), vec!["dashboard", "laboratory"]);
        assert_eq!(groups[1].label, "Clinical");
    }

    #[test]
    fn test_full_grant_sees_everything() {
        let groups = visible_groups(&tree(), &Grants::of(&VOCABULARY));
        assert_eq!(groups, tree().groups);
    }

    /// Adding any single permission to any grant set never hides an item.
    #[test]
    fn test_filtering_is_monotonic_in_permissions() {
        let tree = tree();

        for mask in 0u32..(1 << VOCABULARY.len()) {
            let base: Vec<&str> = VOCABULARY
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, p)| *p)
                .collect();
            let before = visible_groups(&tree, &Grants::of(&base));

            for extra in VOCABULARY {
                let mut widened = base.clone();
                widened.push(extra);
                let after = visible_groups(&tree, &Grants::of(&widened));

                let after_pages = pages(&after);
                for page in pages(&before) {
                    assert!(after_pages.contains(&page), "granting {extra} hid {page}");
                }
            }
        }
    }

    #[test]
    fn test_shell_recomputes_after_session_change() {
        let grants = Arc::new(Grants::of(&["admin:users"]));
        let shell = NavigationShell::new(tree(), grants.clone());
        assert_eq!(pages(&shell.menu()), vec!["dashboard", "user-management"]);

        grants.set(None);
        assert_eq!(pages(&shell.menu()), vec!["dashboard"]);

        grants.set(Some(&["clinical:pharmacy"][..]));
        assert_eq!(pages(&shell.menu()), vec!["dashboard", "pharmacy"]);
    }

    // ── Routing ───────────────────────────────────────────────────────────────

    #[test]
    fn test_route_resolves_visible_page() {
        let shell = NavigationShell::new(tree(), Arc::new(Grants::of(&["clinical:lab"])));

        let item = shell.route(&link("laboratory")).unwrap();
        assert_eq!(item.label, "Laboratory");
        assert!(shell.can_open("laboratory"));
    }

    #[test]
    fn test_route_refuses_hidden_or_unknown_page() {
        let shell = NavigationShell::new(tree(), Arc::new(Grants::of(&["clinical:lab"])));

        assert!(shell.route(&link("pharmacy")).is_none());
        assert!(shell.route(&link("mortuary")).is_none());
        assert!(!shell.can_open("pharmacy"));
    }

    #[test]
    fn test_route_to_open_page_works_signed_out() {
        let shell = NavigationShell::new(tree(), Arc::new(Grants::signed_out()));
        assert!(shell.route(&link("dashboard")).is_some());
    }

    // ── Configuration ─────────────────────────────────────────────────────────

    #[test]
    fn test_tree_lists_referenced_permissions_once() {
        let tree = tree();
        let mut perms: Vec<&str> = tree.permissions().map(|p| p.as_str()).collect();
        perms.sort();
        let mut expected = VOCABULARY.to_vec();
        expected.sort();
        assert_eq!(perms, expected);
    }

    #[test]
    fn test_duplicate_page_rejected() {
        let toml = r#"
            [[groups]]
            id = "a"
            label = "A"
              [[groups.items]]
              page = "billing"
              label = "Billing"

            [[groups]]
            id = "b"
            label = "B"
              [[groups.items]]
              page = "billing"
              label = "Billing again"
        "#;

        match MenuTree::from_toml_str(toml) {
            Err(HmsError::ConfigError { reason }) => {
                assert!(reason.contains("billing"), "unexpected reason: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }
}
