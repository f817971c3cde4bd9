//! The navigation shell: filters the menu through the authorization gate.
//!
//! Filtering rules:
//!
//! 1. An item is visible iff it has no permission, or the authorizer grants it.
//! 2. A group with no visible items is dropped.
//!
//! Nothing is cached. Every call re-reads the authorizer, so the menu shown
//! after a login or logout is computed for the new session.

use std::sync::Arc;

use tracing::debug;

use hms_contracts::notification::NotificationLink;
use hms_core::traits::Authorizer;

use crate::menu::{MenuGroup, MenuItem, MenuTree};

/// Return true if `item` is visible to `auth`.
pub fn is_visible(item: &MenuItem, auth: &dyn Authorizer) -> bool {
    match &item.permission {
        None => true,
        Some(permission) => auth.has_permission(permission),
    }
}

/// The visible subset of `tree`, preserving group and item order.
pub fn visible_groups(tree: &MenuTree, auth: &dyn Authorizer) -> Vec<MenuGroup> {
    tree.groups
        .iter()
        .filter_map(|group| {
            let items: Vec<MenuItem> = group
                .items
                .iter()
                .filter(|item| is_visible(item, auth))
                .cloned()
                .collect();

            (!items.is_empty()).then(|| MenuGroup {
                id: group.id.clone(),
                label: group.label.clone(),
                items,
            })
        })
        .collect()
}

/// The sidebar plus the authorizer it is filtered through.
pub struct NavigationShell {
    tree: MenuTree,
    auth: Arc<dyn Authorizer>,
}

impl NavigationShell {
    pub fn new(tree: MenuTree, auth: Arc<dyn Authorizer>) -> Self {
        Self { tree, auth }
    }

    /// The menu as the current session should see it.
    pub fn menu(&self) -> Vec<MenuGroup> {
        let groups = visible_groups(&self.tree, self.auth.as_ref());
        debug!(
            groups = groups.len(),
            items = groups.iter().map(|g| g.items.len()).sum::<usize>(),
            "menu filtered"
        );
        groups
    }

    /// Return true if `page` exists and is visible to the current session.
    pub fn can_open(&self, page: &str) -> bool {
        self.tree
            .item(page)
            .is_some_and(|item| is_visible(item, self.auth.as_ref()))
    }

    /// Resolve a notification's link to the menu item it points at.
    ///
    /// Returns `None` when the page is not in the menu or the current session
    /// may not open it, so a click on a stale or foreign link goes nowhere.
    pub fn route(&self, link: &NotificationLink) -> Option<&MenuItem> {
        let item = self.tree.item(&link.page)?;
        if !is_visible(item, self.auth.as_ref()) {
            debug!(page = %link.page, "notification link hidden from current session");
            return None;
        }
        Some(item)
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }
}
