//! Role-gated sidebar navigation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseRoleError;

/// Backoffice roles, most privileged first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    SuperAdmin,
    Admin,
    Staff,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::SuperAdmin, Role::Admin, Role::Staff];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "superadmin",
            Self::Admin => "admin",
            Self::Staff => "staff",
        }
    }

    /// Human-readable name for menus.
    pub fn title(self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super admin",
            Self::Admin => "Admin",
            Self::Staff => "Staff",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "superadmin" => Ok(Self::SuperAdmin),
            "admin" => Ok(Self::Admin),
            "staff" => Ok(Self::Staff),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

/// Sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    /// Semantic icon name, mapped to a concrete icon by the UI.
    pub icon: &'static str,
    pub roles: &'static [Role],
}

impl NavItem {
    pub fn allows(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Whether this entry matches `current_path`.
    ///
    /// `root` only matches exactly; other entries also match their children
    /// at a segment boundary (`/superadmin/orders/42`).
    pub fn is_active(&self, current_path: &str, root: &str) -> bool {
        let current = current_path.trim_end_matches('/');
        if self.path == root {
            return current == root;
        }
        current == self.path
            || current
                .strip_prefix(self.path)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

const EVERYONE: &[Role] = &[Role::SuperAdmin, Role::Admin, Role::Staff];
const MANAGERS: &[Role] = &[Role::SuperAdmin, Role::Admin];
const SUPER_ONLY: &[Role] = &[Role::SuperAdmin];

/// Full sidebar catalog in display order.
pub const CATALOG: &[NavItem] = &[
    NavItem { label: "Dashboard", path: "/superadmin", icon: "dashboard", roles: EVERYONE },
    NavItem { label: "Products", path: "/superadmin/products", icon: "products", roles: EVERYONE },
    NavItem { label: "Orders", path: "/superadmin/orders", icon: "orders", roles: EVERYONE },
    NavItem { label: "Customers", path: "/superadmin/customers", icon: "customers", roles: MANAGERS },
    NavItem { label: "Roles", path: "/superadmin/roles", icon: "roles", roles: SUPER_ONLY },
    NavItem { label: "Settings", path: "/superadmin/settings", icon: "settings", roles: MANAGERS },
];

/// Catalog entries visible to `role`, in catalog order.
pub fn visible_items(role: Role) -> impl Iterator<Item = &'static NavItem> {
    CATALOG.iter().filter(move |item| item.allows(role))
}
