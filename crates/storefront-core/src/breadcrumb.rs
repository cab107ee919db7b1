//! URL path to breadcrumb trail.
//!
//! `/superadmin/roles/edit` becomes `Home > Roles > Edit`. The first path
//! segment is the admin namespace token and is represented by the Home crumb,
//! so it never gets a crumb of its own.

use serde::Serialize;

use crate::config::ShellConfig;

/// A single navigable breadcrumb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    /// Display label.
    pub label: String,
    /// Cumulative path up to and including this segment.
    pub path: String,
}

impl Breadcrumb {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Turn a path segment into a label.
///
/// Upper-cases the first character and replaces every `-` with a space.
/// Already-capitalized words pass through unchanged.
pub fn humanize_segment(segment: &str) -> String {
    let mut chars = segment.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut label: String = first.to_uppercase().collect();
    label.push_str(chars.as_str());
    label.replace('-', " ")
}

/// Derive the breadcrumb trail for `path`.
///
/// Total over any input: the result always starts with the Home crumb and
/// empty segments (leading, trailing or doubled slashes) are ignored.
pub fn breadcrumbs(path: &str, config: &ShellConfig) -> Vec<Breadcrumb> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let mut crumbs = Vec::with_capacity(segments.len().max(1));
    crumbs.push(Breadcrumb::new(
        config.home_label.as_str(),
        config.root.as_str(),
    ));

    let mut accumulated = String::new();
    for (idx, segment) in segments.iter().enumerate() {
        accumulated.push('/');
        accumulated.push_str(segment);

        // Namespace token, already covered by Home
        if idx == 0 {
            continue;
        }

        crumbs.push(Breadcrumb::new(humanize_segment(segment), accumulated.clone()));
    }

    crumbs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trail(path: &str) -> Vec<(String, String)> {
        breadcrumbs(path, &ShellConfig::default())
            .into_iter()
            .map(|c| (c.label, c.path))
            .collect()
    }

    fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected
            .iter()
            .map(|(l, p)| (l.to_string(), p.to_string()))
            .collect()
    }

    #[test]
    fn test_nested_admin_path() {
        assert_eq!(
            trail("/superadmin/roles/edit"),
            pairs(&[
                ("Home", "/superadmin"),
                ("Roles", "/superadmin/roles"),
                ("Edit", "/superadmin/roles/edit"),
            ])
        );
    }

    #[test]
    fn test_root_only() {
        assert_eq!(trail("/superadmin"), pairs(&[("Home", "/superadmin")]));
        assert_eq!(trail("/superadmin/"), pairs(&[("Home", "/superadmin")]));
    }

    #[test]
    fn test_empty_and_slash_paths() {
        assert_eq!(trail(""), pairs(&[("Home", "/superadmin")]));
        assert_eq!(trail("/"), pairs(&[("Home", "/superadmin")]));
        assert_eq!(trail("///"), pairs(&[("Home", "/superadmin")]));
    }

    #[test]
    fn test_trailing_and_doubled_slashes() {
        assert_eq!(
            trail("/superadmin//products/"),
            pairs(&[("Home", "/superadmin"), ("Products", "/superadmin/products")])
        );
    }

    #[test]
    fn test_hyphenated_segment() {
        assert_eq!(humanize_segment("user-profile"), "User profile");
        assert_eq!(humanize_segment("order-line-items"), "Order line items");
        assert_eq!(
            trail("/superadmin/user-profile"),
            pairs(&[("Home", "/superadmin"), ("User profile", "/superadmin/user-profile")])
        );
    }

    #[test]
    fn test_humanize_is_stable_on_capitalized_words() {
        assert_eq!(humanize_segment("Roles"), "Roles");
        assert_eq!(humanize_segment(&humanize_segment("roles")), "Roles");
    }

    #[test]
    fn test_humanize_edge_cases() {
        assert_eq!(humanize_segment(""), "");
        assert_eq!(humanize_segment("-draft"), " draft");
        assert_eq!(humanize_segment("42"), "42");
        assert_eq!(humanize_segment("élan"), "Élan");
    }

    #[test]
    fn test_length_invariant() {
        for path in ["/superadmin/a", "/superadmin/a/b", "/superadmin/a/b/c/d"] {
            let segments = path.split('/').filter(|s| !s.is_empty()).count();
            assert_eq!(trail(path).len(), segments);
        }
    }

    #[test]
    fn test_first_segment_always_skipped() {
        // Different namespace token still collapses into Home
        assert_eq!(
            trail("/admin/orders"),
            pairs(&[("Home", "/superadmin"), ("Orders", "/admin/orders")])
        );
    }

    #[test]
    fn test_custom_root_and_label() {
        let config = ShellConfig {
            root: "/backoffice".to_string(),
            home_label: "Dashboard".to_string(),
            ..ShellConfig::default()
        };
        let crumbs = breadcrumbs("/backoffice/settings", &config);
        assert_eq!(
            crumbs,
            vec![
                Breadcrumb::new("Dashboard", "/backoffice"),
                Breadcrumb::new("Settings", "/backoffice/settings"),
            ]
        );
    }
}
