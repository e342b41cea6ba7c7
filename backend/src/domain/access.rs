//! Static route access table.
//!
//! One rule per role, declared once and never mutated: Admin is
//! unrestricted, Manager carries a deny-list for settings, Accountant an
//! allow-list, and Guest may only see the login page. Prefix matching is
//! plain starts-with; the dashboard home entry for Accountants matches the
//! home path exactly so it does not swallow the whole dashboard subtree.

use crate::domain::session::Role;

/// Public login route prefix.
pub const LOGIN_PREFIX: &str = "/login";

/// Protected dashboard route prefix.
pub const DASHBOARD_PREFIX: &str = "/dashboard";

/// Admin-only settings subtree.
pub const SETTINGS_PREFIX: &str = "/dashboard/settings";

/// Dashboard subtrees an accountant may enter, besides the home page.
const ACCOUNTANT_PREFIXES: [&str; 4] = [
    "/dashboard/financials",
    "/dashboard/profile",
    "/dashboard/support",
    "/dashboard/search",
];

fn is_dashboard_home(path: &str) -> bool {
    path == DASHBOARD_PREFIX || path == "/dashboard/"
}

/// Whether `role` may access `path`.
pub fn is_allowed(role: Role, path: &str) -> bool {
    match role {
        Role::Admin => true,
        Role::Manager => !path.starts_with(SETTINGS_PREFIX),
        Role::Accountant => {
            is_dashboard_home(path)
                || ACCOUNTANT_PREFIXES
                    .iter()
                    .any(|prefix| path.starts_with(prefix))
        }
        Role::Guest => path.starts_with(LOGIN_PREFIX),
    }
}

/// Redirect target when `role` is denied access to a dashboard path.
pub fn fallback_route(role: Role) -> &'static str {
    match role {
        Role::Accountant => "/dashboard/financials",
        Role::Admin | Role::Manager => DASHBOARD_PREFIX,
        Role::Guest => LOGIN_PREFIX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/dashboard")]
    #[case("/dashboard/financials")]
    #[case("/dashboard/settings")]
    #[case("/dashboard/clients")]
    #[case("/login")]
    fn admin_is_always_allowed(#[case] path: &str) {
        assert!(is_allowed(Role::Admin, path));
    }

    #[rstest]
    #[case("/dashboard", true)]
    #[case("/dashboard/clients", true)]
    #[case("/dashboard/calendar", true)]
    #[case("/dashboard/settings", false)]
    #[case("/dashboard/settings/appearance", false)]
    fn manager_is_denied_only_settings(#[case] path: &str, #[case] allowed: bool) {
        assert_eq!(is_allowed(Role::Manager, path), allowed);
    }

    #[rstest]
    #[case("/dashboard", true)]
    #[case("/dashboard/", true)]
    #[case("/dashboard/financials", true)]
    #[case("/dashboard/financials/export", true)]
    #[case("/dashboard/profile", true)]
    #[case("/dashboard/support", true)]
    #[case("/dashboard/search", true)]
    #[case("/dashboard/settings", false)]
    #[case("/dashboard/clients", false)]
    #[case("/dashboard/calendar", false)]
    #[case("/dashboard/forecasting", false)]
    fn accountant_follows_the_allow_list(#[case] path: &str, #[case] allowed: bool) {
        assert_eq!(is_allowed(Role::Accountant, path), allowed);
    }

    #[rstest]
    #[case("/login", true)]
    #[case("/dashboard", false)]
    #[case("/dashboard/clients", false)]
    fn guest_sees_only_login(#[case] path: &str, #[case] allowed: bool) {
        assert_eq!(is_allowed(Role::Guest, path), allowed);
    }

    #[rstest]
    #[case(Role::Accountant, "/dashboard/financials")]
    #[case(Role::Manager, "/dashboard")]
    #[case(Role::Admin, "/dashboard")]
    #[case(Role::Guest, "/login")]
    fn fallback_routes_per_role(#[case] role: Role, #[case] target: &str) {
        assert_eq!(fallback_route(role), target);
    }
}
