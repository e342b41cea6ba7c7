//! Session and role resolution.
//!
//! A session is never stored as an object. It is re-derived on every check
//! from two client-visible cookie flags: an authentication marker and a role
//! name. The flags are deliberately not cryptographically protected — that
//! is the documented trust boundary of this design — and [`SessionProvider`]
//! is the seam where a signed-token implementation would replace
//! [`PlainFlagSessions`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::store::DataStore;

/// Cookie carrying the authentication marker.
pub const AUTH_COOKIE: &str = "auth_token";

/// Cookie carrying the role name.
pub const ROLE_COOKIE: &str = "user_role";

/// The only value of [`AUTH_COOKIE`] treated as authenticated.
pub const AUTH_MARKER: &str = "true";

/// User role governing route access and UI affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Role {
    /// Unrestricted access.
    Admin,
    /// Everything except settings.
    Manager,
    /// Financials, profile, support, and search only.
    Accountant,
    /// Unauthenticated.
    Guest,
}

impl Role {
    /// Parse a role flag. Anything unrecognised is `None`; callers treat
    /// that the same as a missing flag.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Admin" => Some(Self::Admin),
            "Manager" => Some(Self::Manager),
            "Accountant" => Some(Self::Accountant),
            "Guest" => Some(Self::Guest),
            _ => None,
        }
    }

    /// Canonical role name, also the wire value of the role cookie.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Manager => "Manager",
            Self::Accountant => "Accountant",
            Self::Guest => "Guest",
        }
    }

    /// Display name used when no stored override exists.
    pub fn default_display_name(self) -> &'static str {
        match self {
            Self::Admin => "The Admin",
            Self::Manager => "The Manager",
            Self::Accountant => "The Accountant",
            Self::Guest => "Guest",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw cookie flags as read from a request. Either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionFlags {
    /// Value of the authentication cookie, if present.
    pub auth_token: Option<String>,
    /// Value of the role cookie, if present.
    pub user_role: Option<String>,
}

impl SessionFlags {
    /// Convenience constructor for tests and adapters.
    pub fn new(auth_token: Option<&str>, user_role: Option<&str>) -> Self {
        Self {
            auth_token: auth_token.map(str::to_owned),
            user_role: user_role.map(str::to_owned),
        }
    }
}

/// The resolved `{authenticated, role}` pair for the current request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Whether the authentication marker was present and exact.
    pub authenticated: bool,
    /// Resolved role; `Guest` whenever authentication fails.
    pub role: Role,
    /// Display name: stored override, or the role's canonical default.
    pub display_name: String,
}

impl Session {
    /// The unauthenticated guest session.
    pub fn guest() -> Self {
        Self {
            authenticated: false,
            role: Role::Guest,
            display_name: Role::Guest.default_display_name().to_owned(),
        }
    }
}

/// Seam between request flags and a resolved [`Session`].
///
/// The sole implementation today trusts plain cookie flags. A hardened
/// deployment would add an implementation verifying signed tokens and swap
/// it in here without touching the gate or the handlers.
pub trait SessionProvider: Send + Sync {
    /// Derive a session from the request flags. Must fail closed: any
    /// malformed or missing flag yields the guest session.
    fn resolve(&self, flags: &SessionFlags) -> Session;
}

/// Resolves sessions from the two plain cookie flags, looking up display
/// name overrides in the data store.
pub struct PlainFlagSessions {
    store: Arc<DataStore>,
}

impl PlainFlagSessions {
    /// Construct a provider backed by the given store.
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }
}

impl SessionProvider for PlainFlagSessions {
    fn resolve(&self, flags: &SessionFlags) -> Session {
        // The marker must match exactly; any other value is unauthenticated
        // no matter what the role flag says.
        if flags.auth_token.as_deref() != Some(AUTH_MARKER) {
            return Session::guest();
        }
        let Some(role) = flags.user_role.as_deref().and_then(Role::parse) else {
            return Session::guest();
        };
        if role == Role::Guest {
            return Session::guest();
        }
        let display_name = self
            .store
            .profile(role)
            .display_name
            .unwrap_or_else(|| role.default_display_name().to_owned());
        Session {
            authenticated: true,
            role,
            display_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::Profile;
    use crate::outbound::persistence::MemoryCollectionStore;
    use rstest::rstest;

    fn provider() -> PlainFlagSessions {
        let store = DataStore::open(Arc::new(MemoryCollectionStore::default()));
        PlainFlagSessions::new(Arc::new(store))
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), Some("Admin"))]
    #[case(Some("TRUE"), Some("Admin"))]
    #[case(Some("1"), Some("Admin"))]
    #[case(None, Some("Admin"))]
    #[case(Some("true"), None)]
    #[case(Some("true"), Some("Superuser"))]
    #[case(Some("true"), Some("Guest"))]
    fn malformed_flags_resolve_to_guest(
        #[case] auth: Option<&str>,
        #[case] role: Option<&str>,
    ) {
        let session = provider().resolve(&SessionFlags::new(auth, role));
        assert_eq!(session, Session::guest());
    }

    #[rstest]
    #[case("Admin", Role::Admin, "The Admin")]
    #[case("Manager", Role::Manager, "The Manager")]
    #[case("Accountant", Role::Accountant, "The Accountant")]
    fn valid_flags_resolve_role_and_default_name(
        #[case] flag: &str,
        #[case] role: Role,
        #[case] name: &str,
    ) {
        let session = provider().resolve(&SessionFlags::new(Some("true"), Some(flag)));
        assert!(session.authenticated);
        assert_eq!(session.role, role);
        assert_eq!(session.display_name, name);
    }

    #[test]
    fn stored_override_wins_over_default_name() {
        let store = Arc::new(DataStore::open(Arc::new(MemoryCollectionStore::default())));
        store
            .set_profile(
                Role::Manager,
                Profile {
                    display_name: Some("Morgan Reyes".into()),
                    avatar_url: None,
                },
            )
            .expect("persist profile");
        let provider = PlainFlagSessions::new(store);
        let session = provider.resolve(&SessionFlags::new(Some("true"), Some("Manager")));
        assert_eq!(session.display_name, "Morgan Reyes");
    }
}
