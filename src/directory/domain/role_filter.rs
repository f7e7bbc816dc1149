//! Role filters for directory listings.

use super::{ParseServerRoleError, ServerRole};
use std::collections::BTreeSet;

/// Set of roles a listing is restricted to. An empty set matches every role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleFilter {
    roles: BTreeSet<ServerRole>,
}

impl RoleFilter {
    /// Creates a filter that matches every role.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Creates a filter from already-parsed roles.
    #[must_use]
    pub fn from_roles(roles: impl IntoIterator<Item = ServerRole>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
        }
    }

    /// Parses raw filter tokens.
    ///
    /// Each value may itself be a comma-separated list. Blank tokens are
    /// skipped, so `server_type=` behaves like no filter at all.
    ///
    /// # Errors
    ///
    /// Returns [`ParseServerRoleError`] for the first unrecognised token; the
    /// whole filter is rejected rather than partially applied.
    pub fn parse<'a>(
        values: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, ParseServerRoleError> {
        let mut roles = BTreeSet::new();
        for token in values
            .into_iter()
            .flat_map(|value| value.split(','))
            .map(str::trim)
            .filter(|token| !token.is_empty())
        {
            roles.insert(ServerRole::try_from(token)?);
        }
        Ok(Self { roles })
    }

    /// Returns whether `role` passes the filter.
    #[must_use]
    pub fn matches(&self, role: ServerRole) -> bool {
        self.roles.is_empty() || self.roles.contains(&role)
    }

    /// Returns whether the filter matches every role.
    #[must_use]
    pub fn is_any(&self) -> bool {
        self.roles.is_empty()
    }

    /// Returns the explicitly requested roles.
    pub fn roles(&self) -> impl Iterator<Item = ServerRole> + '_ {
        self.roles.iter().copied()
    }
}
