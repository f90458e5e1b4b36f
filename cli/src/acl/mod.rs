//! ACL rule model and the configuration-to-rule compiler.
//!
//! - **[`AclRule`]**: a `u:NAME:PERMS` / `g:NAME:PERMS` rule string
//! - **[`AclScope`]**: access ACL or inherited default ACL
//! - **[`AclGrant`]**: one rule applied to one target in one scope, i.e. one
//!   `setfacl` invocation
//! - **[`compiler`]**: walks an [`AclConfig`](crate::config::AclConfig) and
//!   produces the ordered grants
pub mod compiler;

use std::fmt;
use std::path::PathBuf;

use crate::config::PermissionEntry;

/// Program used to write ACLs.
pub const SETFACL: &str = "setfacl";

/// Program used to read ACLs.
pub const GETFACL: &str = "getfacl";

/// The subject of an ACL entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    /// A named user (`u:` entries).
    User(String),
    /// A named group (`g:` entries).
    Group(String),
}

impl Principal {
    /// The `setfacl` entry tag for this principal.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::User(_) => "u",
            Self::Group(_) => "g",
        }
    }

    /// The user or group name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::User(name) | Self::Group(name) => name,
        }
    }
}

/// A single ACL rule such as `u:alice:rwx`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AclRule {
    /// Who the rule grants to.
    pub principal: Principal,
    /// Permission string passed through to `setfacl`.
    pub permissions: String,
}

impl AclRule {
    /// Build the rule described by a configuration entry.
    ///
    /// `user` wins over `group`. Returns `None` when the entry names neither,
    /// names an empty principal, or carries no permissions.
    #[must_use]
    pub fn from_entry(entry: &PermissionEntry) -> Option<Self> {
        let principal = match (&entry.user, &entry.group) {
            (Some(user), _) => Principal::User(user.clone()),
            (None, Some(group)) => Principal::Group(group.clone()),
            (None, None) => return None,
        };
        if principal.name().trim().is_empty() {
            return None;
        }
        let permissions = entry.permissions.as_deref().filter(|p| !p.is_empty())?;
        Some(Self {
            principal,
            permissions: permissions.to_string(),
        })
    }
}

impl fmt::Display for AclRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.principal.tag(),
            self.principal.name(),
            self.permissions
        )
    }
}

/// Which ACL a rule is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AclScope {
    /// The access ACL of every existing entry in the tree.
    Access,
    /// The default ACL inherited by entries created later.
    Default,
}

impl AclScope {
    /// `setfacl` flags selecting this scope, always recursive.
    #[must_use]
    pub const fn flags(self) -> &'static str {
        match self {
            Self::Access => "-Rm",
            Self::Default => "-Rdm",
        }
    }
}

impl fmt::Display for AclScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Access => write!(f, "access"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// One rule applied to one target in one scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AclGrant {
    /// The rule to apply.
    pub rule: AclRule,
    /// File or directory the rule is applied to (recursively).
    pub target: PathBuf,
    /// Access or default ACL.
    pub scope: AclScope,
}

impl AclGrant {
    /// Create a new grant.
    #[must_use]
    pub const fn new(rule: AclRule, target: PathBuf, scope: AclScope) -> Self {
        Self {
            rule,
            target,
            scope,
        }
    }
}

impl fmt::Display for AclGrant {
    /// Renders the equivalent shell command.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{SETFACL} {} {} {}",
            self.scope.flags(),
            self.rule,
            self.target.display()
        )
    }
}
