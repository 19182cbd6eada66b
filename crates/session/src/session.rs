use serde::{Deserialize, Serialize};

use orderdesk_core::{DomainError, DomainResult};

/// Dashboard role selected at sign-in.
///
/// The role decides which dashboard the user lands on; it is not a
/// permission system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Buyer,
    Seller,
}

impl Role {
    /// The stored flag value, also the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Buyer => "buyer",
            Role::Seller => "seller",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "buyer" => Ok(Role::Buyer),
            "seller" => Ok(Role::Seller),
            other => Err(DomainError::validation(format!("unknown role: {other}"))),
        }
    }
}

/// Sign-in form input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Holds the signed-in role for the process, nothing more.
///
/// Sign-in is simulated: both fields must be present, but no password is
/// ever verified and no identity exists beyond the role flag. This mirrors
/// the stored-flag session the dashboard runs on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStore {
    active: Option<Role>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Presence check on the credentials, then store the chosen role.
    ///
    /// Signing in over an existing session replaces the stored role.
    pub fn sign_in(&mut self, credentials: &Credentials, role: Role) -> DomainResult<Role> {
        if credentials.email.trim().is_empty() {
            return Err(DomainError::validation("email cannot be empty"));
        }
        if credentials.password.trim().is_empty() {
            return Err(DomainError::validation("password cannot be empty"));
        }

        self.active = Some(role);
        Ok(role)
    }

    pub fn active_role(&self) -> Option<Role> {
        self.active
    }

    pub fn is_signed_in(&self) -> bool {
        self.active.is_some()
    }

    /// Clear the stored role and report what was cleared.
    ///
    /// Signing out of an empty session is not an error; it simply returns
    /// `None`.
    pub fn sign_out(&mut self) -> Option<Role> {
        self.active.take()
    }
}
