// libs/auth-cell/src/services/identity.rs
use std::sync::Arc;

use tracing::{debug, info, warn};

use shared_models::auth::{Role, User};

use crate::models::AuthError;

#[derive(Debug, Clone)]
struct Credential {
    email: String,
    password: String,
    user: User,
}

/// Fixed table of demo accounts. Plain-text comparison: this is not real authentication.
#[derive(Debug, Clone, Default)]
pub struct CredentialTable {
    entries: Vec<Credential>,
}

impl CredentialTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two demo accounts: one patient, one administrator.
    pub fn demo() -> Self {
        Self::new()
            .with_account(
                "paciente123",
                User {
                    id: "1".to_string(),
                    email: "paciente@demo.com".to_string(),
                    name: "María González".to_string(),
                    role: Role::Patient,
                },
            )
            .with_account(
                "admin123",
                User {
                    id: "2".to_string(),
                    email: "admin@demo.com".to_string(),
                    name: "Carlos Administrador".to_string(),
                    role: Role::Admin,
                },
            )
    }

    pub fn with_account(mut self, password: &str, user: User) -> Self {
        self.entries.push(Credential {
            email: user.email.clone(),
            password: password.to_string(),
            user,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact, case-sensitive match on both fields.
    pub fn verify(&self, email: &str, password: &str) -> Option<&User> {
        self.entries
            .iter()
            .find(|entry| entry.email == email && entry.password == password)
            .map(|entry| &entry.user)
    }
}

/// Holds the authenticated user for one session.
#[derive(Debug, Clone)]
pub struct IdentityStore {
    credentials: Arc<CredentialTable>,
    current: Option<User>,
}

impl IdentityStore {
    pub fn new(credentials: Arc<CredentialTable>) -> Self {
        Self {
            credentials,
            current: None,
        }
    }

    /// Check the credentials and, on success, make the user current.
    ///
    /// A failed attempt leaves any previously authenticated user in place.
    pub fn authenticate(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        debug!("Authenticating {}", email);

        let user = self
            .credentials
            .verify(email, password)
            .cloned()
            .ok_or_else(|| {
                warn!("Rejected login attempt for {}", email);
                AuthError::InvalidCredentials
            })?;

        info!("User {} authenticated as {}", user.id, user.role);
        self.current = Some(user.clone());
        Ok(user)
    }

    pub fn end_session(&mut self) {
        if let Some(user) = self.current.take() {
            info!("Session ended for user {}", user.id);
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}
