use std::sync::Arc;

use shared_config::AppConfig;
use shared_models::auth::{Role, User};

use crate::session::AuthContext;

pub struct TestConfig {
    pub session_secret: String,
    pub session_ttl_hours: i64,
    pub transition_policy: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            session_secret: "test-secret-key-for-session-tokens-must-be-long-enough".to_string(),
            session_ttl_hours: 8,
            transition_policy: "unrestricted".to_string(),
        }
    }
}

impl TestConfig {
    pub fn guarded() -> Self {
        Self {
            transition_policy: "guarded".to_string(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            session_secret: self.session_secret.clone(),
            session_ttl_hours: self.session_ttl_hours,
            appointment_transition_policy: self.transition_policy.clone(),
            seed_demo_data: true,
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }

    pub fn auth_context(&self) -> AuthContext {
        AuthContext::new(self.to_arc())
    }
}

pub struct TestUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl TestUser {
    pub fn new(id: &str, email: &str, name: &str, role: Role) -> Self {
        Self {
            id: id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            role,
        }
    }

    /// The demo patient account.
    pub fn patient() -> Self {
        Self::new("1", "paciente@demo.com", "María González", Role::Patient)
    }

    /// The demo administrator account.
    pub fn admin() -> Self {
        Self::new("2", "admin@demo.com", "Carlos Administrador", Role::Admin)
    }

    pub fn to_user(&self) -> User {
        User {
            id: self.id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
        }
    }
}

pub struct SessionTestUtils;

impl SessionTestUtils {
    /// Open a live session for `user` and return its bearer token.
    pub fn create_test_token(auth: &AuthContext, user: &TestUser) -> String {
        auth.start_session(user.to_user())
            .map(|(_, token)| token)
            .expect("test config always carries a session secret")
    }

    pub fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }

    pub fn create_malformed_token() -> String {
        "invalid.token.format".to_string()
    }
}
