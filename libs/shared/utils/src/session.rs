use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{Duration, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::auth::{Session, SessionClaims, User};

use crate::token::{issue_token, validate_token};

/// Server-side table of live sessions, keyed by session id.
pub struct SessionRegistry {
    sessions: RwLock<HashMap<Uuid, Session>>,
    ttl: Duration,
}

impl SessionRegistry {
    pub fn new(ttl_hours: i64) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl: Duration::hours(ttl_hours.max(1)),
        }
    }

    pub fn open(&self, user: User) -> Session {
        let now = Utc::now();
        let session = Session {
            id: Uuid::new_v4(),
            user,
            issued_at: now,
            expires_at: now + self.ttl,
        };

        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        sessions.retain(|_, existing| !existing.is_expired(now));
        sessions.insert(session.id, session.clone());

        info!("Session {} opened for user {}", session.id, session.user.id);
        session
    }

    /// Live session by id; expired sessions are treated as absent.
    pub fn get(&self, id: &Uuid) -> Option<Session> {
        let sessions = self.sessions.read().unwrap_or_else(PoisonError::into_inner);
        sessions
            .get(id)
            .filter(|session| !session.is_expired(Utc::now()))
            .cloned()
    }

    /// Idempotent: closing an unknown or already closed session is not an error.
    pub fn close(&self, id: &Uuid) -> bool {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let closed = sessions.remove(id).is_some();
        if closed {
            info!("Session {} closed", id);
        } else {
            debug!("Session {} was already closed", id);
        }
        closed
    }

    pub fn active_count(&self) -> usize {
        let now = Utc::now();
        let sessions = self.sessions.read().unwrap_or_else(PoisonError::into_inner);
        sessions.values().filter(|s| !s.is_expired(now)).count()
    }
}

/// What the auth middleware needs: the signing secret and the live sessions.
#[derive(Clone)]
pub struct AuthContext {
    pub config: Arc<AppConfig>,
    pub sessions: Arc<SessionRegistry>,
}

impl AuthContext {
    pub fn new(config: Arc<AppConfig>) -> Self {
        let sessions = Arc::new(SessionRegistry::new(config.session_ttl_hours));
        Self { config, sessions }
    }

    /// Register a session for `user` and mint its bearer token.
    pub fn start_session(&self, user: User) -> Result<(Session, String), String> {
        let session = self.sessions.open(user);
        let claims = SessionClaims {
            sid: session.id,
            sub: session.user.id.clone(),
            role: session.user.role,
            iat: session.issued_at.timestamp(),
            exp: session.expires_at.timestamp(),
        };

        match issue_token(&claims, &self.config.session_secret) {
            Ok(token) => Ok((session, token)),
            Err(e) => {
                self.sessions.close(&session.id);
                Err(e)
            }
        }
    }

    pub fn resolve(&self, token: &str) -> Result<Session, String> {
        let claims = validate_token(token, &self.config.session_secret)?;

        let session = self
            .sessions
            .get(&claims.sid)
            .ok_or_else(|| "Session has ended".to_string())?;

        if session.user.id != claims.sub {
            return Err("Token does not match session".to_string());
        }

        Ok(session)
    }

    pub fn end_session(&self, session_id: &Uuid) -> bool {
        self.sessions.close(session_id)
    }
}
