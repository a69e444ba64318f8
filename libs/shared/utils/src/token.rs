use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use chrono::Utc;
use tracing::debug;
use shared_models::auth::{SessionClaims, TokenHeader};

type HmacSha256 = Hmac<Sha256>;

/// Sign session claims into a `header.claims.signature` bearer token.
pub fn issue_token(claims: &SessionClaims, secret: &str) -> Result<String, String> {
    if secret.is_empty() {
        return Err("Session secret is not set".to_string());
    }

    let header = TokenHeader {
        alg: "HS256".to_string(),
        typ: "JWT".to_string(),
    };

    let header_json = serde_json::to_string(&header)
        .map_err(|e| format!("Failed to encode token header: {}", e))?;
    let claims_json = serde_json::to_string(claims)
        .map_err(|e| format!("Failed to encode token claims: {}", e))?;

    let signing_input = format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(header_json),
        URL_SAFE_NO_PAD.encode(claims_json)
    );

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_| "Failed to create HMAC".to_string())?;
    mac.update(signing_input.as_bytes());
    let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

    Ok(format!("{}.{}", signing_input, signature))
}

pub fn validate_token(token: &str, secret: &str) -> Result<SessionClaims, String> {
    if secret.is_empty() {
        return Err("Session secret is not set".to_string());
    }

    let parts: Vec<&str> = token.split('.').collect();
    let [header_b64, claims_b64, signature_b64] = parts.as_slice() else {
        return Err("Invalid token format".to_string());
    };

    let signature = match URL_SAFE_NO_PAD.decode(signature_b64) {
        Ok(sig) => sig,
        Err(e) => {
            debug!("Failed to decode signature: {}", e);
            return Err("Invalid signature encoding".to_string());
        }
    };

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_| "Failed to create HMAC".to_string())?;
    mac.update(format!("{}.{}", header_b64, claims_b64).as_bytes());

    if mac.verify_slice(&signature).is_err() {
        debug!("Token signature verification failed");
        return Err("Invalid token signature".to_string());
    }

    let claims_json = URL_SAFE_NO_PAD
        .decode(claims_b64)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .ok_or_else(|| "Invalid claims encoding".to_string())?;

    let claims: SessionClaims = match serde_json::from_str(&claims_json) {
        Ok(c) => c,
        Err(e) => {
            debug!("Failed to parse claims: {}", e);
            return Err("Invalid claims format".to_string());
        }
    };

    let now = Utc::now().timestamp();
    if claims.exp <= now {
        debug!("Token expired at {} (now: {})", claims.exp, now);
        return Err("Token expired".to_string());
    }

    debug!("Token validated successfully for user: {}", claims.sub);
    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_models::auth::Role;
    use uuid::Uuid;

    fn claims(exp_offset_secs: i64) -> SessionClaims {
        let now = Utc::now().timestamp();
        SessionClaims {
            sid: Uuid::new_v4(),
            sub: "1".to_string(),
            role: Role::Patient,
            iat: now,
            exp: now + exp_offset_secs,
        }
    }

    #[test]
    fn test_issue_then_validate() {
        let original = claims(3600);
        let token = issue_token(&original, "secret").unwrap();

        assert_eq!(token.split('.').count(), 3);

        let validated = validate_token(&token, "secret").unwrap();
        assert_eq!(validated.sid, original.sid);
        assert_eq!(validated.sub, "1");
        assert_eq!(validated.role, Role::Patient);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issue_token(&claims(3600), "secret").unwrap();
        assert_eq!(
            validate_token(&token, "other").unwrap_err(),
            "Invalid token signature"
        );
    }

    #[test]
    fn test_expired_token_rejected() {
        let token = issue_token(&claims(-10), "secret").unwrap();
        assert_eq!(validate_token(&token, "secret").unwrap_err(), "Token expired");
    }

    #[test]
    fn test_malformed_token_rejected() {
        assert_eq!(
            validate_token("not-a-token", "secret").unwrap_err(),
            "Invalid token format"
        );
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(issue_token(&claims(3600), "").is_err());
        assert!(validate_token("a.b.c", "").is_err());
    }
}
