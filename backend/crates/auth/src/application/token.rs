//! Bearer Token Issue / Verify
//!
//! Stateless HS256 JWTs. A token is valid while its signature checks out
//! and `exp` has not passed; nothing is stored server-side.

use chrono::{DateTime, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind as JwtErrorKind,
};
use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::entity::identity::Identity;
use crate::error::{AuthError, AuthResult};

/// Token scheme reported to clients
pub const TOKEN_TYPE: &str = "Bearer";

/// JWT claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id (decimal string)
    pub sub: String,
    pub username: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expires at (unix seconds)
    pub exp: i64,
}

/// A freshly signed token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    /// Expiry (unix seconds)
    pub expires_at: i64,
}

// ============================================================================
// Issuer
// ============================================================================

/// Signs tokens for authenticated identities
pub struct TokenIssuer {
    key: EncodingKey,
    ttl_secs: i64,
}

impl TokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            key: EncodingKey::from_secret(config.token_secret()),
            ttl_secs: config.token_ttl_secs(),
        }
    }

    /// Issue a token valid from now
    pub fn issue(&self, identity: &Identity) -> AuthResult<IssuedToken> {
        self.issue_at(identity, Utc::now())
    }

    /// Issue a token with an explicit issuance time
    pub fn issue_at(
        &self,
        identity: &Identity,
        issued_at: DateTime<Utc>,
    ) -> AuthResult<IssuedToken> {
        let iat = issued_at.timestamp();
        let exp = iat.saturating_add(self.ttl_secs);

        let claims = Claims {
            sub: identity.user_id.to_string(),
            username: identity.user_name.clone(),
            iat,
            exp,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.key)
            .map_err(|e| AuthError::Signing(e.to_string()))?;

        Ok(IssuedToken {
            token,
            expires_at: exp,
        })
    }
}

// ============================================================================
// Verifier
// ============================================================================

/// Checks signature and expiry of presented tokens
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            key: DecodingKey::from_secret(config.token_secret()),
            validation,
        }
    }

    /// Verify a token and recover the identity it carries
    pub fn verify(&self, token: &str) -> AuthResult<Identity> {
        let data = decode::<Claims>(token, &self.key, &self.validation).map_err(|e| {
            match e.kind() {
                JwtErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                _ => AuthError::InvalidToken,
            }
        })?;

        let user_id: UserId = data
            .claims
            .sub
            .parse()
            .map_err(|_| AuthError::InvalidToken)?;

        Ok(Identity {
            user_id,
            user_name: data.claims.username,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn config(secret: &[u8]) -> AuthConfig {
        AuthConfig::new(secret.to_vec()).unwrap()
    }

    fn alice() -> Identity {
        Identity {
            user_id: UserId::from_i64(7),
            user_name: "alice".to_string(),
        }
    }

    const SECRET: &[u8] = b"an-hs256-secret-of-32-bytes-long";

    #[test]
    fn test_issue_then_verify() {
        let config = config(SECRET);
        let issued = TokenIssuer::new(&config).issue(&alice()).unwrap();

        assert!(!issued.token.is_empty());
        assert_eq!(issued.token.split('.').count(), 3);

        let identity = TokenVerifier::new(&config).verify(&issued.token).unwrap();
        assert_eq!(identity, alice());
    }

    #[test]
    fn test_expiry_is_issue_time_plus_ttl() {
        let config = config(SECRET);
        let issued_at = Utc::now();
        let issued = TokenIssuer::new(&config)
            .issue_at(&alice(), issued_at)
            .unwrap();

        assert_eq!(issued.expires_at, issued_at.timestamp() + 24 * 3600);
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = config(SECRET);
        let issued = TokenIssuer::new(&config)
            .issue_at(&alice(), Utc::now() - Duration::hours(25))
            .unwrap();

        let result = TokenVerifier::new(&config).verify(&issued.token);
        assert!(matches!(result, Err(AuthError::ExpiredToken)));
    }

    #[test]
    fn test_other_secret_rejected() {
        let issued = TokenIssuer::new(&config(SECRET)).issue(&alice()).unwrap();
        let other = config(b"a-completely-different-32b-secret");

        let result = TokenVerifier::new(&other).verify(&issued.token);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let config = config(SECRET);
        let issued = TokenIssuer::new(&config).issue(&alice()).unwrap();

        // Well-formed payload: accepted when signed with the right key
        let forged_claims = Claims {
            sub: "1".to_string(),
            username: "mallory".to_string(),
            iat: Utc::now().timestamp(),
            exp: Utc::now().timestamp() + 3600,
        };
        let resigned = encode(
            &Header::new(Algorithm::HS256),
            &forged_claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();
        let verifier = TokenVerifier::new(&config);
        assert_eq!(verifier.verify(&resigned).unwrap().user_name, "mallory");

        // Same payload under the original signature
        let forged_payload = resigned.split('.').nth(1).unwrap();
        let mut parts: Vec<&str> = issued.token.split('.').collect();
        assert_ne!(parts[1], forged_payload);
        parts[1] = forged_payload;

        let result = verifier.verify(&parts.join("."));
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_garbage_rejected() {
        let verifier = TokenVerifier::new(&config(SECRET));
        assert!(matches!(
            verifier.verify("invalid.token.here"),
            Err(AuthError::InvalidToken)
        ));
        assert!(matches!(verifier.verify(""), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_unparsable_subject_rejected() {
        let config = config(SECRET);
        let claims = Claims {
            sub: "not-a-number".to_string(),
            username: "alice".to_string(),
            iat: Utc::now().timestamp(),
            exp: Utc::now().timestamp() + 60,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        let result = TokenVerifier::new(&config).verify(&token);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }
}
