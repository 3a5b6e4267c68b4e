//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use lettinghub_core::config::auth::AuthConfig;
use lettinghub_core::error::AppError;

use super::claims::Claims;

/// Validates bearer tokens issued by the user service.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.jwt_leeway_seconds;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string.
    ///
    /// Checks signature validity and expiration. The role claim is trusted
    /// as asserted; no account lookup happens here.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::authentication(format!("Invalid or expired token: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use lettinghub_entity::user::UserRole;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_leeway_seconds: 5,
        }
    }

    fn token(secret: &str, role: UserRole, exp_offset_seconds: i64) -> String {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "manager1".to_string(),
            role,
            iat: now,
            exp: now + exp_offset_seconds,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_decode_valid_token() {
        let decoder = JwtDecoder::new(&config());
        let claims = decoder
            .decode(&token("test-secret", UserRole::PropertyManager, 3600))
            .unwrap();
        assert_eq!(claims.username(), "manager1");
        assert_eq!(claims.role, UserRole::PropertyManager);
    }

    #[test]
    fn test_decode_rejects_expired_token() {
        let decoder = JwtDecoder::new(&config());
        assert!(
            decoder
                .decode(&token("test-secret", UserRole::Admin, -3600))
                .is_err()
        );
    }

    #[test]
    fn test_decode_rejects_wrong_secret() {
        let decoder = JwtDecoder::new(&config());
        assert!(
            decoder
                .decode(&token("other-secret", UserRole::Admin, 3600))
                .is_err()
        );
    }
}
