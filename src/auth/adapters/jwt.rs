use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::error;
use uuid::Uuid;

use crate::auth::domain::{AuthError, AuthResult, UserIdentity};
use crate::auth::ports::{TokenClaims, TokenIssuer};
use crate::config::TokenConfig;

/// Registered claim set for issued session tokens. `jti` is a fresh
/// UUID per issuance, so two tokens for the same user never compare
/// equal.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
struct Claims {
    sub: String,
    email: String,
    jti: Uuid,
    iat: i64,
    exp: i64,
    iss: String,
}

/// HS256-signed, expiring session tokens. Verification needs only the
/// server-held secret, no store round trip.
pub struct JwtIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    ttl_secs: i64,
}

impl JwtIssuer {
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            issuer: config.issuer.clone(),
            ttl_secs: config.ttl_secs,
        }
    }
}

impl TokenIssuer for JwtIssuer {
    fn issue(&self, user: &UserIdentity) -> AuthResult<String> {
        let now = OffsetDateTime::now_utc().unix_timestamp();

        let claims = Claims {
            sub: user.id.clone(),
            email: user.email.clone(),
            jti: Uuid::new_v4(),
            iat: now,
            exp: now + self.ttl_secs,
            iss: self.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            error!("token signing failed: {}", e);
            AuthError::Internal("token signing failed".to_string())
        })
    }

    fn verify(&self, token: &str) -> AuthResult<TokenClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[&self.issuer]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| AuthError::InvalidCredentials)?;

        Ok(TokenClaims {
            user_id: data.claims.sub,
            email: data.claims.email,
            token_id: data.claims.jti.to_string(),
            issued_at: data.claims.iat,
            expires_at: data.claims.exp,
        })
    }
}
