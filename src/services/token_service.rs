//! Bearer token issuing and verification (HS256 JWT).

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::AppResult;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the token holder
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token service trait for dependency injection.
pub trait TokenService: Send + Sync {
    /// Issue a token for the given username
    fn generate_token(&self, username: &str) -> AppResult<String>;

    /// Verify a token and return the username it was issued to
    fn username_from_token(&self, token: &str) -> AppResult<String>;
}

/// JWT implementation of TokenService
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration: Duration,
}

impl JwtTokenService {
    pub fn new(config: &Config) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret_bytes()),
            expiration: Duration::days(config.jwt_expiration_days),
        }
    }
}

impl TokenService for JwtTokenService {
    fn generate_token(&self, username: &str) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            exp: (now + self.expiration).timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)?;
        Ok(token)
    }

    fn username_from_token(&self, token: &str) -> AppResult<String> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
        Ok(token_data.claims.sub)
    }
}
