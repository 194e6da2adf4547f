use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: Uuid,
    pub user: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user_id: Uuid, user: impl Into<String>, expiry_hours: u64) -> Result<Self, JwtError> {
        let now = Utc::now();
        let exp = i64::try_from(expiry_hours)
            .ok()
            .and_then(Duration::try_hours)
            .and_then(|validity| now.checked_add_signed(validity))
            .ok_or(JwtError::InvalidExpiry(expiry_hours))?;

        Ok(Self {
            user_id,
            user: user.into(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        })
    }
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),
    #[error("Invalid JWT token: {0}")]
    InvalidToken(String),
    #[error("JWT secret not configured")]
    InvalidSecret,
    #[error("Token expiry of {0} hours is out of range")]
    InvalidExpiry(u64),
}

pub fn generate_jwt(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), claims, &encoding_key)
        .map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

/// Verify signature and expiry (HS256) and return the claims
pub fn validate_jwt(token: &str, secret: &str) -> Result<Claims, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
        .map_err(|e| JwtError::InvalidToken(e.to_string()))?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn round_trips_claims() {
        let user_id = Uuid::new_v4();
        let token = generate_jwt(&Claims::new(user_id, "alice", 1).unwrap(), SECRET).unwrap();

        let claims = validate_jwt(&token, SECRET).unwrap();
        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.user, "alice");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn rejects_wrong_secret() {
        let token = generate_jwt(&Claims::new(Uuid::new_v4(), "alice", 1).unwrap(), SECRET).unwrap();
        assert!(matches!(
            validate_jwt(&token, "other-secret"),
            Err(JwtError::InvalidToken(_))
        ));
    }

    #[test]
    fn rejects_expired_token() {
        let mut claims = Claims::new(Uuid::new_v4(), "alice", 1).unwrap();
        // well past the default 60s leeway
        claims.iat -= 7200;
        claims.exp = claims.iat + 60;
        let token = generate_jwt(&claims, SECRET).unwrap();

        assert!(matches!(validate_jwt(&token, SECRET), Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn out_of_range_expiry_is_refused() {
        for hours in [u64::MAX, i64::MAX as u64] {
            assert!(matches!(
                Claims::new(Uuid::new_v4(), "alice", hours),
                Err(JwtError::InvalidExpiry(h)) if h == hours
            ));
        }
    }

    #[test]
    fn empty_secret_is_refused() {
        let claims = Claims::new(Uuid::new_v4(), "alice", 1).unwrap();
        assert!(matches!(generate_jwt(&claims, ""), Err(JwtError::InvalidSecret)));
        assert!(matches!(validate_jwt("a.b.c", ""), Err(JwtError::InvalidSecret)));
    }
}
