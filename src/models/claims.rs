//! Bearer-token claims issued by the external identity platform

use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by a caller token. The service only checks validity,
/// not per-date entitlement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallerClaims {
    /// Subject (caller identifier)
    pub sub: String,
    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,
    /// Optional role hint ("admin", "wizard")
    #[serde(default)]
    pub role: Option<String>,
}

impl CallerClaims {
    /// Validate and decode a bearer token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        let data = decode::<CallerClaims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn token(secret: &str, exp: i64) -> String {
        let claims = CallerClaims {
            sub: "wizard".to_string(),
            exp,
            role: None,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn valid_token_decodes() {
        let exp = chrono::Utc::now().timestamp() + 3600;
        let claims = CallerClaims::from_token(&token("s3cret", exp), "s3cret").unwrap();
        assert_eq!(claims.sub, "wizard");
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let exp = chrono::Utc::now().timestamp() + 3600;
        assert!(CallerClaims::from_token(&token("s3cret", exp), "other").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let exp = chrono::Utc::now().timestamp() - 3600;
        assert!(CallerClaims::from_token(&token("s3cret", exp), "s3cret").is_err());
    }
}
