//! JWT claims carried by API callers

use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const SCOPE_READ: &str = "inventory:read";
pub const SCOPE_WRITE: &str = "inventory:write";

/// JWT Claims for authenticated callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    /// Space separated scopes
    #[serde(default)]
    pub scope: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    pub fn has_scope(&self, scope: &str) -> bool {
        self.scope.split_whitespace().any(|s| s == scope)
    }

    // Authorization checks
    pub fn require_read_inventory(&self) -> Result<(), AppError> {
        if self.has_scope(SCOPE_READ) || self.has_scope(SCOPE_WRITE) {
            Ok(())
        } else {
            Err(AppError::Authorization("Insufficient rights to read inventory".to_string()))
        }
    }

    pub fn require_write_inventory(&self) -> Result<(), AppError> {
        if self.has_scope(SCOPE_WRITE) {
            Ok(())
        } else {
            Err(AppError::Authorization("Insufficient rights to write inventory".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn claims(scope: &str) -> Claims {
        let now = Utc::now().timestamp();
        Claims {
            sub: "tester".to_string(),
            scope: scope.to_string(),
            exp: now + 3600,
            iat: now,
        }
    }

    #[test]
    fn test_token_roundtrip() {
        let token = claims(SCOPE_READ).create_token("secret").unwrap();
        let parsed = Claims::from_token(&token, "secret").unwrap();
        assert_eq!(parsed.sub, "tester");
        assert!(Claims::from_token(&token, "other-secret").is_err());
    }

    #[test]
    fn test_write_scope_implies_read() {
        let writer = claims("openid inventory:write");
        assert!(writer.require_read_inventory().is_ok());
        assert!(writer.require_write_inventory().is_ok());

        let reader = claims(SCOPE_READ);
        assert!(reader.require_read_inventory().is_ok());
        assert!(matches!(
            reader.require_write_inventory(),
            Err(AppError::Authorization(_))
        ));

        assert!(claims("").require_read_inventory().is_err());
    }
}
