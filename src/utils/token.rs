use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::types::token::{Claims, TokenUser};

/// Tokens expire 60 days after issuance.
pub const TOKEN_TTL_DAYS: i64 = 60;

/// Issues and verifies the signed bearer tokens. Built once at startup from
/// `JWT_SECRET` and handed to the app as `web::Data`.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        TokenService {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn issue(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            user: TokenUser { id: user_id },
            iat: now.timestamp() as usize,
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp() as usize,
        };
        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Checks signature and expiry only. The datastore is not consulted, so a
    /// token stays valid even if the user row it names were gone.
    pub fn verify(&self, token: &str) -> Result<Uuid, jsonwebtoken::errors::Error> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(data.claims.user.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let tokens = TokenService::new("test-secret-key-12345");
        let user_id = Uuid::new_v4();

        let token = tokens.issue(user_id).unwrap();
        assert!(!token.is_empty());

        let verified = tokens.verify(&token).unwrap();
        assert_eq!(verified, user_id);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let tokens = TokenService::new("test-secret-key-12345");
        let token = tokens.issue(Uuid::new_v4()).unwrap();

        let mut tampered = token.clone();
        tampered.pop();
        tampered.push('x');

        assert!(tokens.verify(&tampered).is_err());
        assert!(tokens.verify("not.a.token").is_err());
    }

    #[test]
    fn test_different_secrets_reject() {
        let issuer = TokenService::new("secret1");
        let verifier = TokenService::new("secret2");

        let token = issuer.issue(Uuid::new_v4()).unwrap();
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let secret = "test-secret-key-12345";
        let tokens = TokenService::new(secret);

        let now = Utc::now();
        let claims = Claims {
            user: TokenUser { id: Uuid::new_v4() },
            iat: (now - Duration::days(61)).timestamp() as usize,
            exp: (now - Duration::days(1)).timestamp() as usize,
        };
        let expired = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();

        assert!(tokens.verify(&expired).is_err());
    }
}
