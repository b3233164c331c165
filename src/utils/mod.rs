use bcrypt::{DEFAULT_COST, hash, verify};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::{Rng, rngs::OsRng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Config;

const PASSWORD_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generate an alphanumeric credential for a newly provisioned account.
/// `OsRng` only: this credential is the account's sole protection until the
/// first login.
pub fn generate_password(length: usize) -> String {
    let mut rng = OsRng;
    (0..length)
        .map(|_| PASSWORD_ALPHABET[rng.gen_range(0..PASSWORD_ALPHABET.len())] as char)
        .collect()
}

pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash(password.as_bytes(), DEFAULT_COST)
}

/// Total over the hash domain: a malformed stored hash verifies as false
/// rather than surfacing an error.
pub fn verify_password(password: &str, hash: &str) -> bool {
    verify(password.as_bytes(), hash).unwrap_or(false)
}

/// The two principal classes. Serialized into and out of the `user_type`
/// claim; every guarded boundary matches on this exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Faculty,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub user_type: Role,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    pub exp: i64,
    pub iat: i64,
}

/// What a token is issued for: the principal descriptor resolved at login.
#[derive(Debug, Clone)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub employee_id: Option<String>,
}

pub fn create_access_token(
    identity: &Identity,
    config: &Config,
    ttl: Option<Duration>,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let ttl = ttl
        .unwrap_or_else(|| Duration::seconds(config.jwt_expiration().as_secs() as i64));
    let expiration = now
        .checked_add_signed(ttl)
        .expect("valid timestamp")
        .timestamp();

    let claims = Claims {
        sub: identity.id,
        email: identity.email.clone(),
        user_type: identity.role,
        name: identity.name.clone(),
        employee_id: identity.employee_id.clone(),
        exp: expiration,
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
}

/// Total over the string domain: bad signature, malformed token and expired
/// token all come back as `None`.
pub fn decode_access_token(token: &str, config: &Config) -> Option<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            database_url: String::new(),
            jwt_secret: "unit-test-secret".into(),
            jwt_expire_minutes: 30,
            server_host: "127.0.0.1".into(),
            server_port: 8000,
            smtp_server: "localhost".into(),
            smtp_port: 587,
            smtp_email: None,
            smtp_password: None,
        }
    }

    fn faculty_identity() -> Identity {
        Identity {
            id: Uuid::new_v4(),
            email: "f.lastname@college.edu".into(),
            name: "Dr. F. Lastname".into(),
            role: Role::Faculty,
            employee_id: Some("EMP042".into()),
        }
    }

    #[test]
    fn generated_passwords_are_alphanumeric_and_sized() {
        let password = generate_password(12);
        assert_eq!(password.len(), 12);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn generated_passwords_differ_between_calls() {
        // 62^20 possibilities; a collision here means the RNG is broken.
        assert_ne!(generate_password(20), generate_password(20));
    }

    #[test]
    fn password_roundtrip_verifies() {
        let hashed = hash_password("s3cret-pw").unwrap();
        assert!(verify_password("s3cret-pw", &hashed));
        assert!(!verify_password("wrong-pw", &hashed));
    }

    #[test]
    fn hashing_is_salted() {
        let first = hash_password("same-input").unwrap();
        let second = hash_password("same-input").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("same-input", &first));
        assert!(verify_password("same-input", &second));
    }

    #[test]
    fn malformed_hash_verifies_false() {
        assert!(!verify_password("anything", "not-a-bcrypt-hash"));
        assert!(!verify_password("anything", ""));
    }

    #[test]
    fn token_roundtrip_preserves_claims() {
        let config = test_config();
        let identity = faculty_identity();

        let token = create_access_token(&identity, &config, None).unwrap();
        let claims = decode_access_token(&token, &config).expect("token should decode");

        assert_eq!(claims.sub, identity.id);
        assert_eq!(claims.email, identity.email);
        assert_eq!(claims.user_type, Role::Faculty);
        assert_eq!(claims.name, identity.name);
        assert_eq!(claims.employee_id.as_deref(), Some("EMP042"));
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_token_is_invalid() {
        let config = test_config();
        // Past the default 60s validation leeway.
        let token =
            create_access_token(&faculty_identity(), &config, Some(Duration::seconds(-120)))
                .unwrap();
        assert!(decode_access_token(&token, &config).is_none());
    }

    #[test]
    fn token_signed_with_other_secret_is_invalid() {
        let config = test_config();
        let mut other = test_config();
        other.jwt_secret = "a-different-secret".into();

        let token = create_access_token(&faculty_identity(), &other, None).unwrap();
        assert!(decode_access_token(&token, &config).is_none());
    }

    #[test]
    fn malformed_token_is_invalid() {
        let config = test_config();
        assert!(decode_access_token("", &config).is_none());
        assert!(decode_access_token("garbage", &config).is_none());
        assert!(decode_access_token("a.b.c", &config).is_none());
    }

    #[test]
    fn role_claim_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Role::Faculty).unwrap(), "\"faculty\"");
    }
}
