use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token lifetime. Issuance lives outside this service; the constant only
/// matters for tokens minted by tests and tooling.
const TOKEN_EXPIRY_DAYS: i64 = 7;

/// Claims carried by every HS256 access token this service accepts.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject -- the stable user identifier, used as project ownerId.
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user_id: Uuid) -> Self {
        let now = Utc::now();

        Self {
            sub: user_id,
            exp: (now + Duration::days(TOKEN_EXPIRY_DAYS)).timestamp(),
            iat: now.timestamp(),
        }
    }
}

/// Sign claims into an HS256 token.
pub fn generate_jwt(claims: &Claims, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verify a token's signature and expiry, returning the embedded [`Claims`].
pub fn validate_jwt(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}
