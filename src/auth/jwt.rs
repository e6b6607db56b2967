use std::time::Duration;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{config::JwtConfig, error::AppError, state::AppState};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    #[serde(alias = "Access")]
    Access,
    #[serde(alias = "Refresh")]
    Refresh,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub exp: usize,
    pub iat: usize,
    pub iss: String,
    pub aud: String,
    pub kind: TokenKind,
}

#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub issuer: String,
    pub audience: String,
    pub leeway: u64,
    pub access_ttl: Duration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let JwtConfig {
            secret,
            issuer,
            audience,
            leeway_seconds,
        } = state.config.jwt.clone();
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
            audience,
            leeway: leeway_seconds,
            access_ttl: Duration::from_secs(60 * 60),
        }
    }
}

impl JwtKeys {
    /// Tokens are normally minted by the identity provider sharing `JWT_SECRET`.
    pub fn sign_access(&self, user_id: Uuid) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + TimeDuration::seconds(self.access_ttl.as_secs() as i64);
        let claims = Claims {
            sub: user_id,
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            kind: TokenKind::Access,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id = %user_id, "jwt signed");
        Ok(token)
    }

    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let mut validation = Validation::default();
        validation.set_audience(std::slice::from_ref(&self.audience));
        validation.set_issuer(std::slice::from_ref(&self.issuer));
        validation.leeway = self.leeway;
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        debug!(user_id = %data.claims.sub, kind = ?data.claims.kind, "jwt verified");
        Ok(data.claims)
    }

    /// Resolves a bearer credential to the caller's user id.
    pub fn verify_access(&self, token: &str) -> anyhow::Result<Uuid> {
        let claims = self.verify(token)?;
        if claims.kind != TokenKind::Access {
            anyhow::bail!("not an access token");
        }
        Ok(claims.sub)
    }
}

/// Authenticated caller. Rejects with 401 before the handler body runs.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .or_else(|| auth_header.strip_prefix("bearer "))
            .ok_or(AppError::Unauthorized("Invalid Authorization header"))?;

        match keys.verify_access(token) {
            Ok(user_id) => Ok(AuthUser(user_id)),
            Err(e) => {
                warn!(error = %e, "rejected bearer token");
                Err(AppError::Unauthorized("Invalid or expired token"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_keys() -> JwtKeys {
        JwtKeys::from_ref(&AppState::fake())
    }

    fn sign_claims(keys: &JwtKeys, claims: &Claims) -> String {
        encode(&Header::default(), claims, &keys.encoding).expect("encode")
    }

    fn claims_for(keys: &JwtKeys, user_id: Uuid, kind: TokenKind, exp_offset: i64) -> Claims {
        let now = OffsetDateTime::now_utc();
        Claims {
            sub: user_id,
            iat: now.unix_timestamp() as usize,
            exp: (now + TimeDuration::seconds(exp_offset)).unix_timestamp() as usize,
            iss: keys.issuer.clone(),
            aud: keys.audience.clone(),
            kind,
        }
    }

    #[test]
    fn sign_and_verify_access_token() {
        let keys = make_keys();
        let user_id = Uuid::new_v4();
        let token = keys.sign_access(user_id).expect("sign access");
        assert_eq!(keys.verify_access(&token).expect("verify"), user_id);
    }

    #[test]
    fn verify_access_rejects_refresh_token() {
        let keys = make_keys();
        let token = sign_claims(&keys, &claims_for(&keys, Uuid::new_v4(), TokenKind::Refresh, 600));
        let err = keys.verify_access(&token).unwrap_err();
        assert!(err.to_string().contains("not an access token"));
    }

    #[test]
    fn verify_rejects_expired_token() {
        let keys = make_keys();
        // well past the leeway
        let token = sign_claims(&keys, &claims_for(&keys, Uuid::new_v4(), TokenKind::Access, -3600));
        assert!(keys.verify_access(&token).is_err());
    }

    #[test]
    fn verify_rejects_wrong_audience() {
        let keys = make_keys();
        let mut claims = claims_for(&keys, Uuid::new_v4(), TokenKind::Access, 600);
        claims.aud = "someone-else".into();
        let token = sign_claims(&keys, &claims);
        assert!(keys.verify_access(&token).is_err());
    }

    #[test]
    fn verify_rejects_foreign_secret() {
        let keys = make_keys();
        let mut other = make_keys();
        other.encoding = EncodingKey::from_secret(b"a-different-secret");
        let token = other.sign_access(Uuid::new_v4()).expect("sign");
        assert!(keys.verify_access(&token).is_err());
    }
}
