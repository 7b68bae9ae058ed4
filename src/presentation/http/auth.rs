use axum::extract::FromRequestParts;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderName, StatusCode};
use jsonwebtoken::{DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bootstrap::config::Config;

/// Claims of the access token issued by the hosted auth service.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

/// Raw access token, from `Authorization: Bearer` or the `access_token` cookie.
pub struct Bearer(pub String);

fn header_str(parts: &Parts, name: HeaderName) -> Option<&str> {
    parts.headers.get(name).and_then(|v| v.to_str().ok())
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Bearer
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        header_str(parts, AUTHORIZATION)
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::to_string)
            .or_else(|| header_str(parts, COOKIE).and_then(|c| get_cookie(c, "access_token")))
            .map(Bearer)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}

pub fn validate_bearer_str(cfg: &Config, token: &str) -> Result<String, StatusCode> {
    let mut validation = Validation::default();
    // The auth service stamps its own audience; only signature and expiry matter here.
    validation.validate_aud = false;
    let data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(cfg.jwt_secret_pem.as_bytes()),
        &validation,
    )
    .map_err(|_| StatusCode::UNAUTHORIZED)?;
    Ok(data.claims.sub)
}

pub fn validate_bearer(cfg: &Config, bearer: Bearer) -> Result<String, StatusCode> {
    validate_bearer_str(cfg, &bearer.0)
}

/// Validates the token and parses its subject as the user id.
pub fn current_user(cfg: &Config, bearer: Bearer) -> Result<Uuid, StatusCode> {
    let sub = validate_bearer(cfg, bearer)?;
    Uuid::parse_str(&sub).map_err(|_| StatusCode::UNAUTHORIZED)
}

fn get_cookie(cookie_header: &str, name: &str) -> Option<String> {
    cookie_header.split(';').find_map(|pair| {
        let (k, v) = pair.trim().split_once('=')?;
        if k == name && !v.is_empty() {
            Some(v.to_string())
        } else {
            None
        }
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use jsonwebtoken::{EncodingKey, Header};

    use super::Claims;
    use crate::bootstrap::config::Config;

    pub fn token(cfg: &Config, sub: &str, exp_offset: i64) -> String {
        let exp = (chrono::Utc::now().timestamp() + exp_offset) as usize;
        jsonwebtoken::encode(
            &Header::default(),
            &Claims {
                sub: sub.to_string(),
                exp,
            },
            &EncodingKey::from_secret(cfg.jwt_secret_pem.as_bytes()),
        )
        .unwrap()
    }
}
