use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use axum_extra::TypedHeader;
use chrono::{Duration, Utc};
use headers::{Authorization, authorization::Bearer};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user ID from the auth provider
    #[serde(default)]
    pub moderator: bool,
    pub exp: usize, // expiration time
}

pub struct AuthClaims(pub Claims);

impl<S> FromRequestParts<S> for AuthClaims
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, _state)
                .await
                .map_err(|_| {
                    (
                        StatusCode::UNAUTHORIZED,
                        "Missing or invalid Authorization header".into(),
                    )
                })?;

        AuthClaims::from_token(bearer.token())
    }
}

impl AuthClaims {
    pub fn from_token(token: &str) -> Result<Self, (StatusCode, String)> {
        let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|_| (StatusCode::UNAUTHORIZED, "Invalid or expired token".into()))?;

        Ok(Self(token_data.claims))
    }
}

/// Optional user context for public endpoints (feed, distribution). An absent or
/// invalid bearer token yields `None` instead of rejecting the request.
pub struct MaybeUser(pub Option<Claims>);

impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let bearer = TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await;

        let claims = match bearer {
            Ok(TypedHeader(Authorization(bearer))) => AuthClaims::from_token(bearer.token())
                .ok()
                .map(|AuthClaims(claims)| claims),
            Err(_) => None,
        };

        Ok(Self(claims))
    }
}

pub struct ModeratorClaims(pub Claims);

impl<S> FromRequestParts<S> for ModeratorClaims
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthClaims(claims) = AuthClaims::from_request_parts(parts, state).await?;

        if !claims.moderator {
            return Err((StatusCode::UNAUTHORIZED, "Moderator access required".into()));
        }

        Ok(Self(claims))
    }
}

pub fn generate_jwt(user_id: &str, moderator: bool) -> Result<String, AppError> {
    let expiration = (Utc::now() + Duration::hours(24)).timestamp() as usize;
    let claims = Claims {
        sub: user_id.to_string(),
        moderator,
        exp: expiration,
    };

    let secret = std::env::var("JWT_SECRET").map_err(|e| AppError::EnvError(e.to_string()))?;
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(AppError::JwtError)
}
