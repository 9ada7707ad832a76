//! HTTP basic authentication against a fixed credential map.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::WWW_AUTHENTICATE;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::headers::authorization::Basic;
use axum_extra::headers::{Authorization, HeaderMapExt as _};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use uuid::Uuid;

const REALM_CHALLENGE: &str = "Basic realm=\"Authentication Required\"";

/// A salted SHA-256 password secret.
///
/// One hash round, not a key-derivation function.
struct PasswordSecret {
    salt: String,
    digest: String,
}

impl PasswordSecret {
    fn generate(password: &str) -> Self {
        let salt = Uuid::new_v4().simple().to_string();
        let digest = salted_digest(&salt, password);
        Self { salt, digest }
    }

    fn verify(&self, password: &str) -> bool {
        let candidate = salted_digest(&self.salt, password);
        candidate.as_bytes().ct_eq(self.digest.as_bytes()).into()
    }
}

fn salted_digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Username → password secret map, built once at startup.
///
/// Plaintext passwords are hashed on construction and not retained.
pub struct Credentials {
    users: HashMap<String, PasswordSecret>,
    // Checked for unknown usernames so both failure paths hash once.
    decoy: PasswordSecret,
}

impl Credentials {
    pub fn from_pairs<I, U, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (U, P)>,
        U: Into<String>,
        P: AsRef<str>,
    {
        let users = pairs
            .into_iter()
            .map(|(user, password)| (user.into(), PasswordSecret::generate(password.as_ref())))
            .collect();
        Self {
            users,
            decoy: PasswordSecret::generate(""),
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn verify(&self, username: &str, password: &str) -> bool {
        match self.users.get(username) {
            Some(secret) => secret.verify(password),
            None => {
                let _ = self.decoy.verify(password);
                false
            }
        }
    }
}

/// A caller that presented valid basic-auth credentials.
///
/// Rejects with 401 and a `WWW-Authenticate: Basic` challenge when the header
/// is missing, malformed, or does not match. The response does not reveal
/// whether the username exists.
#[derive(Debug, Clone)]
pub struct BasicAuthUser {
    pub username: String,
}

impl<S> FromRequestParts<S> for BasicAuthUser
where
    S: Send + Sync,
    Arc<Credentials>: FromRef<S>,
{
    type Rejection = AuthRejection;

    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let credentials = Arc::<Credentials>::from_ref(state);
        let username = parts
            .headers
            .typed_get::<Authorization<Basic>>()
            .filter(|auth| credentials.verify(auth.username(), auth.password()))
            .map(|auth| auth.username().to_owned());

        async move {
            let username = username.ok_or(AuthRejection)?;
            Ok(Self { username })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            [(WWW_AUTHENTICATE, REALM_CHALLENGE)],
            "Unauthorized Access",
        )
            .into_response()
    }
}
