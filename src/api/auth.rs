//! Auth Endpoints
//!
//! Login and registration against the store's `/auth` routes. These are
//! the only calls sent without a bearer credential.

use gloo_net::http::Request;
use serde::Serialize;

use super::{api_base, decode, ApiError};
use crate::models::AuthResponse;

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let resp = Request::post(&format!("{}/auth/login", api_base()))
        .json(&LoginBody { email, password })?
        .send()
        .await?;
    decode(resp).await
}

pub async fn register(name: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let resp = Request::post(&format!("{}/auth/register", api_base()))
        .json(&RegisterBody { name, email, password })?
        .send()
        .await?;
    decode(resp).await
}
