use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::usuarios_url;

/// Login failure as the UI needs to tell it apart: a rejected credential
/// check versus not reaching the server at all. The rejection carries no
/// detail, so "unknown user" and "wrong password" are indistinguishable.
pub enum LoginError {
    InvalidCredentials,
    Network(String),
}

/// Login with email and password. The credential check happens
/// server-side; the client never downloads the user collection.
pub async fn login(correo: String, contrasena: String) -> Result<LoginResponse, LoginError> {
    let request = LoginRequest { correo, contrasena };

    let response = Request::post(&usuarios_url("/auth/login"))
        .json(&request)
        .map_err(|e| LoginError::Network(format!("failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| LoginError::Network(format!("failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(LoginError::InvalidCredentials);
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| LoginError::Network(format!("failed to parse response: {}", e)))
}
