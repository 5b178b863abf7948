use serde::{Deserialize, Serialize};

/// Credentials posted to the user API's login endpoint. Verification
/// happens server-side; the client never downloads the user collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub correo: String,
    pub contrasena: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub usuario: SessionUser,
}

/// Signed-in user summary kept in the session context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub usuario_id: i64,
    pub correo: String,
    pub nombre: String,
}
