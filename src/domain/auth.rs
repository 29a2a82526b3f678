use serde::Deserialize;

/// Claims carried by the access token issued at registration or login.
#[derive(Clone, Debug, Deserialize)]
pub struct Claims {
    /// Username of the authenticated account.
    pub sub: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub exp: Option<u64>,
}

/// User identity decoded from the current access token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: String,
    pub role: Option<String>,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.sub,
            role: claims.role,
        }
    }
}
