//! Network and session boundaries consumed by the controllers.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::ListRecord;
use crate::domain::user::NewUser;
use crate::gateway::errors::GatewayResult;

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Remote list/delete operations for one resource collection.
#[async_trait]
pub trait CollectionGateway<T: ListRecord>: Send + Sync {
    async fn list(&self) -> GatewayResult<Vec<T>>;
    async fn delete(&self, id: T::Id) -> GatewayResult<()>;
}

/// Token pair returned by a successful registration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub access_token: String,
}

/// Account-creation endpoint.
#[async_trait]
pub trait RegistrationGateway: Send + Sync {
    async fn register(&self, new_user: &NewUser) -> GatewayResult<AuthTokens>;
}

/// Auth collaborator that decodes and persists an access token.
pub trait SessionSink: Send + Sync {
    fn set_user_from_token(&self, access_token: &str);
}

/// Navigation collaborator invoked after confirmed registration success.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, route: &str);
}
