//! Reqwest-backed implementation of the gateway traits.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::domain::ListRecord;
use crate::domain::restaurant::Restaurant;
use crate::domain::user::{Admin, Customer, NewUser};
use crate::gateway::errors::GatewayResult;
use crate::gateway::{AuthTokens, CollectionGateway, RegistrationGateway};
use crate::session::Session;

/// Shared HTTP client for the Likeat API.
///
/// Requests carry a bearer token whenever the session holds one, so a token
/// obtained through registration is picked up by subsequent calls without
/// rebuilding the gateways. Cloning is cheap; the underlying connection
/// pool is shared.
#[derive(Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>, session: Arc<Session>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        let builder = self.client.request(method, url);
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Typed handle on the admin collection.
    pub fn admins(&self) -> HttpCollectionGateway<Admin> {
        HttpCollectionGateway::new(self.clone(), "admins")
    }

    /// Typed handle on the customer collection.
    pub fn customers(&self) -> HttpCollectionGateway<Customer> {
        HttpCollectionGateway::new(self.clone(), "customers")
    }

    /// Typed handle on the restaurant collection.
    pub fn restaurants(&self) -> HttpCollectionGateway<Restaurant> {
        HttpCollectionGateway::new(self.clone(), "restaurants")
    }
}

/// List/delete endpoints for one resource collection.
pub struct HttpCollectionGateway<T> {
    api: HttpApi,
    path: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> HttpCollectionGateway<T> {
    fn new(api: HttpApi, path: &'static str) -> Self {
        Self {
            api,
            path,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<T> CollectionGateway<T> for HttpCollectionGateway<T>
where
    T: ListRecord + DeserializeOwned,
{
    async fn list(&self) -> GatewayResult<Vec<T>> {
        let url = format!("{}/{}", self.api.base_url, self.path);
        let response = self
            .api
            .request(reqwest::Method::GET, &url)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn delete(&self, id: T::Id) -> GatewayResult<()> {
        let url = format!("{}/{}/{}", self.api.base_url, self.path, id);
        self.api
            .request(reqwest::Method::DELETE, &url)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[async_trait]
impl RegistrationGateway for HttpApi {
    async fn register(&self, new_user: &NewUser) -> GatewayResult<AuthTokens> {
        let url = format!("{}/register", self.base_url);
        let response = self
            .request(reqwest::Method::POST, &url)
            .json(new_user)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}
