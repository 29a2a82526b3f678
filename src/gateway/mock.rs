//! Mock gateway implementations for isolating controllers in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::restaurant::Restaurant;
use crate::domain::types::{RestaurantId, UserId};
use crate::domain::user::{Admin, Customer, NewUser};
use crate::gateway::errors::GatewayResult;
use crate::gateway::{AuthTokens, CollectionGateway, RegistrationGateway};

mock! {
    pub AdminGateway {}

    #[async_trait]
    impl CollectionGateway<Admin> for AdminGateway {
        async fn list(&self) -> GatewayResult<Vec<Admin>>;
        async fn delete(&self, id: UserId) -> GatewayResult<()>;
    }
}

mock! {
    pub CustomerGateway {}

    #[async_trait]
    impl CollectionGateway<Customer> for CustomerGateway {
        async fn list(&self) -> GatewayResult<Vec<Customer>>;
        async fn delete(&self, id: UserId) -> GatewayResult<()>;
    }
}

mock! {
    pub RestaurantGateway {}

    #[async_trait]
    impl CollectionGateway<Restaurant> for RestaurantGateway {
        async fn list(&self) -> GatewayResult<Vec<Restaurant>>;
        async fn delete(&self, id: RestaurantId) -> GatewayResult<()>;
    }
}

mock! {
    pub RegistrationApi {}

    #[async_trait]
    impl RegistrationGateway for RegistrationApi {
        async fn register(&self, new_user: &NewUser) -> GatewayResult<AuthTokens>;
    }
}
