#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use likeat_admin::domain::ListRecord;
use likeat_admin::domain::restaurant::Restaurant;
use likeat_admin::domain::types::{RestaurantId, UserId};
use likeat_admin::domain::user::{Customer, NewUser};
use likeat_admin::gateway::errors::{GatewayError, GatewayResult};
use likeat_admin::gateway::{
    AuthTokens, CollectionGateway, Navigator, RegistrationGateway, SessionSink,
};

/// Unsigned but well-formed JWT: `{"sub":"maria","role":"ADMIN"}`.
pub const TEST_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiJtYXJpYSIsInJvbGUiOiJBRE1JTiIsImV4cCI6NDEwMjQ0NDgwMH0.c2ln";

/// Stateful gateway over a vector, with failure toggles per operation.
pub struct InMemoryGateway<T: ListRecord> {
    items: Mutex<Vec<T>>,
    fail_list: AtomicBool,
    fail_delete: AtomicBool,
}

impl<T: ListRecord> InMemoryGateway<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: Mutex::new(items),
            fail_list: AtomicBool::new(false),
            fail_delete: AtomicBool::new(false),
        }
    }

    pub fn set_fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_delete(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }

    pub fn stored(&self) -> Vec<T> {
        self.items.lock().unwrap().clone()
    }
}

#[async_trait]
impl<T: ListRecord> CollectionGateway<T> for InMemoryGateway<T> {
    async fn list(&self) -> GatewayResult<Vec<T>> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(GatewayError::Transport("connection refused".to_string()));
        }
        Ok(self.items.lock().unwrap().clone())
    }

    async fn delete(&self, id: T::Id) -> GatewayResult<()> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(GatewayError::Server(500));
        }
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|record| record.id() != id);
        if items.len() == before {
            return Err(GatewayError::NotFound);
        }
        Ok(())
    }
}

pub fn customer(id: i64, username: &str) -> Customer {
    Customer {
        id: UserId::new(id).unwrap(),
        name: "Test".to_string(),
        surname: "User".to_string(),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        total_reviews: 0,
    }
}

pub fn restaurant(id: i64, name: &str, location: &str) -> Restaurant {
    Restaurant {
        id: RestaurantId::new(id).unwrap(),
        client_name: "Owner".to_string(),
        name: name.to_string(),
        style: "Bistro".to_string(),
        location: location.to_string(),
        cost: 3,
        overall_rating: 4.2,
        total_reviews: 17,
    }
}

/// Session fake recording every token handed over.
#[derive(Default)]
pub struct RecordingSession {
    pub tokens: Mutex<Vec<String>>,
}

impl SessionSink for RecordingSession {
    fn set_user_from_token(&self, access_token: &str) {
        self.tokens.lock().unwrap().push(access_token.to_string());
    }
}

/// Navigation fake recording every visited route.
#[derive(Default)]
pub struct RecordingNavigator {
    pub routes: Mutex<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, route: &str) {
        self.routes.lock().unwrap().push(route.to_string());
    }
}

/// Registration endpoint stub counting calls and capturing payloads.
#[derive(Default)]
pub struct StubRegistrationGateway {
    pub fail: AtomicBool,
    pub calls: AtomicUsize,
    pub last_user: Mutex<Option<NewUser>>,
}

impl StubRegistrationGateway {
    pub fn failing() -> Self {
        let stub = Self::default();
        stub.fail.store(true, Ordering::SeqCst);
        stub
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RegistrationGateway for StubRegistrationGateway {
    async fn register(&self, new_user: &NewUser) -> GatewayResult<AuthTokens> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_user.lock().unwrap() = Some(new_user.clone());
        if self.fail.load(Ordering::SeqCst) {
            return Err(GatewayError::Server(500));
        }
        Ok(AuthTokens {
            access_token: TEST_TOKEN.to_string(),
        })
    }
}
