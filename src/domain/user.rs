use serde::{Deserialize, Serialize};

use crate::domain::ListRecord;
use crate::domain::types::UserId;

/// Platform administrator account as returned by the user API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: UserId,
    pub name: String,
    pub surname: String,
    pub username: String,
    pub email: String,
}

/// Customer account with its aggregate review count.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: UserId,
    pub name: String,
    pub surname: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub total_reviews: u32,
}

/// Role selected during registration.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Client,
    Customer,
}

/// Registration payload sent to the API.
///
/// Carries only what the server stores; the confirm-password field and the
/// accepted-terms flag never leave the form.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub role: UserRole,
}

impl ListRecord for Admin {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }

    fn matches(&self, query: &str) -> bool {
        self.username.to_lowercase().contains(&query.to_lowercase())
    }
}

impl ListRecord for Customer {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }

    fn matches(&self, query: &str) -> bool {
        self.username.to_lowercase().contains(&query.to_lowercase())
    }
}
