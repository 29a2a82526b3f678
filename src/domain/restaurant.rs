use serde::{Deserialize, Serialize};

use crate::domain::ListRecord;
use crate::domain::types::RestaurantId;

/// Restaurant listing as returned by the restaurant API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: RestaurantId,
    /// Display name of the owning client account.
    pub client_name: String,
    pub name: String,
    pub style: String,
    pub location: String,
    pub cost: u32,
    pub overall_rating: f64,
    #[serde(default)]
    pub total_reviews: u32,
}

impl ListRecord for Restaurant {
    type Id = RestaurantId;

    fn id(&self) -> RestaurantId {
        self.id
    }

    /// Restaurants are searchable by name or location.
    fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.location.to_lowercase().contains(&query)
    }
}
