use mongodb::bson::oid::ObjectId;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// A resort restaurant. Its embedded `reservations` are table bookings,
/// deliberately distinct from the top-level reservations collection.
/// Partial-merge on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    pub restaurant_name: String,
    pub cuisine_type: String,
    pub menu: Vec<MenuItem>,
    pub reservations: Vec<TableReservation>,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub updated_at: Option<DateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub item_name: String,
    pub price: f64,
    pub dietary_info: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableReservation {
    pub reservation_date: DateTime,
    pub num_of_guests: f64,
    pub status: String,
}
