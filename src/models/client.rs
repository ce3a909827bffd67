use mongodb::bson::oid::ObjectId;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// A resort guest. Updates replace the whole document (full-replace
/// strategy); see the clients handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub membership_level: String,
    pub preferences: Preferences,
    pub loyalty_points: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub updated_at: Option<DateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub room_type: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub dietary_restrictions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub preferred_activities: Option<Vec<String>>,
}
