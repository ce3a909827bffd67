use mongodb::bson::oid::ObjectId;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// A bookable resort activity. Full-replace on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    pub activity_name: String,
    pub description: String,
    pub schedule: Vec<ScheduleSlot>,
    pub capacity: f64,
    pub price: f64,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub updated_at: Option<DateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub day: String,
    pub time: String,
}
