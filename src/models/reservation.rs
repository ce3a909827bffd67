use mongodb::bson::oid::ObjectId;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// A room reservation. `client_id` references a document in the clients
/// collection but is not enforced at write time. Partial-merge on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    pub client_id: ObjectId,
    pub room_type: String,
    pub check_in_date: DateTime,
    pub check_out_date: DateTime,
    pub status: String,
    pub total_price: f64,
    pub payment_status: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub updated_at: Option<DateTime>,
}
