//! Per-resource, per-operation validation contracts. The rule tables mirror
//! the required-field sets of each resource; presence semantics are encoded
//! per field (see the module docs in [`super`]).

use serde_json::Value;

use super::{
    parse_date, validate_partial, validate_required, FieldKind, FieldRule, Requirement,
    ValidationFailure,
};

// Clients: full-required contract for both create and update (full replace).
// loyaltyPoints is Present, not Truthy: zero points is a legitimate value.

static CLIENT_PREFERENCE_FIELDS: &[FieldRule] = &[
    FieldRule {
        name: "roomType",
        requirement: Requirement::Truthy,
        kind: FieldKind::String,
    },
    FieldRule {
        name: "dietaryRestrictions",
        requirement: Requirement::Optional,
        kind: FieldKind::Array(&FieldKind::String),
    },
    FieldRule {
        name: "preferredActivities",
        requirement: Requirement::Optional,
        kind: FieldKind::Array(&FieldKind::String),
    },
];

static CLIENT_FIELDS: &[FieldRule] = &[
    FieldRule {
        name: "name",
        requirement: Requirement::Truthy,
        kind: FieldKind::String,
    },
    FieldRule {
        name: "phone",
        requirement: Requirement::Truthy,
        kind: FieldKind::String,
    },
    FieldRule {
        name: "email",
        requirement: Requirement::Truthy,
        kind: FieldKind::Email,
    },
    FieldRule {
        name: "address",
        requirement: Requirement::Truthy,
        kind: FieldKind::String,
    },
    FieldRule {
        name: "membershipLevel",
        requirement: Requirement::Truthy,
        kind: FieldKind::String,
    },
    FieldRule {
        name: "preferences",
        requirement: Requirement::Truthy,
        kind: FieldKind::Object(CLIENT_PREFERENCE_FIELDS),
    },
    FieldRule {
        name: "loyaltyPoints",
        requirement: Requirement::Present,
        kind: FieldKind::Number,
    },
];

pub fn client_create(body: &Value) -> Result<(), ValidationFailure> {
    validate_required(CLIENT_FIELDS, body, "Missing required fields")
}

pub fn client_update(body: &Value) -> Result<(), ValidationFailure> {
    validate_required(CLIENT_FIELDS, body, "Missing required fields")
}

// Activities: full-required contract; status is Present (empty string allowed).

static SCHEDULE_SLOT_FIELDS: &[FieldRule] = &[
    FieldRule {
        name: "day",
        requirement: Requirement::Truthy,
        kind: FieldKind::String,
    },
    FieldRule {
        name: "time",
        requirement: Requirement::Truthy,
        kind: FieldKind::String,
    },
];

static ACTIVITY_FIELDS: &[FieldRule] = &[
    FieldRule {
        name: "activityName",
        requirement: Requirement::Truthy,
        kind: FieldKind::String,
    },
    FieldRule {
        name: "description",
        requirement: Requirement::Truthy,
        kind: FieldKind::String,
    },
    FieldRule {
        name: "schedule",
        requirement: Requirement::Truthy,
        kind: FieldKind::Array(&FieldKind::Object(SCHEDULE_SLOT_FIELDS)),
    },
    FieldRule {
        name: "capacity",
        requirement: Requirement::Truthy,
        kind: FieldKind::Number,
    },
    FieldRule {
        name: "price",
        requirement: Requirement::Truthy,
        kind: FieldKind::Number,
    },
    FieldRule {
        name: "status",
        requirement: Requirement::Present,
        kind: FieldKind::String,
    },
];

pub fn activity_create(body: &Value) -> Result<(), ValidationFailure> {
    validate_required(ACTIVITY_FIELDS, body, "Missing required fields")
}

pub fn activity_update(body: &Value) -> Result<(), ValidationFailure> {
    validate_required(ACTIVITY_FIELDS, body, "Missing required fields")
}

// Reservations: full-required create with a cross-field date-order rule;
// partial-merge update where totalPrice counts as provided even when zero.

static RESERVATION_FIELDS: &[FieldRule] = &[
    FieldRule {
        name: "clientId",
        requirement: Requirement::Truthy,
        kind: FieldKind::String,
    },
    FieldRule {
        name: "roomType",
        requirement: Requirement::Truthy,
        kind: FieldKind::String,
    },
    FieldRule {
        name: "checkInDate",
        requirement: Requirement::Truthy,
        kind: FieldKind::Date,
    },
    FieldRule {
        name: "checkOutDate",
        requirement: Requirement::Truthy,
        kind: FieldKind::Date,
    },
    FieldRule {
        name: "status",
        requirement: Requirement::Truthy,
        kind: FieldKind::String,
    },
    FieldRule {
        name: "totalPrice",
        requirement: Requirement::Truthy,
        kind: FieldKind::Number,
    },
    FieldRule {
        name: "paymentStatus",
        requirement: Requirement::Truthy,
        kind: FieldKind::String,
    },
];

static RESERVATION_UPDATE_FIELDS: &[FieldRule] = &[
    FieldRule {
        name: "clientId",
        requirement: Requirement::Truthy,
        kind: FieldKind::String,
    },
    FieldRule {
        name: "roomType",
        requirement: Requirement::Truthy,
        kind: FieldKind::String,
    },
    FieldRule {
        name: "checkInDate",
        requirement: Requirement::Truthy,
        kind: FieldKind::Date,
    },
    FieldRule {
        name: "checkOutDate",
        requirement: Requirement::Truthy,
        kind: FieldKind::Date,
    },
    FieldRule {
        name: "status",
        requirement: Requirement::Truthy,
        kind: FieldKind::String,
    },
    FieldRule {
        name: "totalPrice",
        requirement: Requirement::Present,
        kind: FieldKind::Number,
    },
    FieldRule {
        name: "paymentStatus",
        requirement: Requirement::Truthy,
        kind: FieldKind::String,
    },
];

pub fn reservation_create(body: &Value) -> Result<(), ValidationFailure> {
    validate_required(RESERVATION_FIELDS, body, "All fields are required")?;

    // Both dates are known to parse at this point
    let check_in = body["checkInDate"].as_str().and_then(parse_date);
    let check_out = body["checkOutDate"].as_str().and_then(parse_date);
    if let (Some(check_in), Some(check_out)) = (check_in, check_out) {
        if check_in >= check_out {
            return Err(ValidationFailure::new(
                "Check-out date must be after check-in date",
            ));
        }
    }
    Ok(())
}

pub fn reservation_update(body: &Value) -> Result<(), ValidationFailure> {
    validate_partial(
        RESERVATION_UPDATE_FIELDS,
        body,
        "At least one field must be provided for update",
    )
}

// Restaurants: full-required create, partial-merge update. The embedded
// `reservations` entries are table bookings, unrelated to the reservations
// collection.

static MENU_ITEM_FIELDS: &[FieldRule] = &[
    FieldRule {
        name: "itemName",
        requirement: Requirement::Truthy,
        kind: FieldKind::String,
    },
    FieldRule {
        name: "price",
        requirement: Requirement::Present,
        kind: FieldKind::Number,
    },
    FieldRule {
        name: "dietaryInfo",
        requirement: Requirement::Present,
        kind: FieldKind::Array(&FieldKind::String),
    },
];

static TABLE_RESERVATION_FIELDS: &[FieldRule] = &[
    FieldRule {
        name: "reservationDate",
        requirement: Requirement::Truthy,
        kind: FieldKind::Date,
    },
    FieldRule {
        name: "numOfGuests",
        requirement: Requirement::Present,
        kind: FieldKind::Number,
    },
    FieldRule {
        name: "status",
        requirement: Requirement::Truthy,
        kind: FieldKind::String,
    },
];

static RESTAURANT_FIELDS: &[FieldRule] = &[
    FieldRule {
        name: "restaurantName",
        requirement: Requirement::Truthy,
        kind: FieldKind::String,
    },
    FieldRule {
        name: "cuisineType",
        requirement: Requirement::Truthy,
        kind: FieldKind::String,
    },
    FieldRule {
        name: "menu",
        requirement: Requirement::Truthy,
        kind: FieldKind::Array(&FieldKind::Object(MENU_ITEM_FIELDS)),
    },
    FieldRule {
        name: "reservations",
        requirement: Requirement::Truthy,
        kind: FieldKind::Array(&FieldKind::Object(TABLE_RESERVATION_FIELDS)),
    },
    FieldRule {
        name: "location",
        requirement: Requirement::Truthy,
        kind: FieldKind::String,
    },
];

pub fn restaurant_create(body: &Value) -> Result<(), ValidationFailure> {
    validate_required(RESTAURANT_FIELDS, body, "All fields are required")
}

pub fn restaurant_update(body: &Value) -> Result<(), ValidationFailure> {
    validate_partial(
        RESTAURANT_FIELDS,
        body,
        "At least one field must be provided for update",
    )
}
