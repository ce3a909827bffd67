pub mod activity;
pub mod client;
pub mod reservation;
pub mod restaurant;

pub use activity::{Activity, ScheduleSlot};
pub use client::{Client, Preferences};
pub use reservation::Reservation;
pub use restaurant::{MenuItem, Restaurant, TableReservation};
