//! Data models for the Onewhero Bay server

pub mod admin;
pub mod attraction;
pub mod booking;
pub mod event;
pub mod visitor;

// Re-export commonly used types
pub use admin::{Admin, AdminClaims};
pub use attraction::Attraction;
pub use booking::{Booking, BookingStatus};
pub use event::Event;
pub use visitor::Visitor;
