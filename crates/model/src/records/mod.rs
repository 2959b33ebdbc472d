//! Entity record types, one module per collection.
//!
//! Each record mirrors the camelCase JSON the backend returns, with every
//! non-id field optional and dates parsed leniently. The [`Entity`] impl
//! names the collection endpoint; the [`ListEntry`] impl designates the
//! fields its list screen searches and sorts on.
//!
//! [`Entity`]: crate::entity::Entity
//! [`ListEntry`]: crate::entity::ListEntry

mod access_log;
mod booking;
mod coupon;
mod enquiry;
mod feedback;
mod guest_pass;
mod location;
mod plan;
mod product;

pub use access_log::AccessLogEntry;
pub use booking::ClassBooking;
pub use coupon::Coupon;
pub use enquiry::Enquiry;
pub use feedback::Feedback;
pub use guest_pass::GuestPass;
pub use location::Location;
pub use plan::GymPlan;
pub use product::Product;
