//! # gymdesk-model - Typed Records for the Gymdesk Dashboard Core
//!
//! This crate defines the entity records exchanged with the Gymdesk backend,
//! modelled as structs with explicit optional fields rather than untyped
//! dictionaries. The backend owns all business logic; these types only give
//! the dashboard a compile-checked view of the wire shape.
//!
//! ## Entity Kinds
//!
//! | Type | Collection endpoint | List screen |
//! |------|--------------------|-------------|
//! | [`Coupon`] | `coupons` | Coupon table |
//! | [`GymPlan`] | `plans` | Plan table |
//! | [`Product`] | `products` | Product table |
//! | [`Location`] | `locations` | Location table |
//! | [`Enquiry`] | `enquiries` | Enquiry inbox |
//! | [`GuestPass`] | `guest-passes` | Guest pass list |
//! | [`ClassBooking`] | `bookings` | Booked classes |
//! | [`Feedback`] | `feedback` | Feedback table |
//! | [`AccessLogEntry`] | `access-logs` | Access log (read-only) |
//!
//! ## Wire Shape
//!
//! Records arrive in camelCase JSON with a Mongo-style `_id` identifier.
//! Every non-id field is optional: deserialization never fails because the
//! server omitted a field, and unrecognized fields are ignored. Date fields
//! are parsed leniently (see [`serde_helpers`]) so an unparseable timestamp
//! degrades to "absent" instead of rejecting the whole record.
//!
//! ## Traits
//!
//! - [`Entity`] names the collection endpoint and exposes the stable id used
//!   as a render key and as the target of row-level actions.
//! - [`ListEntry`] exposes the designated fields that list screens search and
//!   sort on. Absent fields report `None` and are sorted at lowest priority.
//! - [`Validate`] performs the local required-field checks a draft payload
//!   must pass before any request is issued.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod draft;
pub mod entity;
pub mod error;
pub mod records;
pub mod serde_helpers;

pub use draft::{CouponDraft, EnquiryDraft, GuestPassDraft, GymPlanDraft, Validate};
pub use entity::{Entity, ListEntry};
pub use error::ValidationError;
pub use records::{
    AccessLogEntry, ClassBooking, Coupon, Enquiry, Feedback, GuestPass, GymPlan, Location, Product,
};
