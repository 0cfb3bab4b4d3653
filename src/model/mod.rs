//! Plain data structures (DTOs) shared by every derivation in the crate.
//!
//! They mirror the shapes the host's fetch layer hands over and deserialize
//! from its camelCase JSON.

pub mod order;
pub mod payment;
pub mod prescription;
pub mod shipping;

pub use order::*;
pub use payment::*;
pub use prescription::*;
pub use shipping::*;
