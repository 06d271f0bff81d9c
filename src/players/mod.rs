//! The player contract.
//!
//! ## Key Types
//!
//! - `Player`: decision policy supplied by the caller
//! - `Turn`: what a policy may see and do during its turn
//! - `Seat`: hand and hand size the engine keeps per player

pub mod policy;
pub mod seat;
pub mod turn;

pub use policy::Player;
pub use seat::Seat;
pub use turn::{Play, Turn};
