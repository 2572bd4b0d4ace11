//! Domain entities.

pub mod user;

pub use user::{Coordinates, Location, User};
