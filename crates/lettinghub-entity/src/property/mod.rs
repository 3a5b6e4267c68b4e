//! Property domain entities.

pub mod house_type;
pub mod location;
pub mod model;

pub use house_type::HouseType;
pub use location::LocationType;
pub use model::{CreateProperty, Property};
