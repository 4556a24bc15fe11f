//! Value objects - entity kinds and audited operation kinds

mod entity_type;
mod operation;

pub use entity_type::{EntityType, ParseEnumError, StatusEntityType};
pub use operation::ChangeOperation;
