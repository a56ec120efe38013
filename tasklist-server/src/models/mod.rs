//! Domain models with validation at construction
//!
//! Request bodies are coerced into these types at the HTTP boundary.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod item;
pub mod requests;

pub use validation::ValidationError;
pub use item::{Item, ItemText};
pub use requests::{ClearCompletedResponse, CreateItemRequest, ItemPatch, UpdateItemRequest};
