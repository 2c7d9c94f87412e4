//! Domain models with validation at construction
//!
//! Request input is validated when these types are built.
//! Invalid input returns ValidationError, not panic.

pub mod favorite;
pub mod name;
pub mod validation;

pub use favorite::{FavoriteKind, FavoriteTarget};
pub use name::{EntityName, Username};
pub use validation::ValidationError;
