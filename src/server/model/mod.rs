//! Domain models and operation-specific parameter types.
//!
//! Domain models are converted from SeaORM entities at the repository boundary and
//! into API DTOs at the controller boundary. `*Params` types carry validated input
//! from controllers into services.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
