//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let luke = factory::character::create_character(&db).await?;
//!
//!     // Mark it as a favorite of the user
//!     factory::favorite::create_favorite_character(&db, user.id, luke.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("leia@alderaan.gov")
//!     .password("help-me-obi-wan")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities with hashed passwords
//! - `character` - Create character entities
//! - `planet` - Create planet entities
//! - `favorite` - Create favorite join rows
//! - `helpers` - Unique id generation

pub mod character;
pub mod favorite;
pub mod helpers;
pub mod planet;
pub mod user;

pub use character::create_character;
pub use favorite::{create_favorite_character, create_favorite_planet};
pub use planet::create_planet;
pub use user::create_user;
