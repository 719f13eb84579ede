//! Request and response bodies shared by every API route.

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
