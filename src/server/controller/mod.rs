//! HTTP request handlers.
//!
//! Controllers extract the request, run the auth guard where a route needs one,
//! convert DTOs into params, call a service and turn the result back into a DTO.

pub mod api;
pub mod auth;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
