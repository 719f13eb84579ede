//! Cross-cutting helpers used by controllers, services and middleware.

pub mod jwt;
pub mod password;
pub mod validate;
