//! Star Wars catalog REST backend.
//!
//! `model` holds the JSON DTOs exchanged with clients; `server` holds everything
//! that runs behind the HTTP listener.

pub mod model;
pub mod server;
