//! Service layer: collaborators the API consumes but does not own.

pub mod auth;
