//! Domain models for the back-office API.
//!
//! These are plain data types owned by the persistence layer: every
//! operation round-trips to the store, and no in-process entity graph or
//! cache exists. Each model has two construction paths:
//!
//! - `new(...)` - create a fresh entity, generating its identifier and
//!   timestamps (the only place identifiers are assigned)
//! - struct literal from a storage row inside a repository - reconstruction
//!   of an already-persisted entity, trusted as-is

pub mod address;
pub mod category;
pub mod favorite;

pub use address::Address;
pub use category::Category;
pub use favorite::UserFavorite;
