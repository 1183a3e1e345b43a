//! Clementine API library.
//!
//! This crate provides the back-office API as a library, allowing it to be
//! tested and reused (the CLI links against it for migrations, seeding, and
//! token minting).
//!
//! # Architecture
//!
//! Every operation flows the same way: an HTTP controller constructs an
//! immutable command or query, the [`dispatch::Dispatcher`] resolves its
//! single handler, the handler forwards to a store trait, and the result
//! flows back unchanged. There is no in-process entity graph or cache;
//! every operation round-trips to `PostgreSQL`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod dispatch;
pub mod error;
pub mod middleware;
pub mod models;
pub mod ops;
pub mod routes;
pub mod services;
pub mod state;
