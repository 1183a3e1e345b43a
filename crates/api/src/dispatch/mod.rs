//! Command/query dispatch.
//!
//! Every back-office operation is an immutable request value - a [`Command`]
//! (state change, no result) or a [`Query`] (read, typed result) - bound to
//! exactly one handler. The [`Dispatcher`] is a type-indexed registry built
//! once at startup by the composition root: registering two handlers for the
//! same request type fails at build time, never per-request.
//!
//! Handlers hold their store dependencies behind trait objects, so the same
//! wiring runs against `PostgreSQL` in production and the in-memory stores
//! in tests. Cancellation needs no explicit signal: dropping the dispatch
//! future (e.g. when the HTTP client disconnects) abandons the in-flight
//! store call.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ApiError;

/// A request describing an intended state change. No meaningful return
/// value beyond success or failure.
pub trait Command: Send + 'static {}

/// A request describing a read, returning a typed (possibly absent) result.
pub trait Query: Send + 'static {
    /// The result type this query produces.
    type Output: Send + 'static;
}

/// The single unit of logic bound to one command type.
#[async_trait]
pub trait CommandHandler<C: Command>: Send + Sync {
    /// Execute the command.
    async fn handle(&self, cmd: C) -> Result<(), ApiError>;
}

/// The single unit of logic bound to one query type.
#[async_trait]
pub trait QueryHandler<Q: Query>: Send + Sync {
    /// Execute the query and return its result.
    async fn handle(&self, query: Q) -> Result<Q::Output, ApiError>;
}

/// Errors from dispatcher construction and resolution.
#[derive(Debug, Clone, Copy, thiserror::Error)]
pub enum DispatchError {
    /// A second handler was registered for an already-bound request type.
    /// Fatal at startup.
    #[error("duplicate handler registered for {0}")]
    DuplicateHandler(&'static str),

    /// No handler is bound to the dispatched request type. Unreachable once
    /// the composition root has wired every request type.
    #[error("no handler registered for {0}")]
    NotRegistered(&'static str),
}

// Concrete wrapper types so handlers can be recovered from `dyn Any` by
// downcasting on the request type.
struct StoredCommand<C: Command>(Arc<dyn CommandHandler<C>>);
struct StoredQuery<Q: Query>(Arc<dyn QueryHandler<Q>>);

type AnyHandler = Box<dyn Any + Send + Sync>;

/// Builder for the [`Dispatcher`]. Enforces handler uniqueness per request
/// type at registration time.
#[derive(Default)]
pub struct DispatcherBuilder {
    handlers: HashMap<TypeId, AnyHandler>,
}

impl DispatcherBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler` as the single handler for command type `C`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::DuplicateHandler`] if `C` is already bound.
    pub fn register_command<C, H>(mut self, handler: H) -> Result<Self, DispatchError>
    where
        C: Command,
        H: CommandHandler<C> + 'static,
    {
        match self.handlers.entry(TypeId::of::<C>()) {
            Entry::Occupied(_) => Err(DispatchError::DuplicateHandler(type_name::<C>())),
            Entry::Vacant(slot) => {
                slot.insert(Box::new(StoredCommand::<C>(Arc::new(handler))));
                Ok(self)
            }
        }
    }

    /// Bind `handler` as the single handler for query type `Q`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::DuplicateHandler`] if `Q` is already bound.
    pub fn register_query<Q, H>(mut self, handler: H) -> Result<Self, DispatchError>
    where
        Q: Query,
        H: QueryHandler<Q> + 'static,
    {
        match self.handlers.entry(TypeId::of::<Q>()) {
            Entry::Occupied(_) => Err(DispatchError::DuplicateHandler(type_name::<Q>())),
            Entry::Vacant(slot) => {
                slot.insert(Box::new(StoredQuery::<Q>(Arc::new(handler))));
                Ok(self)
            }
        }
    }

    /// Freeze the registry.
    #[must_use]
    pub fn build(self) -> Dispatcher {
        Dispatcher {
            handlers: Arc::new(self.handlers),
        }
    }
}

/// Resolves each request instance to its single handler and invokes it.
///
/// Cheaply cloneable; the registry is immutable after
/// [`DispatcherBuilder::build`].
#[derive(Clone)]
pub struct Dispatcher {
    handlers: Arc<HashMap<TypeId, AnyHandler>>,
}

impl Dispatcher {
    /// Execute a command.
    ///
    /// # Errors
    ///
    /// Returns whatever error the handler surfaces, or
    /// [`DispatchError::NotRegistered`] if `C` was never wired.
    pub async fn execute<C: Command>(&self, cmd: C) -> Result<(), ApiError> {
        let stored = self
            .handlers
            .get(&TypeId::of::<C>())
            .and_then(|h| h.downcast_ref::<StoredCommand<C>>())
            .ok_or(DispatchError::NotRegistered(type_name::<C>()))?;
        stored.0.handle(cmd).await
    }

    /// Execute a query and return its result.
    ///
    /// # Errors
    ///
    /// Returns whatever error the handler surfaces, or
    /// [`DispatchError::NotRegistered`] if `Q` was never wired.
    pub async fn query<Q: Query>(&self, query: Q) -> Result<Q::Output, ApiError> {
        let stored = self
            .handlers
            .get(&TypeId::of::<Q>())
            .and_then(|h| h.downcast_ref::<StoredQuery<Q>>())
            .ok_or(DispatchError::NotRegistered(type_name::<Q>()))?;
        stored.0.handle(query).await
    }
}
