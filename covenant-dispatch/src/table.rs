//! Dispatch table: register, mount, and dispatch operations.

use crate::guarded::Guarded;
use covenant_guard::Unguarded;
use covenant_types::{
    Access, Contract, ContractError, Guard, Handler, HandlerResult, Interaction, Mixin,
};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

struct Route<S> {
    mixin: &'static str,
    access: Access,
    entry: Guarded<S>,
}

/// A composed contract variant: operation name → (guard, handler).
///
/// Each operation name resolves to exactly one route. Registering a name
/// twice is a construction bug and panics, which is what makes mount order
/// irrelevant: mixins own disjoint names, so any mount order produces the
/// same map.
pub struct DispatchTable<S> {
    name: String,
    routes: BTreeMap<&'static str, Route<S>>,
}

impl<S> DispatchTable<S> {
    /// Create an empty table for the named variant.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            routes: BTreeMap::new(),
        }
    }

    /// Register one guarded operation.
    ///
    /// # Panics
    ///
    /// Panics if `operation` is already registered.
    pub fn route(
        &mut self,
        operation: &'static str,
        access: Access,
        entry: Guarded<S>,
    ) -> &mut Self {
        self.insert("custom", operation, access, entry);
        self
    }

    /// Mount a mixin. Its `Write` operations sit behind `guard`; its
    /// `Read` operations stay open.
    ///
    /// # Panics
    ///
    /// Panics if the mixin contributes an operation name that is already
    /// registered.
    pub fn mount(&mut self, mixin: &dyn Mixin<S>, guard: impl Guard<S> + 'static) -> &mut Self
    where
        S: 'static,
    {
        let guard: Arc<dyn Guard<S>> = Arc::new(guard);
        let open: Arc<dyn Guard<S>> = Arc::new(Unguarded);
        for op in mixin.operations() {
            let gate = match op.access {
                Access::Write => Arc::clone(&guard),
                Access::Read => Arc::clone(&open),
            };
            self.insert(mixin.name(), op.name, op.access, Guarded::new(gate, op.handler));
        }
        self
    }

    /// Mount a mixin with every operation, reads included, behind `guard`.
    ///
    /// # Panics
    ///
    /// Panics on a duplicate operation name, as [`DispatchTable::mount`].
    pub fn mount_all(&mut self, mixin: &dyn Mixin<S>, guard: impl Guard<S> + 'static) -> &mut Self
    where
        S: 'static,
    {
        let guard: Arc<dyn Guard<S>> = Arc::new(guard);
        for op in mixin.operations() {
            self.insert(
                mixin.name(),
                op.name,
                op.access,
                Guarded::new(Arc::clone(&guard), op.handler),
            );
        }
        self
    }

    fn insert(&mut self, mixin: &'static str, operation: &'static str, access: Access, entry: Guarded<S>) {
        if let Some(existing) = self.routes.get(operation) {
            panic!(
                "{}: operation `{operation}` from `{mixin}` is already provided by `{}`",
                self.name, existing.mixin
            );
        }
        self.routes.insert(operation, Route { mixin, access, entry });
    }

    /// Variant name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every registered operation, sorted.
    pub fn operations(&self) -> Vec<&'static str> {
        self.routes.keys().copied().collect()
    }

    /// Whether `operation` is registered.
    pub fn contains(&self, operation: &str) -> bool {
        self.routes.contains_key(operation)
    }

    /// Read or write, for a registered operation.
    pub fn access(&self, operation: &str) -> Option<Access> {
        self.routes.get(operation).map(|r| r.access)
    }

    /// Who may call `operation`, phrased like an `Unauthorized` message.
    pub fn requirement(&self, operation: &str) -> Option<String> {
        self.routes
            .get(operation)
            .map(|r| r.entry.guard().requirement())
    }

    /// Resolve the operation, run its guard, then its handler.
    ///
    /// Unknown operations fail with [`ContractError::InvalidOperation`].
    /// On any error the state is left as it was.
    pub fn apply(&self, state: &mut S, action: &Interaction) -> Result<Value, ContractError> {
        let operation = action.operation();
        let Some(route) = self.routes.get(operation) else {
            tracing::debug!(contract = %self.name, operation, "unknown operation");
            return Err(ContractError::InvalidOperation(operation.to_owned()));
        };

        tracing::debug!(
            contract = %self.name,
            operation,
            caller = %action.caller,
            mixin = route.mixin,
            "dispatching"
        );

        route.entry.call(state, action).inspect_err(|error| {
            tracing::debug!(
                contract = %self.name,
                operation,
                caller = %action.caller,
                kind = error.kind(),
                %error,
                "operation rejected"
            );
        })
    }

    /// Consume a state, apply one interaction and return the new state.
    pub fn dispatch(&self, mut state: S, action: &Interaction) -> Result<HandlerResult<S>, ContractError> {
        let result = self.apply(&mut state, action)?;
        Ok(HandlerResult::new(state, result))
    }
}

impl<S> fmt::Debug for DispatchTable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchTable")
            .field("name", &self.name)
            .field("operations", &self.operations())
            .finish()
    }
}

impl<S> Contract for DispatchTable<S> {
    type State = S;

    fn name(&self) -> &str {
        &self.name
    }

    fn operations(&self) -> Vec<&'static str> {
        DispatchTable::operations(self)
    }

    fn apply(&self, state: &mut S, action: &Interaction) -> Result<Value, ContractError> {
        DispatchTable::apply(self, state, action)
    }
}
