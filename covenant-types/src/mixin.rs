//! The Mixin interface — named bundles of operations.

use crate::handler::Handler;
use std::fmt;
use std::sync::Arc;

/// Whether an operation changes state.
///
/// Variants apply their guard to `Write` operations when mounting a mixin.
/// `Read` operations stay open unless the variant guards them explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// Returns data, never mutates.
    Read,
    /// Mutates state.
    Write,
}

/// One named operation contributed by a mixin.
pub struct Operation<S> {
    /// The operation name matched against `input.function`.
    pub name: &'static str,
    /// Read or write.
    pub access: Access,
    /// The unguarded operation body.
    pub handler: Arc<dyn Handler<S>>,
}

impl<S> Operation<S> {
    /// A state-changing operation.
    pub fn write(name: &'static str, handler: impl Handler<S> + 'static) -> Self {
        Self {
            name,
            access: Access::Write,
            handler: Arc::new(handler),
        }
    }

    /// A read-only operation.
    pub fn read(name: &'static str, handler: impl Handler<S> + 'static) -> Self {
        Self {
            name,
            access: Access::Read,
            handler: Arc::new(handler),
        }
    }
}

impl<S> Clone for Operation<S> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            access: self.access,
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<S> fmt::Debug for Operation<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("name", &self.name)
            .field("access", &self.access)
            .finish_non_exhaustive()
    }
}

/// A capability that contributes operations to a variant.
///
/// A mixin only knows the slice of state it works on (through a trait bound
/// on `S`) and the unguarded bodies of its operations. Each mixin owns a
/// disjoint set of operation names, so mounting mixins in any order yields
/// the same table.
pub trait Mixin<S>: Send + Sync {
    /// Short name used in logs and duplicate-operation diagnostics.
    fn name(&self) -> &'static str;

    /// The operations this mixin contributes.
    fn operations(&self) -> Vec<Operation<S>>;
}
