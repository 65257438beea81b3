//! Curried filling: one parameter value per call, in declaration order.
//!
//! Instead of nesting a closure per parameter, a curried fill carries a
//! [`PartialFill`]: the route's pieces plus the values resolved so far.
//! Each [`Step::apply`] resolves the next pending parameter and hands the
//! list to the step for the remaining shape, until [`Nil`] renders the
//! final string.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::param::ParamSpec;
use crate::shape::{Cons, Nil, Optional, Shape, Slot};
use crate::template::{Piece, substitute};

/// An in-progress fill: the template pieces plus the values resolved so far.
#[derive(Clone)]
pub struct PartialFill {
    pieces: Arc<[Piece]>,
    values: Vec<Option<String>>,
}

impl PartialFill {
    pub(crate) fn new(pieces: Arc<[Piece]>) -> Self {
        Self {
            pieces,
            values: Vec::new(),
        }
    }

    /// Number of parameters already resolved.
    #[must_use]
    pub fn resolved(&self) -> usize {
        self.values.len()
    }

    /// Parameters still waiting for a value, in the order they will be asked for.
    pub fn pending(&self) -> impl Iterator<Item = &ParamSpec> {
        self.pieces
            .iter()
            .filter_map(Piece::as_param)
            .skip(self.values.len())
    }

    fn push(&mut self, value: Option<String>) {
        crate::debug_fill!(
            "resolved parameter #{} -> {:?}",
            self.values.len(),
            value.as_deref()
        );
        self.values.push(value);
    }

    fn finish(self) -> String {
        let out = substitute(&self.pieces, &self.values);
        crate::debug_fill!("curried fill finished: {out}");
        out
    }
}

impl fmt::Debug for PartialFill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialFill")
            .field("resolved", &self.values)
            .field("pending", &self.pending().collect::<Vec<_>>())
            .finish()
    }
}

/// Computes the curried filler type of a shape.
///
/// - `Nil` fills to `String`: there is nothing left to ask for.
/// - `Cons<H, T>` fills to `Step<Cons<H, T>>`, whose `apply` takes `H`'s
///   input and returns `T`'s curried filler.
pub trait Curry: Shape {
    /// The value a caller holds while this shape's parameters are pending.
    type Filled;

    #[doc(hidden)]
    fn resume(fill: PartialFill) -> Self::Filled;
}

impl Curry for Nil {
    type Filled = String;

    fn resume(fill: PartialFill) -> String {
        fill.finish()
    }
}

impl<H: Slot, T: Curry> Curry for Cons<H, T> {
    type Filled = Step<Self>;

    fn resume(fill: PartialFill) -> Step<Self> {
        Step {
            fill,
            _shape: PhantomData,
        }
    }
}

/// A curried filler waiting for the first parameter of `S`.
#[must_use = "a step does nothing until every parameter has been applied"]
pub struct Step<S> {
    fill: PartialFill,
    _shape: PhantomData<fn() -> S>,
}

impl<S> Step<S> {
    /// The explicit pending-parameter list behind this step.
    pub fn partial(&self) -> &PartialFill {
        &self.fill
    }

    /// Name of the parameter the next `apply` call supplies.
    #[must_use]
    pub fn next_name(&self) -> Option<&str> {
        self.fill.pending().next().map(|spec| &*spec.name)
    }
}

impl<H: Slot, T: Curry> Step<Cons<H, T>> {
    /// Supply the value for the next pending parameter.
    ///
    /// Returns the final path once this was the last parameter, otherwise
    /// the step for the next one.
    pub fn apply(mut self, value: H::Input) -> T::Filled {
        self.fill.push(H::render(value));
        T::resume(self.fill)
    }
}

impl<K, T> Step<Cons<Optional<K>, T>>
where
    Optional<K>: Slot,
    T: Curry,
{
    /// Omit the next (optional) parameter.
    pub fn skip(mut self) -> T::Filled {
        self.fill.push(None);
        T::resume(self.fill)
    }
}

impl<S> Clone for Step<S> {
    fn clone(&self) -> Self {
        Self {
            fill: self.fill.clone(),
            _shape: PhantomData,
        }
    }
}

impl<S> fmt::Debug for Step<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Step").field(&self.fill).finish()
    }
}
