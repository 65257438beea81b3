//! Type-level parameter lists.
//!
//! A route's parameters are tracked as a cons list of slots in declaration
//! order, e.g. `/:a/:b?` is
//!
//! ```text
//! Cons<Required<A>, Cons<Optional<B>, Nil>>
//! ```
//!
//! Every projection a route exposes is computed from this one list:
//!
//! - [`Shape::Values`]: the values in declaration order, as nested pairs
//! - [`Reverse`]: the same list reversed, for the compatibility filler
//! - [`Curry`](crate::Curry): the curried filler type
//! - [`Shape::describe`]: the runtime [`ParamSpec`]s
//!
//! All traits here are sealed; the only shapes are the ones built by the
//! append operations.

use std::marker::PhantomData;

use crate::param::{Param, ParamSpec};

/// The empty parameter list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nil;

/// A parameter list with head slot `H` followed by the list `T`.
pub struct Cons<H, T>(PhantomData<fn() -> (H, T)>);

/// Slot for a parameter that must always be supplied.
pub struct Required<K>(PhantomData<fn() -> K>);

/// Slot for a parameter that may be omitted.
pub struct Optional<K>(PhantomData<fn() -> K>);

/// One entry of a parameter list.
pub trait Slot: sealed::Sealed + 'static {
    /// The parameter key.
    type Key: Param;
    /// What a caller passes for this slot.
    type Input;
    /// Whether the slot may be left empty.
    const OPTIONAL: bool;

    /// Render one input into its path component, `None` meaning "omit".
    fn render(input: Self::Input) -> Option<String>;

    /// Describe this slot.
    #[must_use]
    fn spec() -> ParamSpec {
        ParamSpec {
            name: <Self::Key as Param>::NAME.into(),
            optional: Self::OPTIONAL,
        }
    }
}

impl<K: Param> Slot for Required<K> {
    type Key = K;
    type Input = K::Value;
    const OPTIONAL: bool = false;

    fn render(input: Self::Input) -> Option<String> {
        Some(input.to_string())
    }
}

impl<K: Param> Slot for Optional<K> {
    type Key = K;
    type Input = Option<K::Value>;
    const OPTIONAL: bool = true;

    fn render(input: Self::Input) -> Option<String> {
        input.map(|value| value.to_string())
    }
}

/// A complete parameter list.
pub trait Shape: sealed::Sealed + 'static {
    /// Number of parameters.
    const LEN: usize;
    /// Values for every slot, in list order, as nested pairs ending in `()`.
    type Values;

    /// Render `values` in list order onto `out`.
    fn collect(values: Self::Values, out: &mut Vec<Option<String>>);

    /// Push a [`ParamSpec`] per slot, in list order.
    fn describe(out: &mut Vec<ParamSpec>);
}

impl Shape for Nil {
    const LEN: usize = 0;
    type Values = ();

    fn collect((): Self::Values, _out: &mut Vec<Option<String>>) {}

    fn describe(_out: &mut Vec<ParamSpec>) {}
}

impl<H: Slot, T: Shape> Shape for Cons<H, T> {
    const LEN: usize = T::LEN + 1;
    type Values = (H::Input, T::Values);

    fn collect((head, tail): Self::Values, out: &mut Vec<Option<String>>) {
        out.push(H::render(head));
        T::collect(tail, out);
    }

    fn describe(out: &mut Vec<ParamSpec>) {
        out.push(H::spec());
        T::describe(out);
    }
}

/// Type-level push-back of slot `X`.
pub trait Append<X>: sealed::Sealed {
    /// The list with `X` appended.
    type Output;
}

impl<X> Append<X> for Nil {
    type Output = Cons<X, Nil>;
}

impl<H, T: Append<X>, X> Append<X> for Cons<H, T> {
    type Output = Cons<H, T::Output>;
}

/// `S` with slot `X` appended.
pub type Appended<S, X> = <S as Append<X>>::Output;

/// Reverse a list onto the accumulator `Acc`.
pub trait ReverseOnto<Acc>: sealed::Sealed {
    /// `Self` reversed, followed by `Acc`.
    type Output;
}

impl<Acc> ReverseOnto<Acc> for Nil {
    type Output = Acc;
}

impl<H, T: ReverseOnto<Cons<H, Acc>>, Acc> ReverseOnto<Acc> for Cons<H, T> {
    type Output = T::Output;
}

/// Type-level list reversal.
pub trait Reverse: sealed::Sealed {
    /// `Self` with its slots in reverse order.
    type Output;
}

impl<S: ReverseOnto<Nil>> Reverse for S {
    type Output = S::Output;
}

/// `S` with its slots in reverse order.
pub type Reversed<S> = <S as Reverse>::Output;

/// Conversion from a flat tuple to the nested pairs used by [`Shape::Values`].
///
/// Implemented for arities 0 through 12, so a two-parameter route is filled
/// with `(a, b)` rather than `(a, (b, ()))`.
pub trait Nest: Sized {
    /// The flat tuple form.
    type Flat;

    /// Convert the flat tuple into nested pairs.
    fn nest(flat: Self::Flat) -> Self;
}

macro_rules! nested {
    () => { () };
    ($head:ident $(, $tail:ident)*) => { ($head, nested!($($tail),*)) };
}

macro_rules! impl_nest {
    () => {
        impl Nest for () {
            type Flat = ();

            fn nest(flat: Self::Flat) -> Self {
                flat
            }
        }
    };
    ($head:ident $(, $tail:ident)*) => {
        impl<$head $(, $tail)*> Nest for nested!($head $(, $tail)*) {
            type Flat = ($head, $($tail,)*);

            #[allow(non_snake_case)]
            fn nest(flat: Self::Flat) -> Self {
                let ($head, $($tail,)*) = flat;
                nested!($head $(, $tail)*)
            }
        }

        impl_nest!($($tail),*);
    };
}

impl_nest!(A, B, C, D, E, F, G, H, I, J, K, L);

/// Flat tuple of forward-order values for the shape `S`.
pub type FlatValues<S> = <<S as Shape>::Values as Nest>::Flat;

/// Flat tuple of reverse-order values for the shape `S`.
pub type FlatReversed<S> = <<Reversed<S> as Shape>::Values as Nest>::Flat;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Nil {}
    impl<H, T> Sealed for super::Cons<H, T> {}
    impl<K> Sealed for super::Required<K> {}
    impl<K> Sealed for super::Optional<K> {}
}
