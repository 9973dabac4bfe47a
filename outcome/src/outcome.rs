use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

/// A success or error container, useful for propagating structured errors as
/// plain values instead of raised faults.
///
/// One model for this type is an [`Option`] that instead of being "present" or
/// "empty" is "present" or "error", where the error state describes why the
/// value isn't present.
///
/// Typically `Outcome`s are created as the return values of functions that may
/// not always succeed, via [`Outcome::ok`] and [`Outcome::err`]. A descriptive
/// record makes a good error type, but a `String` or a `Vec<String>` is equally
/// acceptable when all the caller needs is a message. A parse error, for
/// instance, might carry a line and column number alongside a description of
/// the issue.
///
/// ```
/// use outcome::Outcome;
///
/// let parsed: Outcome<u32, String> = Outcome::ok(7);
/// let doubled = parsed.map_result(|n| n * 2);
/// assert_eq!(doubled.result(), Some(&14));
/// ```
#[derive(PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize, Debug, BorshSerialize, BorshDeserialize)]
pub enum Outcome<T, E> {
    /// The operation succeeded with a value.
    Success(T),
    /// The operation failed with an error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns an `Outcome` holding a success state.
    pub fn ok(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Returns an `Outcome` holding an error state.
    pub fn err(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// Returns whether this object is an error state.
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Returns the success value if present.
    pub fn result(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Returns the error value if present.
    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Consuming form of [`Outcome::result`].
    pub fn into_result(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Consuming form of [`Outcome::error`].
    pub fn into_error(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Borrows both tracks in place, so the combinators below can be applied
    /// without consuming the outcome.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns an `Outcome` with the success state transformed according to
    /// the supplied function, or the untransformed error state.
    pub fn map_result<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns an `Outcome` with the error state transformed according to the
    /// supplied function, or the untransformed success state.
    pub fn map_error<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// When this object holds a success state, returns the `Outcome` produced
    /// by transforming the success state with the supplied function, otherwise
    /// the untransformed error state. Note that callers may use this method to
    /// coerce a success state to an error state.
    pub fn flat_map_result<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// When this object holds an error state, returns the `Outcome` produced
    /// by transforming the error state with the supplied function, otherwise
    /// the untransformed success state. Note that callers may use this method
    /// to coerce an error state to a success state.
    pub fn flat_map_error<F>(self, f: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => f(error),
        }
    }

    /// Transforms this outcome to another, using `result_fn` for success
    /// states and `error_fn` for error states. Exactly one of the two
    /// functions is invoked.
    pub fn map<U, F>(self, result_fn: impl FnOnce(T) -> U, error_fn: impl FnOnce(E) -> F) -> Outcome<U, F> {
        self.map_result(result_fn).map_error(error_fn)
    }

    /// Transforms this outcome to another, taking the output outcome directly
    /// from the supplied transformation functions, using `result_fn` for
    /// success states and `error_fn` for error states. Either function may
    /// switch tracks, so this is the most general composition primitive.
    pub fn flat_map<U, F>(
        self,
        result_fn: impl FnOnce(T) -> Outcome<U, F>,
        error_fn: impl FnOnce(E) -> Outcome<U, F>,
    ) -> Outcome<U, F> {
        match self {
            Outcome::Success(value) => result_fn(value),
            Outcome::Failure(error) => error_fn(error),
        }
    }

    /// Returns the success state of this object, or maps the error state
    /// through `exception_fn` into the `Err` of a std [`Result`] for
    /// propagation with `?`. This is the designed bridge out of explicit
    /// outcome-checking at a boundary of the caller's choosing.
    pub fn or_raise<X>(self, exception_fn: impl FnOnce(E) -> X) -> Result<T, X> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(exception_fn(error)),
        }
    }

    /// Returns an `Outcome` containing the same error as the current object,
    /// with the success type adjusted to match local call-site requirements.
    ///
    /// # Panics
    ///
    /// Panics if this object is not an error state. Callers should use this
    /// method when the state is known to be an error but the success type is
    /// wrong for the local call site, when composing outcomes between
    /// functions:
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// fn outer() -> Outcome<usize, String> {
    ///     let inner: Outcome<&str, String> = Outcome::err("inner failed".to_string());
    ///     if inner.is_error() {
    ///         return inner.coerce();
    ///     }
    ///     Outcome::ok(inner.unwrap().len())
    /// }
    ///
    /// assert!(outer().is_error());
    /// ```
    #[track_caller]
    pub fn coerce<U>(self) -> Outcome<U, E> {
        match self {
            Outcome::Success(_) => panic!("Cannot coerce a success-state result"),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E: Display> Outcome<T, E> {
    /// Returns the success state of this object, or the rendering of the error
    /// state wrapped in an [`ErrorMessage`]. Provided as an ergonomic
    /// convenience, most commonly to reduce boilerplate in test code; almost
    /// always, callers should prefer [`Outcome::or_raise`] with a structured
    /// error since `ErrorMessage` carries nothing beyond the rendered string.
    pub fn or_raise_message(self) -> Result<T, ErrorMessage> {
        self.or_raise(|error| ErrorMessage(error.to_string()))
    }

    /// Returns the success state of this object, panicking with the rendering
    /// of the error state if there is none.
    ///
    /// Invoking this method implies the caller has already proven, via prior
    /// inspection or control flow, that this object holds a success state.
    /// When the state is not known, prefer [`Outcome::or_raise`].
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => panic!("{}", error),
        }
    }
}

/// Stringly-typed error produced by [`Outcome::or_raise_message`], rendering
/// exactly the message of the error it was built from.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("{0}")]
pub struct ErrorMessage(pub String);
