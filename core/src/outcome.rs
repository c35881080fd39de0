use crate::maybe::Maybe;
use crate::trace::short_circuit;

/// A value of type `T`, or an error of type `E` explaining its absence.
///
/// Construct with [`ok`](Self::ok) or [`err`](Self::err), then chain steps with [`map`](Self::map),
/// [`map_err`](Self::map_err) and [`bind`](Self::bind). Once an `Outcome` has [failed](Self::Failed), every later
/// step is skipped without calling its function, and the *original* error is carried through to the end of the
/// chain unchanged. Only a step that runs on a successful value can introduce a new error.
///
/// The tag alone decides failure: `Outcome::err(())`, or an error value that looks "empty" for its type, is
/// still a failure. Callers should not construct such values to mean success.
#[derive(Clone, Copy, Debug)]
pub enum Outcome<T, E> {
  Ok(T),
  Failed(E),
}

impl<T, E> Outcome<T, E> {
  /// Creates a successful outcome holding `value`.
  #[inline]
  pub const fn ok(value: T) -> Self { Self::Ok(value) }
  /// Creates a failed outcome holding `error`.
  #[inline]
  pub const fn err(error: E) -> Self { Self::Failed(error) }


  #[inline]
  pub const fn is_ok(&self) -> bool { matches!(self, Self::Ok(_)) }
  #[inline]
  pub const fn is_failed(&self) -> bool { matches!(self, Self::Failed(_)) }

  /// Returns the error, or `None` if successful.
  #[inline]
  pub const fn get_error(&self) -> Option<&E> {
    match self {
      Self::Ok(_) => None,
      Self::Failed(error) => Some(error),
    }
  }
  #[inline]
  pub fn into_error(self) -> Option<E> {
    match self {
      Self::Ok(_) => None,
      Self::Failed(error) => Some(error),
    }
  }

  /// Returns both slots: the value and `None` if successful, or `T::default()` and the error if failed. The
  /// value must be ignored whenever the error is `Some`.
  #[inline]
  pub fn get(self) -> (T, Option<E>) where
    T: Default
  {
    match self {
      Self::Ok(value) => (value, None),
      Self::Failed(error) => (T::default(), Some(error)),
    }
  }

  /// Returns the value, or `T::default()` if failed.
  ///
  /// **Unchecked accessor**: the error is silently dropped and the default is not a failure signal. Check
  /// [`get_error`](Self::get_error) first, or use [`get`](Self::get), [`into_result`](Self::into_result) or
  /// [`or_else`](Self::or_else).
  #[inline]
  pub fn value(self) -> T where
    T: Default
  {
    match self {
      Self::Ok(value) => value,
      Self::Failed(_) => T::default(),
    }
  }

  /// Returns the value, or `fallback` if failed.
  #[inline]
  pub fn or_else(self, fallback: T) -> T {
    match self {
      Self::Ok(value) => value,
      Self::Failed(_) => fallback,
    }
  }


  /// Applies `f` to the value and wraps the result, or propagates the error without calling `f`.
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
    match self {
      Self::Ok(value) => Outcome::Ok(f(value)),
      Self::Failed(error) => {
        short_circuit!("outcome", "map");
        Outcome::Failed(error)
      }
    }
  }

  /// Applies a fallible step `f` to the value; an `Err` from `f` becomes the new failure. Propagates the
  /// existing error without calling `f` if already failed.
  ///
  /// Unlike `std::result::Result::map_err`, this does not transform the error of a failed receiver.
  #[inline]
  pub fn map_err<U>(self, f: impl FnOnce(T) -> Result<U, E>) -> Outcome<U, E> {
    match self {
      Self::Ok(value) => f(value).into(),
      Self::Failed(error) => {
        short_circuit!("outcome", "map_err");
        Outcome::Failed(error)
      }
    }
  }

  /// Returns `f` applied to the value, or propagates the error without calling `f`.
  #[inline]
  pub fn bind<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
    match self {
      Self::Ok(value) => f(value),
      Self::Failed(error) => {
        short_circuit!("outcome", "bind");
        Outcome::Failed(error)
      }
    }
  }


  /// Converts into a [`Maybe`], discarding the error.
  #[inline]
  pub fn to_option(self) -> Maybe<T> {
    match self {
      Self::Ok(value) => Maybe::Present(value),
      Self::Failed(_) => Maybe::Absent,
    }
  }

  #[inline]
  pub fn into_result(self) -> Result<T, E> {
    match self {
      Self::Ok(value) => Ok(value),
      Self::Failed(error) => Err(error),
    }
  }

  #[inline]
  pub const fn as_ref(&self) -> Outcome<&T, &E> {
    match self {
      Self::Ok(value) => Outcome::Ok(value),
      Self::Failed(error) => Outcome::Failed(error),
    }
  }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
  #[inline]
  pub fn flatten(self) -> Outcome<T, E> { self.bind(std::convert::identity) }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
  #[inline]
  fn from(result: Result<T, E>) -> Self {
    match result {
      Ok(value) => Self::Ok(value),
      Err(error) => Self::Failed(error),
    }
  }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
  #[inline]
  fn from(outcome: Outcome<T, E>) -> Self { outcome.into_result() }
}


/// Creates a successful outcome holding `value`.
#[inline]
pub const fn ok<T, E>(value: T) -> Outcome<T, E> { Outcome::Ok(value) }
/// Creates a failed outcome holding `error`.
#[inline]
pub const fn err<T, E>(error: E) -> Outcome<T, E> { Outcome::Failed(error) }

/// Maps `outcome` from `A` to `B` with `f`. See [`Outcome::map`].
#[inline]
pub fn map<A, B, E>(outcome: Outcome<A, E>, f: impl FnOnce(A) -> B) -> Outcome<B, E> {
  outcome.map(f)
}
/// Maps `outcome` from `A` to `B` with the fallible step `f`. See [`Outcome::map_err`].
#[inline]
pub fn map_err<A, B, E>(outcome: Outcome<A, E>, f: impl FnOnce(A) -> Result<B, E>) -> Outcome<B, E> {
  outcome.map_err(f)
}
/// Chains `outcome` into `f`. See [`Outcome::bind`].
#[inline]
pub fn bind<A, B, E>(outcome: Outcome<A, E>, f: impl FnOnce(A) -> Outcome<B, E>) -> Outcome<B, E> {
  outcome.bind(f)
}
