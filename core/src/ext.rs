use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Converts a std [`Option`] into a [`Maybe`].
pub trait IntoMaybe {
  type Value;

  fn into_maybe(self) -> Maybe<Self::Value>;
}

impl<T> IntoMaybe for Option<T> {
  type Value = T;

  #[inline]
  fn into_maybe(self) -> Maybe<T> { self.into() }
}

/// Converts a std [`Result`] into an [`Outcome`].
pub trait IntoOutcome {
  type Value;
  type Error;

  fn into_outcome(self) -> Outcome<Self::Value, Self::Error>;
}

impl<T, E> IntoOutcome for Result<T, E> {
  type Value = T;
  type Error = E;

  #[inline]
  fn into_outcome(self) -> Outcome<T, E> { self.into() }
}

/// Converts a nullable reference into a [`Maybe`] holding a clone of the referent.
pub trait MaybeRefExt {
  type Value;

  fn maybe_cloned(self) -> Maybe<Self::Value>;
}

impl<T: Clone> MaybeRefExt for Option<&T> {
  type Value = T;

  #[inline]
  fn maybe_cloned(self) -> Maybe<T> { Maybe::from_ref(self) }
}
