use std::convert::identity;

use crate::error::NoneError;
use crate::outcome::Outcome;
use crate::trace::short_circuit;

/// A value of type `T`, or nothing.
///
/// Construct with [`some`](Self::some) or [`none`](Self::none), then chain steps with [`map`](Self::map),
/// [`flat_map`](Self::flat_map), [`flat_map_err`](Self::flat_map_err) and [`bind`](Self::bind). Once a `Maybe`
/// is [absent](Self::Absent), every later step in a chain is skipped: its function is never called and the
/// result stays absent.
///
/// A `Maybe` never carries a reason for its absence. Use [`Outcome`] when the cause of a failure must survive
/// the chain, and [`to_result`](Self::to_result) to move between the two.
#[derive(Clone, Copy, Debug)]
pub enum Maybe<T> {
  Present(T),
  Absent,
}

impl<T> Maybe<T> {
  /// Creates a present option holding `value`.
  #[inline]
  pub const fn some(value: T) -> Self { Self::Present(value) }
  /// Creates an absent option.
  #[inline]
  pub const fn none() -> Self { Self::Absent }

  /// Creates a present option holding `value` if `present` is true, or an absent option otherwise. `value` is
  /// dropped when absent.
  #[inline]
  pub fn from_tuple(value: T, present: bool) -> Self {
    if present { Self::Present(value) } else { Self::Absent }
  }


  #[inline]
  pub const fn is_none(&self) -> bool { matches!(self, Self::Absent) }
  #[inline]
  pub const fn is_present(&self) -> bool { matches!(self, Self::Present(_)) }


  /// Returns the held value, or `T::default()` if absent.
  ///
  /// **Unchecked accessor**: a default value is indistinguishable from a present value that happens to equal
  /// the default, so the result of this function is *not* a presence signal. Use [`get`](Self::get),
  /// [`try_get`](Self::try_get), or [`or_else`](Self::or_else) when absence matters.
  #[inline]
  pub fn value(self) -> T where
    T: Default
  {
    match self {
      Self::Present(value) => value,
      Self::Absent => T::default(),
    }
  }

  /// Returns the held value and `true`, or `T::default()` and `false` if absent. The flag is authoritative;
  /// the value must be ignored when it is `false`.
  #[inline]
  pub fn get(self) -> (T, bool) where
    T: Default
  {
    match self {
      Self::Present(value) => (value, true),
      Self::Absent => (T::default(), false),
    }
  }

  /// Returns the held value, or [`NoneError`] if absent.
  #[inline]
  pub fn try_get(self) -> Result<T, NoneError> {
    match self {
      Self::Present(value) => Ok(value),
      Self::Absent => Err(NoneError),
    }
  }

  /// Returns the held value, or `fallback` if absent.
  #[inline]
  pub fn or_else(self, fallback: T) -> T {
    match self {
      Self::Present(value) => value,
      Self::Absent => fallback,
    }
  }


  /// Applies `f` to the held value and wraps the result, or stays absent without calling `f`.
  ///
  /// `f` must not signal absence itself; use [`flat_map`](Self::flat_map),
  /// [`flat_map_err`](Self::flat_map_err) or [`bind`](Self::bind) for steps that can.
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
    match self {
      Self::Present(value) => Maybe::Present(f(value)),
      Self::Absent => {
        short_circuit!("maybe", "map");
        Maybe::Absent
      }
    }
  }

  /// Applies `f` to the held value; the result is present only if `f` reports success with `true`. Stays
  /// absent without calling `f` if already absent.
  #[inline]
  pub fn flat_map<U>(self, f: impl FnOnce(T) -> (U, bool)) -> Maybe<U> {
    match self {
      Self::Present(value) => {
        let (value, present) = f(value);
        Maybe::from_tuple(value, present)
      }
      Self::Absent => {
        short_circuit!("maybe", "flat_map");
        Maybe::Absent
      }
    }
  }

  /// Applies `f` to the held value; any `Err` from `f` collapses to absent and its detail is discarded. Stays
  /// absent without calling `f` if already absent.
  #[inline]
  pub fn flat_map_err<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Maybe<U> {
    match self {
      Self::Present(value) => match f(value) {
        Ok(value) => Maybe::Present(value),
        Err(_) => Maybe::Absent,
      },
      Self::Absent => {
        short_circuit!("maybe", "flat_map_err");
        Maybe::Absent
      }
    }
  }

  /// Returns `f` applied to the held value, or stays absent without calling `f`.
  #[inline]
  pub fn bind<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
    match self {
      Self::Present(value) => f(value),
      Self::Absent => {
        short_circuit!("maybe", "bind");
        Maybe::Absent
      }
    }
  }


  /// Converts into an [`Outcome`], failing with `if_absent` when absent.
  #[inline]
  pub fn to_result<E>(self, if_absent: E) -> Outcome<T, E> {
    match self {
      Self::Present(value) => Outcome::Ok(value),
      Self::Absent => Outcome::Failed(if_absent),
    }
  }

  #[inline]
  pub fn into_option(self) -> Option<T> {
    match self {
      Self::Present(value) => Some(value),
      Self::Absent => None,
    }
  }

  #[inline]
  pub const fn as_ref(&self) -> Maybe<&T> {
    match self {
      Self::Present(value) => Maybe::Present(value),
      Self::Absent => Maybe::Absent,
    }
  }
}

impl<T: Clone> Maybe<T> {
  /// Creates an option from a nullable reference: `None` is absent, `Some(value)` is present with a clone of
  /// `value`.
  #[inline]
  pub fn from_ref(value: Option<&T>) -> Self {
    match value {
      Some(value) => Self::Present(value.clone()),
      None => Self::Absent,
    }
  }
}

impl<T> Maybe<Maybe<T>> {
  #[inline]
  pub fn flatten(self) -> Maybe<T> { self.bind(identity) }
}

impl<T> Default for Maybe<T> {
  #[inline]
  fn default() -> Self { Self::Absent }
}

impl<T> From<Option<T>> for Maybe<T> {
  #[inline]
  fn from(value: Option<T>) -> Self {
    match value {
      Some(value) => Self::Present(value),
      None => Self::Absent,
    }
  }
}

impl<T> From<Maybe<T>> for Option<T> {
  #[inline]
  fn from(value: Maybe<T>) -> Self { value.into_option() }
}


/// Creates a present option holding `value`.
#[inline]
pub const fn some<T>(value: T) -> Maybe<T> { Maybe::Present(value) }
/// Creates an absent option.
#[inline]
pub const fn none<T>() -> Maybe<T> { Maybe::Absent }

/// Creates a present option if `present` is true, or an absent one otherwise. See [`Maybe::from_tuple`].
#[inline]
pub fn from_tuple<T>(value: T, present: bool) -> Maybe<T> { Maybe::from_tuple(value, present) }
/// Creates an option from a nullable reference, cloning the referent. See [`Maybe::from_ref`].
#[inline]
pub fn from_ref<T: Clone>(value: Option<&T>) -> Maybe<T> { Maybe::from_ref(value) }

/// Maps `option` from `A` to `B` with `f`. See [`Maybe::map`].
#[inline]
pub fn map_option<A, B>(option: Maybe<A>, f: impl FnOnce(A) -> B) -> Maybe<B> {
  option.map(f)
}
/// Maps `option` from `A` to `B` with `f`, where `f` reports presence with a flag. See [`Maybe::flat_map`].
#[inline]
pub fn map_option_tuple<A, B>(option: Maybe<A>, f: impl FnOnce(A) -> (B, bool)) -> Maybe<B> {
  option.flat_map(f)
}
/// Maps `option` from `A` to `B` with `f`, where any error from `f` becomes absence. See
/// [`Maybe::flat_map_err`].
#[inline]
pub fn map_err_option<A, B, E>(option: Maybe<A>, f: impl FnOnce(A) -> Result<B, E>) -> Maybe<B> {
  option.flat_map_err(f)
}
/// Chains `option` into `f`. See [`Maybe::bind`].
#[inline]
pub fn bind_option<A, B>(option: Maybe<A>, f: impl FnOnce(A) -> Maybe<B>) -> Maybe<B> {
  option.bind(f)
}


#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::*;

  #[derive(Debug, thiserror::Error)]
  #[error("parse failed")]
  struct ParseError;

  #[test]
  fn some_is_present() {
    let option = some(42);
    assert!(option.is_present());
    assert!(!option.is_none());
    assert_eq!(option.value(), 42);
    assert_eq!(option.get(), (42, true));
    assert_eq!(option.try_get(), Ok(42));
  }

  #[test]
  fn none_is_absent() {
    let option = none::<String>();
    assert!(option.is_none());
    assert!(!option.is_present());
    assert_eq!(option.clone().value(), "");
    assert_eq!(option.clone().get(), (String::new(), false));
    assert_eq!(option.try_get(), Err(NoneError));
  }

  #[test]
  fn or_else_returns_fallback_only_when_absent() {
    assert_eq!(some(1).or_else(2), 1);
    assert_eq!(none().or_else(2), 2);
  }

  #[test]
  fn default_is_absent() {
    assert!(Maybe::<u8>::default().is_none());
  }

  #[test]
  fn from_tuple_follows_flag() {
    assert_eq!(from_tuple(3, true).into_option(), Some(3));
    assert_eq!(from_tuple(3, false).into_option(), None);
  }

  #[test]
  fn from_ref_clones_referent() {
    let name = String::from("att");
    let option = from_ref(Some(&name));
    assert_eq!(option.into_option().as_deref(), Some("att"));
    assert!(from_ref::<String>(None).is_none());
  }

  #[test]
  fn map_changes_type() {
    let option = map_option(some(21), |x: i32| x.to_string());
    assert_eq!(option.into_option().as_deref(), Some("21"));
  }

  #[test]
  fn flat_map_collapses_on_false() {
    assert_eq!(some(5).flat_map(|x| (x * 2, true)).into_option(), Some(10));
    assert!(some(5).flat_map(|x| (x * 2, false)).is_none());
    assert_eq!(map_option_tuple(some("5"), |s| (s.len(), !s.is_empty())).into_option(), Some(1));
  }

  #[test]
  fn flat_map_err_discards_error() {
    let parsed = some("12").flat_map_err(|s| s.parse::<u32>());
    assert_eq!(parsed.into_option(), Some(12));
    let failed = map_err_option(some("x"), |_| Err::<u32, _>(ParseError));
    assert!(failed.is_none());
  }

  #[test]
  fn bind_chains_absence() {
    let half = |x: u32| if x % 2 == 0 { some(x / 2) } else { none() };
    assert_eq!(bind_option(some(8), half).bind(half).into_option(), Some(2));
    assert!(some(8).bind(half).bind(half).bind(half).bind(half).is_none());
  }

  #[test]
  fn absent_never_calls_function() {
    let calls = Cell::new(0);
    let option = none::<i32>()
      .map(|x| { calls.set(calls.get() + 1); x })
      .flat_map(|x| { calls.set(calls.get() + 1); (x, true) })
      .flat_map_err(|x| { calls.set(calls.get() + 1); Ok::<_, ParseError>(x) })
      .bind(|x| { calls.set(calls.get() + 1); some(x) });
    assert!(option.is_none());
    assert_eq!(calls.get(), 0);
  }

  #[test]
  fn flatten_nested() {
    assert_eq!(some(some(1)).flatten().into_option(), Some(1));
    assert!(some(none::<i32>()).flatten().is_none());
    assert!(none::<Maybe<i32>>().flatten().is_none());
  }

  #[test]
  fn to_result_uses_fallback_error() {
    assert_eq!(some(1).to_result("missing").into_result(), Ok(1));
    assert_eq!(none::<i32>().to_result("missing").into_result(), Err("missing"));
  }

  #[test]
  fn std_option_round_trip() {
    let option: Maybe<i32> = Some(7).into();
    let back: Option<i32> = option.into();
    assert_eq!(back, Some(7));
    assert!(Maybe::<i32>::from(None).is_none());
  }

  #[test]
  fn as_ref_borrows() {
    let option = some(String::from("borrowed"));
    assert_eq!(option.as_ref().map(|s| s.len()).into_option(), Some(8));
    assert!(option.is_present());
  }
}
