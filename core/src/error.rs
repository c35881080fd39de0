/// Error produced by [`Maybe::try_get`](crate::maybe::Maybe::try_get) when the option is absent.
///
/// Carries no detail: absence is the only thing a [`Maybe`](crate::maybe::Maybe) knows about.
#[derive(Default, Clone, Copy, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("option is None")]
pub struct NoneError;
