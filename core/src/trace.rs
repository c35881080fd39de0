/// Records that `$combinator` on `$container` skipped its function because the receiver was absent or failed.
///
/// Expands to nothing unless the `tracing` feature is enabled.
macro_rules! short_circuit {
  ($container:literal, $combinator:literal) => {
    #[cfg(feature = "tracing")] {
      tracing::trace!(container = $container, combinator = $combinator, "short-circuit");
    }
  };
}

pub(crate) use short_circuit;
