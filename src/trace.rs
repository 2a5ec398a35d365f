//! Feature-gated tracing for whole-image operations.
//!
//! Every operation that walks a full raster opens one span named after the
//! operation (`lut_apply`, `rotate`, `mirror`, `crop`, `paste`, `blend`,
//! `locate_subimage`, `blur`, `read_pgm`, `write_pgm`) with the image
//! dimensions as fields. Search and blur additionally emit a `*_done` event.
//! Without the `tracing` feature both macros expand to nothing observable.

/// Opens an info-level span, e.g. `trace_span!("blur", width = w, dx = dx)`.
#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::info_span!($name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::NoopSpan
    };
}

/// Emits an info-level event, e.g. `trace_event!("blur_done", pixels = n)`.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info!(name: $name, $($key = $value),+)
    };
    ($name:expr) => {
        tracing::info!(name: $name)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
    ($name:expr) => {};
}

pub(crate) use trace_event;
pub(crate) use trace_span;

/// Stand-in guard returned by `trace_span!` when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Mirrors `Span::entered()`.
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
