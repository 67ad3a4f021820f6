pub mod source_buffer;

#[cfg(test)]
mod source_buffer_unittests;

pub use source_buffer::SourceBuffer;
pub use source_buffer::SourceError;

/// Builds an in-memory [SourceBuffer] named after the call site, mostly useful in tests.
#[macro_export]
macro_rules! rpsl {
    ( $s:literal ) => {
        &$crate::toolchain::source::SourceBuffer::new_from_string(
            $s,
            $crate::const_format::formatcp!("{}:{}:{}", file!(), line!(), column!()),
        )
    };
}
