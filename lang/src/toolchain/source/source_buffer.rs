use std::fs::File;
use std::io;
use std::path::Path;

use bstr::ByteSlice;
use thiserror::Error;

/// Reasons a [SourceBuffer] could not be built from a file.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("unable to read source file: {0}")]
    Io(#[from] io::Error),

    #[error("unable to map source file: {0}")]
    Map(#[from] mmap_rs::Error),

    #[error("{file_name} is not valid utf-8, first invalid byte at offset {offset}")]
    InvalidUtf8 { file_name: String, offset: usize },
}

enum SourceBufferKind<'a> {
    File { buffer: mmap_rs::Mmap },
    Memory { string: &'a str },
}

// Keeps source and a file name in the same object, so they provide the same lifetimes.
pub struct SourceBuffer<'a> {
    kind: SourceBufferKind<'a>,
    file_name: String,
}

impl<'a> SourceBuffer<'a> {
    /// Maps the file at `file_path` into memory. The contents must be valid utf-8, RPSL objects
    /// are text.
    pub fn new_from_file(file_path: &Path) -> Result<SourceBuffer<'static>, SourceError> {
        let file_name = file_path.to_string_lossy().into_owned();
        let file = File::open(file_path)?;
        let len = usize::try_from(file.metadata()?.len())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        // Zero-length mappings are rejected by the OS.
        if len == 0 {
            return Ok(SourceBuffer { kind: SourceBufferKind::Memory { string: "" }, file_name });
        }

        let buffer = unsafe { mmap_rs::MmapOptions::new(len)?.with_file(&file, 0).map()? };
        if let Err(e) = buffer.as_slice().to_str() {
            return Err(SourceError::InvalidUtf8 { file_name, offset: e.valid_up_to() });
        }
        Ok(SourceBuffer { kind: SourceBufferKind::File { buffer }, file_name })
    }

    pub fn new_from_string(string: &'a str, name: &str) -> SourceBuffer<'a> {
        SourceBuffer { kind: SourceBufferKind::Memory { string }, file_name: String::from(name) }
    }

    pub fn code(&self) -> &'_ str {
        match &self.kind {
            // Contents were checked for utf-8 validity when the file was mapped.
            SourceBufferKind::File { buffer } => unsafe {
                std::str::from_utf8_unchecked(buffer.as_slice())
            },
            SourceBufferKind::Memory { string } => string,
        }
    }

    pub fn file_name(&self) -> &str {
        self.file_name.as_str()
    }
}
