//! Error types for the genvars system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Most container operations are silent by design and never surface these;
//! the fallible `try_*` entry points do.

use std::fmt;

use thiserror::Error;

use crate::object::SoftObjectPath;
use crate::types::TypeDesc;

/// Result type alias using the genvars [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for genvars operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Pushes a frame onto the context stack, creating the context if needed.
    #[must_use]
    pub fn in_frame(mut self, frame: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_frame(frame));
        self
    }

    /// Creates an error for a type with no registered mapping.
    #[must_use]
    pub fn unconvertible(type_name: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unconvertible(type_name.into()))
    }

    /// Creates an undersized plain source error.
    #[must_use]
    pub fn undersized(needed: usize, available: usize) -> Self {
        Self::new(ErrorKind::UndersizedSource { needed, available })
    }

    /// Creates an unparsable text error.
    #[must_use]
    pub fn unparsable(expected: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnparsableText {
            expected: expected.into(),
            text: text.into(),
        })
    }

    /// Creates a type-not-supported error.
    #[must_use]
    pub fn type_not_supported(ty: TypeDesc) -> Self {
        Self::new(ErrorKind::TypeNotSupported(ty))
    }

    /// Creates a text syntax error at the given byte offset.
    #[must_use]
    pub fn parse(message: impl Into<String>, offset: usize) -> Self {
        Self::new(ErrorKind::Parse {
            message: message.into(),
            offset,
        })
    }

    /// Creates an object-not-found error.
    #[must_use]
    pub fn object_not_found(path: SoftObjectPath) -> Self {
        Self::new(ErrorKind::ObjectNotFound(path))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The requested static type has no registered mapping.
    #[error("unconvertible type: {0}")]
    Unconvertible(String),

    /// The stored plain buffer is smaller than the destination type.
    #[error("undersized source: need {needed} bytes, have {available}")]
    UndersizedSource {
        /// Bytes required by the destination type.
        needed: usize,
        /// Bytes held by the plain buffer.
        available: usize,
    },

    /// Stored text does not parse as the requested type.
    #[error("unparsable text for {expected}: {text:?}")]
    UnparsableText {
        /// Name of the requested type.
        expected: String,
        /// The offending text.
        text: String,
    },

    /// A get or set was given no property or no address.
    #[error("null property or address")]
    NullPropertyOrAddress,

    /// A runtime descriptor has no registered factory.
    #[error("type not supported: {0}")]
    TypeNotSupported(TypeDesc),

    /// Malformed canonical text.
    #[error("parse error at byte {offset}: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Byte offset into the text.
        offset: usize,
    },

    /// No live object is registered under the path.
    #[error("object not found: {0}")]
    ObjectNotFound(SoftObjectPath),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The type or value being processed.
    pub source: Option<String>,
    /// Byte offset into the text being imported.
    pub offset: Option<usize>,
    /// Field and element path, innermost last.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source description.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the byte offset.
    #[must_use]
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
            if let Some(offset) = self.offset {
                write!(f, " at byte {offset}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in self.stack.iter().rev() {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
