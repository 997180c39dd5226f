// Error handling for type mapping
//
// Errors are propagated unchanged to the caller; none of them is transient.

use std::fmt;

// Import Span type from parser AST
pub use parser::ast::Span;

/// Code generation error types
#[derive(Debug, Clone, PartialEq)]
pub enum CodegenError {
    /// Descriptor does not name a type the generator can emit, or not one
    /// allowed where it was used
    UnsupportedType {
        descriptor: String,
        span: Option<Span>,
        requirement: Option<&'static str>,
    },

    /// An optional capability was requested but is not built in
    DependencyUnavailable {
        component: String,
        capability: String,
    },

    /// Options file could not be read or decoded
    InvalidOptions {
        source_name: String,
        details: String,
    },

    /// The JIT backend rejected what it was given
    Backend {
        operation: String,
        details: String,
    },
}

impl CodegenError {
    pub fn unsupported(descriptor: impl Into<String>) -> Self {
        CodegenError::UnsupportedType {
            descriptor: descriptor.into(),
            span: None,
            requirement: None,
        }
    }

    /// Record the constraint the descriptor failed, e.g. a geometry type
    /// that is not a real float. No-op for other errors.
    pub fn requiring(self, constraint: &'static str) -> Self {
        match self {
            CodegenError::UnsupportedType {
                descriptor, span, ..
            } => CodegenError::UnsupportedType {
                descriptor,
                span,
                requirement: Some(constraint),
            },
            other => other,
        }
    }

    /// Attach a source span. No-op for errors that have no span.
    pub fn with_span(self, span: Span) -> Self {
        match self {
            CodegenError::UnsupportedType {
                descriptor,
                requirement,
                ..
            } => CodegenError::UnsupportedType {
                descriptor,
                span: Some(span),
                requirement,
            },
            other => other,
        }
    }

    /// Replace the descriptor text and span with what the user wrote.
    pub fn with_descriptor(self, text: impl Into<String>, span: Span) -> Self {
        match self {
            CodegenError::UnsupportedType { requirement, .. } => CodegenError::UnsupportedType {
                descriptor: text.into(),
                span: Some(span),
                requirement,
            },
            other => other,
        }
    }

    pub fn span(&self) -> Option<&Span> {
        match self {
            CodegenError::UnsupportedType { span, .. } => span.as_ref(),
            _ => None,
        }
    }

    /// Get the exit code for this error type
    /// Used by main.rs to return specific exit codes
    pub fn exit_code(&self) -> i32 {
        match self {
            CodegenError::UnsupportedType { .. } => 110,
            CodegenError::DependencyUnavailable { .. } => 111,
            CodegenError::InvalidOptions { .. } => 112,
            CodegenError::Backend { .. } => 113,
        }
    }
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodegenError::UnsupportedType { descriptor, .. } => {
                write!(f, "Unsupported type descriptor '{}'", descriptor)
            }
            CodegenError::DependencyUnavailable {
                component,
                capability,
            } => {
                write!(
                    f,
                    "{} requires {}, which is not available in this build",
                    capability, component
                )
            }
            CodegenError::InvalidOptions {
                source_name,
                details,
            } => {
                write!(f, "Invalid options in {}: {}", source_name, details)
            }
            CodegenError::Backend { operation, details } => {
                write!(f, "Backend error in {}: {}", operation, details)
            }
        }
    }
}

impl std::error::Error for CodegenError {}

/// Convenient Result type for codegen operations
pub type CodegenResult<T> = Result<T, CodegenError>;
