// Type mapping for generated C kernels
//
// Host dtype -> NumericDescriptor -> C scalar type name, plus the kernel
// signature model and its optional JIT backend.

mod types;
mod resolve;
mod mapper;
mod signature;
mod capability;
mod options;
mod error;
mod error_report;

#[cfg(feature = "jit")]
mod jit;

pub use types::{DType, Layout, NumericDescriptor, ScalarKind, LONG_DOUBLE_ALIGN, LONG_DOUBLE_SIZE};
pub use resolve::resolve;
pub use mapper::{classify, descriptor_for, real_component_type, scalar_type_name};
pub use signature::{is_c_identifier, KernelParam, KernelSignature, Pointee};
pub use capability::{Capabilities, SignatureBackend};
pub use options::{Options, DEFAULT_DEBUG_LEVEL, DEFAULT_PRECISION, LANGUAGE, VERSION};

#[cfg(feature = "jit")]
pub use jit::LlvmBackend;

// Re-export error types for public API
pub use error::{CodegenError, CodegenResult, Span};
pub use error_report::{render_codegen_error, report_codegen_error};

#[cfg(test)]
mod tests;
