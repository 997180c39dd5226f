// Optional backends
//
// Lowering a kernel signature for a JIT compiler needs a backend that may
// not be compiled in. Which backends exist is decided once, at startup, by
// `Capabilities::detect`; asking for a missing one is an ordinary error.

use crate::signature::KernelSignature;
use crate::types::NumericDescriptor;
use crate::{CodegenError, CodegenResult};

/// A JIT compiler that can declare kernel entry points.
pub trait SignatureBackend {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Produce the backend's declaration for `signature` under `symbol`.
    fn lower(&self, signature: &KernelSignature, symbol: &str) -> CodegenResult<String>;
}

pub struct Capabilities {
    jit: Option<Box<dyn SignatureBackend>>,
}

impl Capabilities {
    /// Backends compiled into this build.
    pub fn detect() -> Self {
        let capabilities = Self {
            jit: default_jit_backend(),
        };
        match &capabilities.jit {
            Some(backend) => tracing::debug!(backend = backend.name(), "JIT backend available"),
            None => tracing::debug!("no JIT backend compiled in"),
        }
        capabilities
    }

    pub fn none() -> Self {
        Self { jit: None }
    }

    pub fn with_jit(backend: Box<dyn SignatureBackend>) -> Self {
        Self { jit: Some(backend) }
    }

    pub fn has_jit(&self) -> bool {
        self.jit.is_some()
    }

    pub fn jit(&self) -> CodegenResult<&dyn SignatureBackend> {
        self.jit
            .as_deref()
            .ok_or_else(|| CodegenError::DependencyUnavailable {
                component: "LLVM (inkwell)".to_string(),
                capability: "JIT kernel signature".to_string(),
            })
    }

    /// Build the `tabulate_tensor` signature and lower it with the JIT backend.
    pub fn jit_kernel_signature(
        &self,
        scalar: NumericDescriptor,
        geometry: NumericDescriptor,
        symbol: &str,
    ) -> CodegenResult<String> {
        let backend = self.jit()?;
        let signature = KernelSignature::tabulate_tensor(scalar, geometry)?;
        tracing::debug!(backend = backend.name(), %scalar, %geometry, symbol, "lowering kernel signature");
        backend.lower(&signature, symbol)
    }
}

#[cfg(feature = "jit")]
fn default_jit_backend() -> Option<Box<dyn SignatureBackend>> {
    Some(Box::new(crate::jit::LlvmBackend))
}

#[cfg(not(feature = "jit"))]
fn default_jit_backend() -> Option<Box<dyn SignatureBackend>> {
    None
}
