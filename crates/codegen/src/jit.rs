// LLVM backend for kernel signatures
//
// Declares the kernel entry point in a fresh module. Pointers are opaque in
// LLVM, so the pointee type only shows up through the `align` attribute.

use crate::capability::SignatureBackend;
use crate::signature::KernelSignature;
use crate::{CodegenError, CodegenResult};
use inkwell::attributes::{Attribute, AttributeLoc};
use inkwell::context::Context;
use inkwell::module::Linkage;
use inkwell::types::BasicMetadataTypeEnum;
use inkwell::AddressSpace;

pub struct LlvmBackend;

impl SignatureBackend for LlvmBackend {
    fn name(&self) -> &'static str {
        "llvm"
    }

    fn lower(&self, signature: &KernelSignature, symbol: &str) -> CodegenResult<String> {
        let context = Context::create();
        let module = context.create_module(symbol);

        let ptr_type = context.ptr_type(AddressSpace::default());
        let param_types: Vec<BasicMetadataTypeEnum> =
            signature.params().iter().map(|_| ptr_type.into()).collect();
        let fn_type = context.void_type().fn_type(&param_types, false);
        let function = module.add_function(symbol, fn_type, Some(Linkage::External));

        let noalias = context.create_enum_attribute(Attribute::get_named_enum_kind_id("noalias"), 0);
        let readonly =
            context.create_enum_attribute(Attribute::get_named_enum_kind_id("readonly"), 0);
        let align_kind = Attribute::get_named_enum_kind_id("align");

        for (index, param) in signature.params().iter().enumerate() {
            let loc = AttributeLoc::Param(index as u32);
            let align = param.pointee.layout().align as u64;

            function.add_attribute(loc, noalias);
            function.add_attribute(loc, context.create_enum_attribute(align_kind, align));
            if !param.mutable {
                function.add_attribute(loc, readonly);
            }
            if let Some(value) = function.get_nth_param(index as u32) {
                value.into_pointer_value().set_name(param.name);
            }
        }

        module.verify().map_err(|e| CodegenError::Backend {
            operation: "verify".to_string(),
            details: e.to_string(),
        })?;

        tracing::trace!(symbol, "kernel signature lowered to LLVM IR");
        Ok(module.print_to_string().to_string())
    }
}
