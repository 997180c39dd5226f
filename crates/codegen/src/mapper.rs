// Type mapping
//
// Classifies host dtypes into the closed NumericDescriptor set and maps them
// to C scalar type names. Classification happens once; everything after it
// works on the enum tag.

use crate::resolve::resolve;
use crate::types::{DType, NumericDescriptor, ScalarKind};
use crate::{CodegenError, CodegenResult};
use parser::ast::DTypeExpr;
use std::str::FromStr;

impl TryFrom<DType> for NumericDescriptor {
    type Error = CodegenError;

    fn try_from(dtype: DType) -> Result<Self, Self::Error> {
        classify(&dtype)
    }
}

impl FromStr for NumericDescriptor {
    type Err = CodegenError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let dtype: DType = source.parse()?;
        classify(&dtype).map_err(|e| e.with_descriptor(source.trim(), 0..source.len()))
    }
}

/// Assign the descriptor tag for a host dtype.
///
/// Order matters: long double is checked first because on some targets it
/// has the same width as `double`, and the native int check comes before the
/// float checks.
pub fn classify(dtype: &DType) -> CodegenResult<NumericDescriptor> {
    let descriptor = match (dtype.code, dtype.kind) {
        ('g', ScalarKind::Float) => NumericDescriptor::LongDouble,
        ('i', ScalarKind::SignedInt) if dtype.itemsize == 4 => NumericDescriptor::NativeInt,
        ('f', ScalarKind::Float) => NumericDescriptor::Float32,
        ('d', ScalarKind::Float) => NumericDescriptor::Float64,
        ('F', ScalarKind::Complex) => NumericDescriptor::Complex64,
        ('D', ScalarKind::Complex) => NumericDescriptor::Complex128,
        _ => {
            tracing::trace!(%dtype, code = %dtype.code, "dtype outside the descriptor set");
            return Err(CodegenError::unsupported(dtype.to_string()));
        }
    };
    Ok(descriptor)
}

/// C scalar type name for a host dtype, e.g. float64 -> "double".
pub fn scalar_type_name(dtype: &DType) -> CodegenResult<&'static str> {
    classify(dtype).map(NumericDescriptor::c_type_name)
}

/// Descriptor of the real component: complex128 -> float64, identity for
/// real and integer types.
pub fn real_component_type(dtype: &DType) -> CodegenResult<NumericDescriptor> {
    classify(dtype).map(NumericDescriptor::real_component)
}

/// Resolve and classify a parsed descriptor. Errors point at the descriptor
/// text rather than the canonical dtype name.
pub fn descriptor_for(expr: &DTypeExpr) -> CodegenResult<NumericDescriptor> {
    let dtype = resolve(expr)?;
    classify(&dtype).map_err(|e| e.with_descriptor(expr.to_string(), expr.span.clone()))
}
