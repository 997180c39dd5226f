// Descriptor resolution
//
// Turns parsed descriptor text into a host DType. Accepts NumPy's names,
// C-style aliases, single-character type codes and typestrs (`<f8`).

use crate::types::{DType, ScalarKind};
use crate::{CodegenError, CodegenResult};
use parser::ast::{ByteOrder, DTypeExpr, MODULE_PREFIXES};
use std::str::FromStr;

/// Resolve a parsed descriptor. Errors carry the descriptor as written and
/// its span.
pub fn resolve(expr: &DTypeExpr) -> CodegenResult<DType> {
    let unsupported = || CodegenError::unsupported(expr.to_string()).with_span(expr.span.clone());

    match expr.module() {
        [] => {}
        [prefix] if MODULE_PREFIXES.contains(&prefix.as_str()) => {}
        _ => return Err(unsupported()),
    }

    let name = expr.name();
    let dtype = match expr.byte_order {
        // A byte order only makes sense in front of a typestr or type code
        Some(order) => lookup_code_or_typestr(name).inspect(|dtype| {
            if order != ByteOrder::Native && order != ByteOrder::Little {
                tracing::trace!(%dtype, order = %order.symbol(), "non-native byte order ignored");
            }
        }),
        None => lookup_name(name).or_else(|| lookup_code_or_typestr(name)),
    };

    match dtype {
        Some(dtype) => {
            tracing::debug!(descriptor = %expr, %dtype, code = %dtype.code, "resolved descriptor");
            Ok(dtype)
        }
        None => Err(unsupported()),
    }
}

impl FromStr for DType {
    type Err = CodegenError;

    /// Parse and resolve descriptor text. Syntax errors are reported as
    /// unsupported descriptors spanning the whole input.
    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let expr = parser::parse_dtype(source).map_err(|errors| {
            tracing::debug!(source, errors = errors.len(), "descriptor failed to parse");
            CodegenError::unsupported(source.trim()).with_span(0..source.len())
        })?;
        resolve(&expr)
    }
}

/// Full names and aliases, without module prefix.
fn lookup_name(name: &str) -> Option<DType> {
    use ScalarKind::*;

    let aliased = match name {
        "bool" | "bool_" => DType::from_code('?'),
        "byte" => DType::from_code('b'),
        "ubyte" => DType::from_code('B'),
        "short" => DType::from_code('h'),
        "ushort" => DType::from_code('H'),
        "intc" => DType::from_code('i'),
        "uintc" => DType::from_code('I'),
        "int" | "int_" | "intp" | "long" => DType::from_code('l'),
        "uint" | "uintp" | "ulong" => DType::from_code('L'),
        "longlong" => DType::from_code('q'),
        "ulonglong" => DType::from_code('Q'),
        "half" => DType::from_code('e'),
        "single" => DType::from_code('f'),
        "float" | "float_" | "double" => DType::from_code('d'),
        "longdouble" | "longfloat" => DType::from_code('g'),
        "csingle" | "singlecomplex" => DType::from_code('F'),
        "complex" | "complex_" | "cdouble" | "cfloat" => DType::from_code('D'),
        "clongdouble" | "clongfloat" | "longcomplex" => DType::from_code('G'),
        _ => None,
    };
    if aliased.is_some() {
        return aliased;
    }

    // float64, complex128, uint8, ...
    let families = [
        ("uint", UnsignedInt),
        ("int", SignedInt),
        ("float", Float),
        ("complex", Complex),
    ];
    for (prefix, kind) in families {
        if let Some(bits) = name.strip_prefix(prefix) {
            return parse_width(bits, 8).and_then(|size| DType::from_kind_size(kind, size));
        }
    }
    None
}

/// `d`, `g`, `f8`, `c16`, `b1`
fn lookup_code_or_typestr(name: &str) -> Option<DType> {
    let mut chars = name.chars();
    let first = chars.next()?;
    let rest = chars.as_str();

    if rest.is_empty() {
        return DType::from_code(first);
    }

    let kind = match first {
        'b' => ScalarKind::Bool,
        'i' => ScalarKind::SignedInt,
        'u' => ScalarKind::UnsignedInt,
        'f' => ScalarKind::Float,
        'c' => ScalarKind::Complex,
        _ => return None,
    };
    parse_width(rest, 1).and_then(|size| DType::from_kind_size(kind, size))
}

/// Digits scaled down to bytes: bits with `per_byte` 8, bytes with 1.
fn parse_width(digits: &str, per_byte: u32) -> Option<u8> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u32 = digits.parse().ok()?;
    if value == 0 || value % per_byte != 0 {
        return None;
    }
    u8::try_from(value / per_byte).ok()
}
