// Kernel signatures
//
// The `tabulate_tensor` entry point every generated integral kernel exposes:
//
//   void tabulate_tensor(T* A, const T* w, const T* c, const X* coordinate_dofs,
//                        const int* entity_local_index,
//                        const uint8_t* quadrature_permutation);
//
// T is the scalar type of the finite element data and X the geometry type.

use crate::types::{Layout, NumericDescriptor};
use crate::{CodegenError, CodegenResult};
use std::fmt;

const GEOMETRY_REQUIREMENT: &str =
    "Geometry must be a real floating type: float32, float64, longdouble";

/// What a kernel parameter points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointee {
    Scalar(NumericDescriptor),
    Int,
    UInt8,
}

impl Pointee {
    pub fn c_type_name(self) -> &'static str {
        match self {
            Pointee::Scalar(descriptor) => descriptor.c_type_name(),
            Pointee::Int => "int",
            Pointee::UInt8 => "uint8_t",
        }
    }

    pub fn layout(self) -> Layout {
        match self {
            Pointee::Scalar(descriptor) => descriptor.layout(),
            Pointee::Int => NumericDescriptor::NativeInt.layout(),
            Pointee::UInt8 => Layout { size: 1, align: 1 },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelParam {
    pub name: &'static str,
    pub pointee: Pointee,
    pub mutable: bool,
}

impl fmt::Display for KernelParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.mutable {
            write!(f, "const ")?;
        }
        write!(f, "{}* restrict {}", self.pointee.c_type_name(), self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelSignature {
    scalar: NumericDescriptor,
    geometry: NumericDescriptor,
    params: Vec<KernelParam>,
}

impl KernelSignature {
    /// Signature for a kernel over `scalar` data on a `geometry` mesh.
    ///
    /// The geometry type must be a real floating type.
    pub fn tabulate_tensor(
        scalar: NumericDescriptor,
        geometry: NumericDescriptor,
    ) -> CodegenResult<Self> {
        if !geometry.is_floating() {
            return Err(CodegenError::unsupported(geometry.to_string())
                .requiring(GEOMETRY_REQUIREMENT));
        }

        let param = |name, pointee, mutable| KernelParam {
            name,
            pointee,
            mutable,
        };
        let params = vec![
            param("A", Pointee::Scalar(scalar), true),
            param("w", Pointee::Scalar(scalar), false),
            param("c", Pointee::Scalar(scalar), false),
            param("coordinate_dofs", Pointee::Scalar(geometry), false),
            param("entity_local_index", Pointee::Int, false),
            param("quadrature_permutation", Pointee::UInt8, false),
        ];

        Ok(Self {
            scalar,
            geometry,
            params,
        })
    }

    pub fn scalar(&self) -> NumericDescriptor {
        self.scalar
    }

    pub fn geometry(&self) -> NumericDescriptor {
        self.geometry
    }

    pub fn params(&self) -> &[KernelParam] {
        &self.params
    }

    /// C prototype for this signature, without trailing semicolon.
    pub fn to_c_declaration(&self, symbol: &str) -> String {
        let params: Vec<String> = self.params.iter().map(|p| p.to_string()).collect();
        format!("void {}({})", symbol, params.join(", "))
    }
}

/// True if `symbol` can be used as a C function name.
pub fn is_c_identifier(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
