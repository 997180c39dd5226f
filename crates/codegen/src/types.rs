// Type system for scalarmap
//
// Host dtypes (anything NumPy can spell) and the closed set of numeric
// descriptors the code generator knows how to emit.

use std::fmt;

/// Size in bytes of C `long double` on the target.
#[cfg(any(target_os = "windows", all(target_vendor = "apple", target_arch = "aarch64")))]
pub const LONG_DOUBLE_SIZE: u8 = 8;
#[cfg(all(target_arch = "x86", not(target_os = "windows")))]
pub const LONG_DOUBLE_SIZE: u8 = 12;
#[cfg(not(any(
    target_os = "windows",
    all(target_vendor = "apple", target_arch = "aarch64"),
    all(target_arch = "x86", not(target_os = "windows"))
)))]
pub const LONG_DOUBLE_SIZE: u8 = 16;

/// Alignment in bytes of C `long double` on the target.
pub const LONG_DOUBLE_ALIGN: u8 = if LONG_DOUBLE_SIZE == 12 {
    4
} else {
    LONG_DOUBLE_SIZE
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    SignedInt,
    UnsignedInt,
    Float,
    Complex,
}

/// A resolved host element type: kind, width and NumPy type code.
///
/// Several spellings can resolve to the same `DType` (`float64`, `d`, `<f8`,
/// `np.double`). The type code is what tells aliases apart when two types
/// share a width, e.g. `int64` (`l`) and `longlong` (`q`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DType {
    pub kind: ScalarKind,
    pub itemsize: u8,
    pub code: char,
}

impl DType {
    pub const fn new(kind: ScalarKind, itemsize: u8, code: char) -> Self {
        Self {
            kind,
            itemsize,
            code,
        }
    }

    /// Look up a single-character type code.
    pub fn from_code(code: char) -> Option<Self> {
        use ScalarKind::*;
        let (kind, itemsize) = match code {
            '?' => (Bool, 1),
            'b' => (SignedInt, 1),
            'B' => (UnsignedInt, 1),
            'h' => (SignedInt, 2),
            'H' => (UnsignedInt, 2),
            'i' => (SignedInt, 4),
            'I' => (UnsignedInt, 4),
            'l' | 'q' => (SignedInt, 8),
            'L' | 'Q' => (UnsignedInt, 8),
            'e' => (Float, 2),
            'f' => (Float, 4),
            'd' => (Float, 8),
            'g' => (Float, LONG_DOUBLE_SIZE),
            'F' => (Complex, 8),
            'D' => (Complex, 16),
            'G' => (Complex, LONG_DOUBLE_SIZE * 2),
            _ => return None,
        };
        Some(Self::new(kind, itemsize, code))
    }

    /// The type NumPy picks for a kind and width (`f8` -> `d`).
    ///
    /// Widths that exist only as extended precision (`f16` on x86_64)
    /// resolve to `long double`.
    pub fn from_kind_size(kind: ScalarKind, itemsize: u8) -> Option<Self> {
        use ScalarKind::*;
        let code = match (kind, itemsize) {
            (Bool, 1) => '?',
            (SignedInt, 1) => 'b',
            (SignedInt, 2) => 'h',
            (SignedInt, 4) => 'i',
            (SignedInt, 8) => 'l',
            (UnsignedInt, 1) => 'B',
            (UnsignedInt, 2) => 'H',
            (UnsignedInt, 4) => 'I',
            (UnsignedInt, 8) => 'L',
            (Float, 2) => 'e',
            (Float, 4) => 'f',
            (Float, 8) => 'd',
            (Float, n) if n == LONG_DOUBLE_SIZE => 'g',
            (Complex, 8) => 'F',
            (Complex, 16) => 'D',
            (Complex, n) if n == LONG_DOUBLE_SIZE * 2 => 'G',
            _ => return None,
        };
        Some(Self::new(kind, itemsize, code))
    }

    pub fn is_floating(&self) -> bool {
        self.kind == ScalarKind::Float
    }

    pub fn is_complex(&self) -> bool {
        self.kind == ScalarKind::Complex
    }

    pub fn is_integer(&self) -> bool {
        matches!(self.kind, ScalarKind::SignedInt | ScalarKind::UnsignedInt)
    }
}

impl fmt::Display for DType {
    // Canonical NumPy name, e.g. "float64", "complex256", "bool"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits = u32::from(self.itemsize) * 8;
        match self.kind {
            ScalarKind::Bool => write!(f, "bool"),
            ScalarKind::SignedInt => write!(f, "int{}", bits),
            ScalarKind::UnsignedInt => write!(f, "uint{}", bits),
            ScalarKind::Float => write!(f, "float{}", bits),
            ScalarKind::Complex => write!(f, "complex{}", bits),
        }
    }
}

/// Size and alignment of a C object, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub size: usize,
    pub align: usize,
}

/// The element types generated kernels can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericDescriptor {
    Float32,
    Float64,
    LongDouble, // platform extended precision
    Complex64,  // float _Complex
    Complex128, // double _Complex
    NativeInt,  // C int
}

impl NumericDescriptor {
    pub const ALL: [NumericDescriptor; 6] = [
        NumericDescriptor::Float32,
        NumericDescriptor::Float64,
        NumericDescriptor::LongDouble,
        NumericDescriptor::Complex64,
        NumericDescriptor::Complex128,
        NumericDescriptor::NativeInt,
    ];

    /// The C token for this type in generated source.
    pub fn c_type_name(self) -> &'static str {
        match self {
            NumericDescriptor::LongDouble => "long double",
            NumericDescriptor::NativeInt => "int",
            NumericDescriptor::Float32 => "float",
            NumericDescriptor::Float64 => "double",
            NumericDescriptor::Complex64 => "float _Complex",
            NumericDescriptor::Complex128 => "double _Complex",
        }
    }

    /// Type of the real and imaginary parts; identity for real types.
    pub fn real_component(self) -> Self {
        match self {
            NumericDescriptor::Complex64 => NumericDescriptor::Float32,
            NumericDescriptor::Complex128 => NumericDescriptor::Float64,
            other => other,
        }
    }

    pub fn is_complex(self) -> bool {
        matches!(
            self,
            NumericDescriptor::Complex64 | NumericDescriptor::Complex128
        )
    }

    pub fn is_floating(self) -> bool {
        matches!(
            self,
            NumericDescriptor::Float32 | NumericDescriptor::Float64 | NumericDescriptor::LongDouble
        )
    }

    pub fn is_integer(self) -> bool {
        self == NumericDescriptor::NativeInt
    }

    /// NumPy-style name ("float64", "longdouble", "intc").
    pub fn name(self) -> &'static str {
        match self {
            NumericDescriptor::Float32 => "float32",
            NumericDescriptor::Float64 => "float64",
            NumericDescriptor::LongDouble => "longdouble",
            NumericDescriptor::Complex64 => "complex64",
            NumericDescriptor::Complex128 => "complex128",
            NumericDescriptor::NativeInt => "intc",
        }
    }

    /// The host dtype this descriptor stands for.
    pub fn dtype(self) -> DType {
        match self {
            NumericDescriptor::Float32 => DType::new(ScalarKind::Float, 4, 'f'),
            NumericDescriptor::Float64 => DType::new(ScalarKind::Float, 8, 'd'),
            NumericDescriptor::LongDouble => DType::new(ScalarKind::Float, LONG_DOUBLE_SIZE, 'g'),
            NumericDescriptor::Complex64 => DType::new(ScalarKind::Complex, 8, 'F'),
            NumericDescriptor::Complex128 => DType::new(ScalarKind::Complex, 16, 'D'),
            NumericDescriptor::NativeInt => DType::new(ScalarKind::SignedInt, 4, 'i'),
        }
    }

    pub fn layout(self) -> Layout {
        match self {
            NumericDescriptor::LongDouble => Layout {
                size: LONG_DOUBLE_SIZE as usize,
                align: LONG_DOUBLE_ALIGN as usize,
            },
            // complex types align like their parts
            other => Layout {
                size: other.dtype().itemsize as usize,
                align: other.real_component().dtype().itemsize as usize,
            },
        }
    }
}

impl fmt::Display for NumericDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
