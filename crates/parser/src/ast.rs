// crates/parser/src/ast.rs

use std::fmt;

/// Byte offsets into the descriptor text.
pub type Span = std::ops::Range<usize>;

/// Module paths a descriptor may be qualified with.
pub const MODULE_PREFIXES: [&str; 2] = ["np", "numpy"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Little,        // <
    Big,           // >
    Native,        // =
    NotApplicable, // |
}

impl ByteOrder {
    pub fn symbol(self) -> char {
        match self {
            ByteOrder::Little => '<',
            ByteOrder::Big => '>',
            ByteOrder::Native => '=',
            ByteOrder::NotApplicable => '|',
        }
    }
}

/// One descriptor as written: `float64`, `<f8`, `np.intc`, `dtype('D')`.
#[derive(Debug, Clone, PartialEq)]
pub struct DTypeExpr {
    pub byte_order: Option<ByteOrder>,
    pub path: Vec<String>, // ["np", "float64"]
    pub span: Span,
}

impl DTypeExpr {
    /// Last path segment, the part that actually names the type.
    pub fn name(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or("")
    }

    /// Leading path segments (`np`, `numpy`), empty for bare names.
    pub fn module(&self) -> &[String] {
        match self.path.split_last() {
            Some((_, module)) => module,
            None => &[],
        }
    }
}

impl fmt::Display for DTypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(order) = self.byte_order {
            write!(f, "{}", order.symbol())?;
        }
        write!(f, "{}", self.path.join("."))
    }
}
