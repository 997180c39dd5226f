use logos::Logos;
use std::fmt;

#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(skip r"[ \t\n\f]+")] // Ignore spaces, tabs and line breaks automatically
pub enum Token {
    // --- Names ---

    // Type names, module prefixes and typestr bodies (ex: "float64", "np", "c16")
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // Bare integers; never a valid descriptor, kept so the parser can say so
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<u32>().ok())]
    Int(u32),

    // Either quote character (ex: dtype('float64'), dtype("<f8"))
    #[regex(r#"["']"#)]
    Quote,

    // --- Byte order prefixes ---
    #[token("<")]
    Lt, // little endian

    #[token(">")]
    Gt, // big endian

    #[token("=")]
    Eq, // native

    #[token("|")]
    Pipe, // not applicable

    // --- Type codes that are not identifiers ---
    #[token("?")]
    Question, // bool

    // --- Punctuation ---
    #[token(".")]
    Dot,

    #[token(",")]
    Comma,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    // Placeholder for input logos could not match
    Error,
}

impl Token {
    /// True for the four byte-order prefixes.
    pub fn is_byte_order(&self) -> bool {
        matches!(self, Token::Lt | Token::Gt | Token::Eq | Token::Pipe)
    }
}

// This helps to show the token prettily in the print
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Identifier(name) => write!(f, "{}", name),
            Token::Int(n) => write!(f, "{}", n),
            Token::Quote => write!(f, "'"),
            Token::Lt => write!(f, "<"),
            Token::Gt => write!(f, ">"),
            Token::Eq => write!(f, "="),
            Token::Pipe => write!(f, "|"),
            Token::Question => write!(f, "?"),
            Token::Dot => write!(f, "."),
            Token::Comma => write!(f, ","),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Error => write!(f, "<error>"),
        }
    }
}
