use crate::ast::{ByteOrder, DTypeExpr, MODULE_PREFIXES};
use chumsky::prelude::*;
use lexer::token::Token;

/// Exactly one descriptor and nothing after it.
pub fn single_parser() -> impl Parser<Token, DTypeExpr, Error = Simple<Token>> {
    dtype_parser().then_ignore(end())
}

pub fn dtype_parser() -> impl Parser<Token, DTypeExpr, Error = Simple<Token>> + Clone {
    let byte_order = select! {
        Token::Lt => ByteOrder::Little,
        Token::Gt => ByteOrder::Big,
        Token::Eq => ByteOrder::Native,
        Token::Pipe => ByteOrder::NotApplicable,
    };

    let path = select! { Token::Identifier(name) => name }
        .separated_by(just(Token::Dot))
        .at_least(1);

    // `?` is the bool type code and never part of a dotted path
    let bool_code = just(Token::Question).to(vec!["?".to_string()]);

    // <f8, float64, numpy.float64, |?
    let bare = byte_order
        .or_not()
        .then(path.clone().or(bool_code))
        .map_with_span(|(byte_order, path), span| DTypeExpr {
            byte_order,
            path,
            span,
        });

    // 'float64' or "<f8"
    let quoted = bare
        .clone()
        .delimited_by(just(Token::Quote), just(Token::Quote));

    // dtype('float64'), np.dtype(float32)
    let call = path
        .try_map(|path: Vec<String>, span| match path.as_slice() {
            [name] if name == "dtype" => Ok(()),
            [module, name] if name == "dtype" && MODULE_PREFIXES.contains(&module.as_str()) => {
                Ok(())
            }
            _ => Err(Simple::custom(span, "expected 'dtype', 'np.dtype' or 'numpy.dtype'")),
        })
        .ignore_then(
            quoted
                .clone()
                .or(bare.clone())
                .delimited_by(just(Token::LParen), just(Token::RParen)),
        );

    call.or(quoted).or(bare)
}
