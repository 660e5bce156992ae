/*!
Building formulas from text.

The tokenizer accepts a few spellings per symbol:

| symbol | spellings |
|---|---|
| negation | `¬` `~` `!` |
| conjunction | `∧` `&` `/\` |
| disjunction | `∨` `\|` `\/` |
| implication | `→` `->` `>>` |
| biconditional | `↔` `<->` |
| parentheses | `(` `)` |

Variables are identifiers: an ASCII letter, then ASCII letters, digits, or
underscores. Whitespace separates tokens and is otherwise ignored.

There is no operator precedence. Each nesting level holds at most one binary
connective, and a second is a [ParseError::AmbiguousConnectives] rather than
being resolved by an associativity convention the text never stated.
Negation binds as a prefix and may be iterated without parentheses.
*/

use crate::{
    misc::log::targets,
    structures::formula::{Connective, Formula},
    types::err::ParseError,
};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    LeftParen,
    RightParen,
    Negation,
    Binary(Connective),
    Variable(String),
}

/// The symbol at the head of `rest`, with its width in bytes.
///
/// Longer spellings are listed first so that `<->` is never read as `<`,
/// `->`.
fn symbol(rest: &str) -> Option<(Token, usize)> {
    let spellings = [
        ("<->", Token::Binary(Connective::Iff)),
        ("↔", Token::Binary(Connective::Iff)),
        ("->", Token::Binary(Connective::Implies)),
        (">>", Token::Binary(Connective::Implies)),
        ("→", Token::Binary(Connective::Implies)),
        ("/\\", Token::Binary(Connective::And)),
        ("∧", Token::Binary(Connective::And)),
        ("&", Token::Binary(Connective::And)),
        ("\\/", Token::Binary(Connective::Or)),
        ("∨", Token::Binary(Connective::Or)),
        ("|", Token::Binary(Connective::Or)),
        ("¬", Token::Negation),
        ("~", Token::Negation),
        ("!", Token::Negation),
        ("(", Token::LeftParen),
        (")", Token::RightParen),
    ];
    spellings
        .into_iter()
        .find(|(spelling, _)| rest.starts_with(spelling))
        .map(|(spelling, token)| (token, spelling.len()))
}

fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut offset = 0;

    while offset < text.len() {
        let rest = &text[offset..];
        let head = match rest.chars().next() {
            Some(head) => head,
            None => break,
        };

        if head.is_whitespace() {
            offset += head.len_utf8();
        } else if let Some((token, width)) = symbol(rest) {
            tokens.push(token);
            offset += width;
        } else if head.is_ascii_alphabetic() {
            let width = rest
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(rest.len());
            tokens.push(Token::Variable(rest[..width].to_string()));
            offset += width;
        } else {
            return Err(ParseError::UnrecognizedToken(offset));
        }
    }

    Ok(tokens)
}

/// Parse a formula from text.
///
/// The grammar, with at most one binary connective per nesting level:
///
/// ```text
/// level := unit ( BINARY unit )?
/// unit  := NOT* ( VARIABLE | "(" level ")" )
/// ```
pub fn parse(text: &str) -> Result<Formula, ParseError> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let (formula, rest) = level(&tokens)?;
    match rest.first() {
        None => {
            log::trace!(target: targets::PARSE, "parsed {}", formula.prefix());
            Ok(formula)
        }
        Some(Token::Binary(_)) => Err(ParseError::AmbiguousConnectives),
        Some(Token::RightParen) => Err(ParseError::UnbalancedParentheses),
        Some(_) => Err(ParseError::TrailingInput),
    }
}

fn level(tokens: &[Token]) -> Result<(Formula, &[Token]), ParseError> {
    let (left, rest) = unit(tokens)?;
    match rest.first() {
        Some(Token::Binary(connective)) => {
            let (right, rest) = unit(&rest[1..])?;
            Ok((connective.apply(left, right), rest))
        }
        _ => Ok((left, rest)),
    }
}

fn unit(tokens: &[Token]) -> Result<(Formula, &[Token]), ParseError> {
    match tokens.first() {
        None | Some(Token::RightParen) | Some(Token::Binary(_)) => Err(ParseError::MissingOperand),

        Some(Token::Negation) => {
            let (inner, rest) = unit(&tokens[1..])?;
            Ok((Formula::not(inner), rest))
        }

        Some(Token::Variable(name)) => Ok((Formula::atom(name.clone()), &tokens[1..])),

        Some(Token::LeftParen) => {
            let (inner, rest) = level(&tokens[1..])?;
            match rest.first() {
                Some(Token::RightParen) => Ok((inner, &rest[1..])),
                None => Err(ParseError::UnbalancedParentheses),
                Some(Token::Binary(_)) => Err(ParseError::AmbiguousConnectives),
                Some(_) => Err(ParseError::TrailingInput),
            }
        }
    }
}
