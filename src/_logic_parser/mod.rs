use crate::error::LogicParseError;
use crate::BinaryOp::{And, Or};
use crate::Logic;
use crate::Logic::*;
use std::iter::Peekable;
use std::str::Chars;

/// **(internal)** Parse the text of a logic expression into a `Logic` tree.
pub(crate) fn parse_logic(value: &str) -> Result<Logic, LogicParseError> {
    let tokens = tokenize_group(&mut value.chars().peekable(), true)?;
    Ok(*(parse_formula(&tokens)?))
}

/// **(internal)** An enum of possible tokens occurring in a string representation of
/// a `LogicExpression`.
///
/// Alternative spellings of operators (`&&`, `and`, `||`, `or`, `not`) are normalized
/// into the same token already during tokenization.
#[derive(Debug, Eq, PartialEq)]
enum Token {
    Not,                // '!', 'not'
    And,                // '&', '&&', 'and'
    Or,                 // '|', '||', 'or'
    Name(String),       // 'name'
    Tokens(Vec<Token>), // A block of tokens inside parentheses
}

/// **(internal)** Process a peekable iterator of characters into a vector of `Token`s.
///
/// The outer method always consumes the opening parenthesis and the recursive call consumes the
/// closing parenthesis. Use `top_level` to indicate that there will be no closing parenthesis.
///
/// Whitespace is only a separator. In particular, `!x`, `! x` and `!   x` produce the same
/// token sequence.
fn tokenize_group(data: &mut Peekable<Chars>, top_level: bool) -> Result<Vec<Token>, LogicParseError> {
    let mut output = Vec::new();
    while let Some(c) = data.next() {
        match c {
            c if c.is_whitespace() => { /* Skip whitespace */ }
            '!' => output.push(Token::Not),
            '&' => {
                if data.peek() == Some(&'&') {
                    data.next();
                }
                output.push(Token::And);
            }
            '|' => {
                if data.peek() == Some(&'|') {
                    data.next();
                }
                output.push(Token::Or);
            }
            ')' => {
                return if !top_level {
                    Ok(output)
                } else {
                    Err(LogicParseError::UnexpectedClosingParenthesis)
                };
            }
            '(' => {
                // start a nested token group
                let tokens = tokenize_group(data, false)?;
                output.push(Token::Tokens(tokens));
            }
            c if is_valid_in_name(c) => {
                // Names are maximal runs of name characters, so `GLUT1I` never yields `GLUT1`.
                let mut name = vec![c];
                while let Some(c) = data.peek() {
                    if !is_valid_in_name(*c) {
                        break;
                    } else {
                        name.push(*c);
                        data.next(); // advance iterator
                    }
                }
                let name: String = name.into_iter().collect();
                output.push(match name.as_str() {
                    "not" => Token::Not,
                    "and" => Token::And,
                    "or" => Token::Or,
                    _ => Token::Name(name),
                });
            }
            _ => return Err(LogicParseError::UnknownOperator(c)),
        }
    }
    if top_level {
        Ok(output)
    } else {
        Err(LogicParseError::MissingClosingParenthesis)
    }
}

/// **(internal)** Check if given char can appear in a name.
fn is_valid_in_name(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// **(internal)** Parse a `Logic` tree using the recursive steps.
fn parse_formula(data: &[Token]) -> Result<Box<Logic>, LogicParseError> {
    or(data)
}

/// **(internal)** Utility method to find first occurrence of a specific token in the token tree.
fn index_of_first(data: &[Token], token: Token) -> Option<usize> {
    data.iter().position(|t| *t == token)
}

/// **(internal)** Recursive parsing step 1: extract `|` operators.
fn or(data: &[Token]) -> Result<Box<Logic>, LogicParseError> {
    let or_token = index_of_first(data, Token::Or);
    Ok(if let Some(i) = or_token {
        Box::new(Binary(Or, and(&data[..i])?, or(&data[(i + 1)..])?))
    } else {
        and(data)?
    })
}

/// **(internal)** Recursive parsing step 2: extract `&` operators.
fn and(data: &[Token]) -> Result<Box<Logic>, LogicParseError> {
    let and_token = index_of_first(data, Token::And);
    Ok(if let Some(i) = and_token {
        Box::new(Binary(And, terminal(&data[..i])?, and(&data[(i + 1)..])?))
    } else {
        terminal(data)?
    })
}

/// **(internal)** Recursive parsing step 3: extract terminals and negations.
fn terminal(data: &[Token]) -> Result<Box<Logic>, LogicParseError> {
    if data.is_empty() {
        return Err(LogicParseError::ExpectedFormula);
    }
    if data[0] == Token::Not {
        return Ok(Box::new(Not(terminal(&data[1..])?)));
    }
    if data.len() == 1 {
        // This should be either a name or a parenthesis group, anything else does not make sense.
        match &data[0] {
            Token::Name(name) => {
                return Ok(Box::new(match name.as_str() {
                    "true" | "True" | "1" => Const(true),
                    "false" | "False" | "0" => Const(false),
                    _ => Var(name.clone()),
                }));
            }
            Token::Tokens(inner) => return parse_formula(inner),
            _ => {} // otherwise, fall through to the error at the end.
        }
    }
    Err(LogicParseError::UnexpectedTokens(tokens_to_string(data)))
}

/// **(internal)** Render a token sequence back into a (normalized) string for error messages.
fn tokens_to_string(data: &[Token]) -> String {
    data.iter()
        .map(|token| match token {
            Token::Not => "!".to_string(),
            Token::And => "&".to_string(),
            Token::Or => "|".to_string(),
            Token::Name(name) => name.clone(),
            Token::Tokens(inner) => format!("({})", tokens_to_string(inner)),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
