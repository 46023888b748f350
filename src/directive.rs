//! Parser for translation directive expressions.
//!
//! A directive names the `window` property to assign and the resources to
//! include, as written in a page template:
//!
//! - `('translations', 'messages, validation')` - key, then a quoted list
//! - `'i18n', messages, validation` - key, then bare names
//! - `(null, 'messages')` or `('', 'messages')` - default key
//! - `()` or an empty string - default key, no resources
//!
//! Grammar:
//!
//! ```text
//! directive := [ "(" ] [ key ] { "," [ names ] } [ ")" ]
//! key       := string | "null"
//! names     := string | ident
//! string    := '...' | "..."       (backslash escapes the next character)
//! ident     := [A-Za-z0-9_./:-]+
//! ```
//!
//! Every quoted name list is split on commas. Input is only ever tokenized,
//! never evaluated.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectiveError {
    #[error("Unterminated string starting at offset {0}")]
    UnterminatedString(usize),
    #[error("Unexpected character '{ch}' at offset {offset}")]
    UnexpectedCharacter { ch: char, offset: usize },
    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,
    #[error("Expected ',' between arguments, found {0:?}")]
    MissingComma(String),
    #[error("Window key must be a quoted string, found `{0}`")]
    UnquotedKey(String),
}

/// A parsed directive expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directive {
    /// `None` when the key is omitted, empty or `null`.
    pub window_key: Option<String>,
    /// Resource names in order of first appearance, without duplicates.
    pub includes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Str(String),
    Ident(String),
    Comma,
    Open,
    Close,
}

impl Directive {
    pub fn parse(expression: &str) -> Result<Self, DirectiveError> {
        let mut tokens = tokenize(expression)?;

        let opens = matches!(tokens.first(), Some(Token::Open));
        let closes = matches!(tokens.last(), Some(Token::Close));
        match (opens, closes) {
            (true, true) if tokens.len() >= 2 => {
                tokens.pop();
                tokens.remove(0);
            }
            (true, _) | (_, true) => return Err(DirectiveError::UnbalancedParentheses),
            _ => {}
        }

        let mut args = split_arguments(tokens)?.into_iter();

        let window_key = match args.next().flatten() {
            None => None,
            Some(Token::Str(key)) if key.is_empty() => None,
            Some(Token::Str(key)) => Some(key),
            Some(Token::Ident(ident)) if ident == "null" => None,
            Some(Token::Ident(ident)) => return Err(DirectiveError::UnquotedKey(ident)),
            Some(_) => return Err(DirectiveError::UnbalancedParentheses),
        };

        let mut includes: Vec<String> = Vec::new();
        for arg in args.flatten() {
            let names: Vec<String> = match arg {
                Token::Str(list) => list.split(',').map(|s| s.trim().to_string()).collect(),
                Token::Ident(name) => vec![name],
                _ => return Err(DirectiveError::UnbalancedParentheses),
            };
            for name in names {
                if !name.is_empty() && !includes.contains(&name) {
                    includes.push(name);
                }
            }
        }

        Ok(Directive {
            window_key,
            includes,
        })
    }

    /// The window key, or `default` when the directive leaves it out.
    pub fn window_key_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.window_key.as_deref().unwrap_or(default)
    }
}

/// Group tokens into comma-separated arguments. Empty arguments are `None`.
fn split_arguments(tokens: Vec<Token>) -> Result<Vec<Option<Token>>, DirectiveError> {
    let mut args = Vec::new();
    let mut current: Option<Token> = None;

    for token in tokens {
        match token {
            Token::Comma => args.push(current.take()),
            Token::Open | Token::Close => return Err(DirectiveError::UnbalancedParentheses),
            token => {
                if let Some(previous) = current.replace(token) {
                    return Err(DirectiveError::MissingComma(describe(&previous)));
                }
            }
        }
    }
    args.push(current);

    Ok(args)
}

fn describe(token: &Token) -> String {
    match token {
        Token::Str(s) | Token::Ident(s) => s.clone(),
        Token::Comma => ",".to_string(),
        Token::Open => "(".to_string(),
        Token::Close => ")".to_string(),
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/' | ':')
}

fn tokenize(input: &str) -> Result<Vec<Token>, DirectiveError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        match c {
            c if c.is_whitespace() => {}
            ',' => tokens.push(Token::Comma),
            '(' => tokens.push(Token::Open),
            ')' => tokens.push(Token::Close),
            '\'' | '"' => {
                let quote = c;
                let mut value = String::new();
                let mut closed = false;
                while let Some((_, c)) = chars.next() {
                    match c {
                        '\\' => {
                            if let Some((_, escaped)) = chars.next() {
                                value.push(escaped);
                            }
                        }
                        c if c == quote => {
                            closed = true;
                            break;
                        }
                        c => value.push(c),
                    }
                }
                if !closed {
                    return Err(DirectiveError::UnterminatedString(offset));
                }
                tokens.push(Token::Str(value));
            }
            c if is_ident_char(c) => {
                let mut ident = String::from(c);
                while let Some(&(_, next)) = chars.peek() {
                    if !is_ident_char(next) {
                        break;
                    }
                    ident.push(next);
                    chars.next();
                }
                tokens.push(Token::Ident(ident));
            }
            ch => return Err(DirectiveError::UnexpectedCharacter { ch, offset }),
        }
    }

    Ok(tokens)
}
