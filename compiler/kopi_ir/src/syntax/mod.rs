//! Canonical text for the declaration pieces the model stores as strings.
//!
//! Types, type parameters and class names are kept as text, but a node only
//! prints back to the same tree when that text reads as the grammar the
//! parser accepts. These functions check it and return the canonical
//! spelling: words separated by one space, `, ` between arguments, ` & `
//! between bounds, no other spaces (`Map<String, List<T>>`, `int[]`,
//! `String...`, `@Named("x") String`).
//!
//! Type-use annotation arguments are opaque; their text is kept with each
//! line trimmed and lines joined by one space.


use crate::TokenKind;

/// Why a piece of type text was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TypeTextError {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    #[error("unclosed annotation arguments")]
    UnclosedArguments,
    #[error("expected {expected}, found {found}")]
    Expected {
        expected: &'static str,
        found: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Piece<'a> {
    Word(&'a str),
    Punct(&'a str),
    /// Parenthesized annotation arguments, parentheses included.
    Args(String),
}

impl Piece<'_> {
    fn is_wordlike(&self) -> bool {
        matches!(self, Piece::Word(_) | Piece::Punct("?"))
    }

    fn describe(&self) -> String {
        match self {
            Piece::Word(text) | Piece::Punct(text) => format!("'{text}'"),
            Piece::Args(text) => format!("'{text}'"),
        }
    }
}

/// Canonical text of a type reference, optionally ending in `...`.
pub fn canonical_type(text: &str) -> Result<String, TypeTextError> {
    canonicalize(text, |reader| {
        reader.ty()?;
        reader.eat("...");
        Ok(())
    })
}

/// Canonical text of a parameter type, which may start with `final`.
pub fn canonical_parameter_type(text: &str) -> Result<String, TypeTextError> {
    canonicalize(text, |reader| {
        reader.eat_word("final");
        reader.ty()?;
        reader.eat("...");
        Ok(())
    })
}

/// Canonical text of `<T, U extends Bound & Other>`.
pub fn canonical_type_parameters(text: &str) -> Result<String, TypeTextError> {
    canonicalize(text, |reader| reader.type_parameters())
}

/// Canonical text of a class name with optional type parameters (`Box<T>`).
pub fn canonical_class_name(text: &str) -> Result<String, TypeTextError> {
    canonicalize(text, |reader| {
        reader.identifier()?;
        if reader.at("<") {
            reader.type_parameters()?;
        }
        Ok(())
    })
}

/// A Java identifier: a letter, `_` or `$`, then letters, digits, `_` or
/// `$`; never a keyword.
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    !first.is_ascii_digit()
        && is_word_char(first)
        && chars.all(is_word_char)
        && TokenKind::keyword(text).is_none()
}

/// Dotted identifiers: `java.util.List`.
pub fn is_qualified_name(text: &str) -> bool {
    text.split('.').all(is_identifier)
}

/// Whether `{` and `}` pair up across `lines` the way the lexer sees them:
/// braces inside comments and string or character literals do not count,
/// and the count never drops below zero.
pub fn braces_balanced<S: AsRef<str>>(lines: &[S]) -> bool {
    let mut depth = 0usize;
    let mut in_block_comment = false;
    for line in lines {
        let mut chars = line.as_ref().chars().peekable();
        while let Some(c) = chars.next() {
            if in_block_comment {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    in_block_comment = false;
                }
                continue;
            }
            match c {
                '/' if chars.peek() == Some(&'/') => break,
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    in_block_comment = true;
                }
                '"' | '\'' => {
                    // Unterminated literals stop at end of line.
                    while let Some(next) = chars.next() {
                        if next == '\\' {
                            chars.next();
                        } else if next == c {
                            break;
                        }
                    }
                }
                '{' => depth += 1,
                '}' => match depth.checked_sub(1) {
                    Some(d) => depth = d,
                    None => return false,
                },
                _ => {}
            }
        }
    }
    depth == 0 && !in_block_comment
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn canonicalize(
    text: &str,
    grammar: impl FnOnce(&mut Reader<'_, '_>) -> Result<(), TypeTextError>,
) -> Result<String, TypeTextError> {
    let pieces = split(text)?;
    let mut reader = Reader {
        pieces: &pieces,
        pos: 0,
    };
    grammar(&mut reader)?;
    if let Some(piece) = reader.peek() {
        return Err(TypeTextError::Expected {
            expected: "end of text",
            found: piece.describe(),
        });
    }
    Ok(render(&pieces))
}

fn split(text: &str) -> Result<Vec<Piece<'_>>, TypeTextError> {
    let mut pieces = Vec::new();
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        if c.is_whitespace() {
            rest = &rest[c.len_utf8()..];
            continue;
        }
        let len = if is_word_char(c) {
            let len = rest.find(|c: char| !is_word_char(c)).unwrap_or(rest.len());
            pieces.push(Piece::Word(&rest[..len]));
            len
        } else if rest.starts_with("...") {
            pieces.push(Piece::Punct("..."));
            3
        } else if c == '(' {
            let len = args_len(rest).ok_or(TypeTextError::UnclosedArguments)?;
            pieces.push(Piece::Args(format!("({})", join_lines(&rest[1..len - 1]))));
            len
        } else if "<>,.?&[]@".contains(c) {
            pieces.push(Piece::Punct(&rest[..1]));
            1
        } else {
            return Err(TypeTextError::UnexpectedChar(c));
        };
        rest = &rest[len..];
    }
    Ok(pieces)
}

/// Byte length of the parenthesized group at the start of `text`.
fn args_len(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (i, c) in text.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

fn join_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn render(pieces: &[Piece<'_>]) -> String {
    let mut out = String::new();
    let mut prev: Option<&Piece<'_>> = None;
    for piece in pieces {
        if let Some(prev) = prev {
            if needs_space(prev, piece) {
                out.push(' ');
            }
        }
        match piece {
            Piece::Word(text) | Piece::Punct(text) => out.push_str(text),
            Piece::Args(text) => out.push_str(text),
        }
        prev = Some(piece);
    }
    out
}

fn needs_space(prev: &Piece<'_>, next: &Piece<'_>) -> bool {
    let after_name = prev.is_wordlike() || matches!(prev, Piece::Args(_));
    (prev.is_wordlike() && next.is_wordlike())
        || (matches!(prev, Piece::Args(_)) && next.is_wordlike())
        || (after_name && *next == Piece::Punct("@"))
        || *prev == Piece::Punct(",")
        || *prev == Piece::Punct("&")
        || *next == Piece::Punct("&")
}

/// Recursive-descent check over the pieces, mirroring the parser's type
/// grammar.
struct Reader<'p, 'a> {
    pieces: &'p [Piece<'a>],
    pos: usize,
}

impl<'a> Reader<'_, 'a> {
    fn peek(&self) -> Option<&Piece<'a>> {
        self.pieces.get(self.pos)
    }

    fn at(&self, punct: &str) -> bool {
        self.peek() == Some(&Piece::Punct(punct))
    }

    fn at_word(&self, word: &str) -> bool {
        self.peek() == Some(&Piece::Word(word))
    }

    fn eat(&mut self, punct: &str) -> bool {
        let found = self.at(punct);
        if found {
            self.pos += 1;
        }
        found
    }

    fn eat_word(&mut self, word: &str) -> bool {
        let found = self.at_word(word);
        if found {
            self.pos += 1;
        }
        found
    }

    fn error(&self, expected: &'static str) -> TypeTextError {
        TypeTextError::Expected {
            expected,
            found: self
                .peek()
                .map_or_else(|| "end of text".to_string(), Piece::describe),
        }
    }

    fn expect(&mut self, punct: &'static str) -> Result<(), TypeTextError> {
        if self.eat(punct) {
            Ok(())
        } else {
            Err(self.error(punct))
        }
    }

    fn identifier(&mut self) -> Result<(), TypeTextError> {
        match self.peek() {
            Some(Piece::Word(word)) if is_identifier(word) => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(self.error("an identifier")),
        }
    }

    /// `(@Name(.Name)* [(args)])*`
    fn annotations(&mut self) -> Result<(), TypeTextError> {
        while self.eat("@") {
            self.identifier()?;
            while self.eat(".") {
                self.identifier()?;
            }
            if let Some(Piece::Args(_)) = self.peek() {
                self.pos += 1;
            }
        }
        Ok(())
    }

    /// `Name[<args>](.Name[<args>])*([])*`, `void` allowed as the head.
    fn ty(&mut self) -> Result<(), TypeTextError> {
        self.annotations()?;
        if !self.eat_word("void") {
            self.identifier()?;
        }
        loop {
            if self.at("<") {
                self.type_arguments()?;
            }
            if !self.eat(".") {
                break;
            }
            self.identifier()?;
        }
        while self.eat("[") {
            self.expect("]")?;
        }
        Ok(())
    }

    /// `<A, ? extends B, ? super C>`
    fn type_arguments(&mut self) -> Result<(), TypeTextError> {
        self.expect("<")?;
        if self.eat(">") {
            return Ok(());
        }
        loop {
            if self.eat("?") {
                if self.eat_word("extends") || self.eat_word("super") {
                    self.ty()?;
                }
            } else {
                self.ty()?;
            }
            if self.eat(",") {
                continue;
            }
            return self.expect(">");
        }
    }

    /// `<T, U extends A & B>`
    fn type_parameters(&mut self) -> Result<(), TypeTextError> {
        self.expect("<")?;
        loop {
            self.annotations()?;
            if !self.eat("?") {
                self.identifier()?;
            }
            if self.eat_word("extends") {
                self.ty()?;
                while self.eat("&") {
                    self.ty()?;
                }
            }
            if self.eat(",") {
                continue;
            }
            return self.expect(">");
        }
    }
}
