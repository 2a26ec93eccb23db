//! Turn raw text into a stream of tokens, converting leading whitespace
//! into structural Indent and Undent tokens.

use std::borrow::Cow;

use super::errors::ParsingError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'i> {
    Symbol(&'i str),
    /// Contents of a double-quoted string, with escapes already decoded.
    String(Cow<'i, str>),
    Colon,
    Dash,
    /// A new line beginning at the current indentation level.
    Empty,
    Indent(usize),
    Undent(usize),
    End,
}

// A token together with where it was found.
#[derive(Debug, Clone)]
struct Lexeme<'i> {
    result: Result<Token<'i>, ParsingError>,
    offset: usize,
    column: usize,
}

/// Single-use tokenizer over one source buffer. Holds the current
/// indentation level and at most one token of lookahead.
#[derive(Debug)]
pub struct Tokenizer<'i> {
    source: &'i str,
    offset: usize,
    level: usize,
    line_start: bool,
    line_begin: usize,
    // position of the token most recently handed out by next_token()
    start: usize,
    column: usize,
    peeked: Option<Lexeme<'i>>,
}

impl<'i> Tokenizer<'i> {
    pub fn new(content: &'i str) -> Tokenizer<'i> {
        Tokenizer {
            source: content,
            offset: 0,
            level: 0,
            line_start: true,
            line_begin: 0,
            start: 0,
            column: 0,
            peeked: None,
        }
    }

    /// Consume and return the next token.
    pub fn next_token(&mut self) -> Result<Token<'i>, ParsingError> {
        let lexeme = match self
            .peeked
            .take()
        {
            Some(lexeme) => lexeme,
            None => self.scan(),
        };
        self.start = lexeme.offset;
        self.column = lexeme.column;
        lexeme.result
    }

    /// Return the next token without consuming it. Repeated calls without
    /// an intervening next_token() return the same token.
    pub fn peek_token(&mut self) -> Result<Token<'i>, ParsingError> {
        let lexeme = match self
            .peeked
            .take()
        {
            Some(lexeme) => lexeme,
            None => self.scan(),
        };
        let result = lexeme
            .result
            .clone();
        self.peeked = Some(lexeme);
        result
    }

    /// The indentation level of the most recently scanned line.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Byte offset of the last token returned by next_token().
    pub fn offset(&self) -> usize {
        self.start
    }

    /// Column of the last token returned by next_token().
    pub fn column(&self) -> usize {
        self.column
    }

    /// Byte offset of the upcoming token, if it has been peeked; otherwise
    /// the current scanning position.
    pub fn upcoming(&self) -> usize {
        match &self.peeked {
            Some(lexeme) => lexeme.offset,
            None => self.offset,
        }
    }

    fn advance(&mut self, width: usize) {
        self.source = &self.source[width..];
        self.offset += width;
    }

    fn lexeme(&self, result: Result<Token<'i>, ParsingError>, offset: usize) -> Lexeme<'i> {
        Lexeme {
            result,
            offset,
            column: offset - self.line_begin,
        }
    }

    fn scan(&mut self) -> Lexeme<'i> {
        loop {
            if self.line_start {
                self.skip_blank_lines();

                if self
                    .source
                    .is_empty()
                {
                    return self.lexeme(Ok(Token::End), self.offset);
                }

                self.line_begin = self.offset;
                let width = self
                    .source
                    .bytes()
                    .take_while(|b| *b == b' ' || *b == b'\t')
                    .count();
                self.advance(width);
                self.line_start = false;

                let token = if width == self.level {
                    Token::Empty
                } else if width > self.level {
                    Token::Indent(width)
                } else {
                    Token::Undent(width)
                };
                self.level = width;

                return self.lexeme(Ok(token), self.offset);
            }

            let width = self
                .source
                .bytes()
                .take_while(|b| *b == b' ' || *b == b'\t' || *b == b'\r')
                .count();
            self.advance(width);

            let offset = self.offset;
            let c = match self
                .source
                .chars()
                .next()
            {
                Some(c) => c,
                None => return self.lexeme(Ok(Token::End), offset),
            };

            match c {
                '\n' => {
                    self.advance(1);
                    self.line_start = true;
                }
                '"' => {
                    let result = self.read_string();
                    return self.lexeme(result, offset);
                }
                '-' => {
                    self.advance(1);
                    return self.lexeme(Ok(Token::Dash), offset);
                }
                ':' => {
                    self.advance(1);
                    return self.lexeme(Ok(Token::Colon), offset);
                }
                c if c.is_alphanumeric() || c == '_' => {
                    let result = self.read_symbol();
                    return self.lexeme(result, offset);
                }
                c => {
                    return self.lexeme(Err(ParsingError::UnrecognizedCharacter(offset, c)), offset);
                }
            }
        }
    }

    // Lines holding nothing but whitespace do not take part in indentation.
    fn skip_blank_lines(&mut self) {
        loop {
            let end = self
                .source
                .find('\n');
            let line = match end {
                Some(i) => &self.source[..i],
                None => self.source,
            };

            if !line
                .bytes()
                .all(|b| b == b' ' || b == b'\t' || b == b'\r')
            {
                return;
            }

            match end {
                Some(i) => self.advance(i + 1),
                None => {
                    self.advance(line.len());
                    return;
                }
            }
        }
    }

    fn read_symbol(&mut self) -> Result<Token<'i>, ParsingError> {
        let end = self
            .source
            .find(|c: char| matches!(c, ' ' | '\t' | '\r' | '\n' | '"' | ':' | '-'))
            .unwrap_or(self.source.len());

        if self.source[end..].starts_with('"') {
            return Err(ParsingError::InvalidSymbol(self.offset));
        }

        let symbol = &self.source[..end];
        self.advance(end);
        Ok(Token::Symbol(symbol))
    }

    fn read_string(&mut self) -> Result<Token<'i>, ParsingError> {
        let start = self.offset;
        let body = &self.source[1..];

        let mut escaped = false;
        let mut has_escapes = false;
        let mut close = None;

        for (i, c) in body.char_indices() {
            if escaped {
                escaped = false;
                continue;
            }
            match c {
                '\\' => {
                    escaped = true;
                    has_escapes = true;
                }
                '"' => {
                    close = Some(i);
                    break;
                }
                '\n' => break,
                _ => {}
            }
        }

        let close = close.ok_or(ParsingError::UnterminatedString(start))?;
        let text = &body[..close];

        // opening quote, content, closing quote
        self.advance(close + 2);

        if has_escapes {
            Ok(Token::String(Cow::Owned(unescape(text))))
        } else {
            Ok(Token::String(Cow::Borrowed(text)))
        }
    }
}

fn unescape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => result.push('"'),
            Some('\\') => result.push('\\'),
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    result
}
