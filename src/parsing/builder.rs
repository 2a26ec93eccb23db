//! Recursive descent over the token stream, rebuilding nested mappings and
//! sequences from indentation changes, colons, and dashes.

use tracing::trace;

use super::errors::ParsingError;
use super::scope::{Container, Scope, ScopeError};
use super::tokenizer::{Token, Tokenizer};
use super::Options;
use crate::language::{Document, Node};

/// Parse a complete document. The first error aborts the parse; any
/// partially built tree is dropped.
pub fn parse_document(content: &str, options: &Options) -> Result<Document, ParsingError> {
    if content.is_empty() {
        return Err(ParsingError::EmptyInput);
    }

    let mut builder = Builder::new(content, options);
    builder.read_document()
}

pub struct Builder<'i> {
    tokens: Tokenizer<'i>,
    scope: Scope,
    limit: usize,
}

impl<'i> Builder<'i> {
    pub fn new(content: &'i str, options: &Options) -> Builder<'i> {
        Builder {
            tokens: Tokenizer::new(content),
            scope: Scope::new(options.max_depth),
            limit: options.max_depth,
        }
    }

    pub fn read_document(&mut self) -> Result<Document, ParsingError> {
        // The first token is always the start of the first non-blank line,
        // whose indentation becomes the base for the root container.
        let base = match self
            .tokens
            .next_token()?
        {
            Token::Empty => 0,
            Token::Indent(level) => level,
            Token::End => return Err(ParsingError::NoContent(self.tokens.offset())),
            _ => return Err(ParsingError::InvalidRoot(self.tokens.offset())),
        };

        // Nothing can undent below the root's level without being an
        // inconsistent indentation, so the root container only finishes
        // at End.
        let root = match self
            .tokens
            .peek_token()?
        {
            Token::Symbol(_) => self.build_mapping(base, None)?,
            Token::Dash => self.build_sequence(base)?,
            _ => {
                self.tokens
                    .next_token()?;
                return Err(ParsingError::InvalidRoot(self.tokens.offset()));
            }
        };

        Ok(Document::new(root))
    }

    fn enter(&mut self, level: usize, container: Container) -> Result<(), ParsingError> {
        match self
            .scope
            .push(level, container)
        {
            Ok(()) => Ok(()),
            Err(ScopeError::TooDeep) => Err(ParsingError::NestingTooDeep(
                self.tokens
                    .upcoming(),
                self.limit,
            )),
            Err(ScopeError::NotDeeper) => Err(ParsingError::InconsistentIndentation(
                self.tokens
                    .upcoming(),
                level,
            )),
        }
    }

    /// Read a mapping whose keys sit at column `base`. When the first key
    /// has already been consumed (a mapping starting on the same line as a
    /// sequence dash) it is passed in as `first`.
    fn build_mapping(
        &mut self,
        base: usize,
        first: Option<(&'i str, usize)>,
    ) -> Result<Node, ParsingError> {
        self.enter(base, Container::Mapping)?;
        let result = self.read_entries(base, first);
        self.scope
            .pop();
        result
    }

    fn read_entries(
        &mut self,
        base: usize,
        first: Option<(&'i str, usize)>,
    ) -> Result<Node, ParsingError> {
        let mut entries: Vec<(String, Node)> = Vec::new();
        let mut pending = first;

        loop {
            let (key, offset) = match pending.take() {
                Some(first) => first,
                None => self.read_key()?,
            };

            if entries
                .iter()
                .any(|(existing, _)| existing == key)
            {
                return Err(ParsingError::DuplicateKey(offset, key.to_string()));
            }

            self.require_colon()?;
            let value = self.read_value(base)?;
            entries.push((key.to_string(), value));

            if !self.continues(base)? {
                break;
            }
        }

        Ok(Node::Mapping(entries))
    }

    fn read_key(&mut self) -> Result<(&'i str, usize), ParsingError> {
        let token = self
            .tokens
            .next_token()?;
        let offset = self
            .tokens
            .offset();

        match token {
            Token::Symbol(key) => Ok((key, offset)),
            Token::String(_) => Err(ParsingError::KeyNotSymbol(offset)),
            Token::Dash => Err(ParsingError::MixedContainer(offset)),
            _ => Err(ParsingError::ExpectedKey(offset)),
        }
    }

    fn require_colon(&mut self) -> Result<(), ParsingError> {
        match self
            .tokens
            .next_token()?
        {
            Token::Colon => Ok(()),
            _ => Err(ParsingError::ExpectedColon(
                self.tokens
                    .offset(),
            )),
        }
    }

    /// Read what follows `key:`, either a scalar on the same line or an
    /// indented block beneath.
    fn read_value(&mut self, base: usize) -> Result<Node, ParsingError> {
        match self
            .tokens
            .next_token()?
        {
            Token::Symbol(text) => Ok(Node::Scalar(text.to_string())),
            Token::String(text) => Ok(Node::Scalar(text.into_owned())),
            Token::Indent(level) if level > base => self.read_block(level),
            _ => Err(ParsingError::ExpectedValue(
                self.tokens
                    .offset(),
            )),
        }
    }

    // A nested block is a sequence if its first line begins with a dash,
    // otherwise a mapping.
    fn read_block(&mut self, level: usize) -> Result<Node, ParsingError> {
        match self
            .tokens
            .peek_token()?
        {
            Token::Dash => self.build_sequence(level),
            _ => self.build_mapping(level, None),
        }
    }

    /// Read a sequence whose dashes sit at column `base`.
    fn build_sequence(&mut self, base: usize) -> Result<Node, ParsingError> {
        self.enter(base, Container::Sequence)?;
        let result = self.read_items(base);
        self.scope
            .pop();
        result
    }

    fn read_items(&mut self, base: usize) -> Result<Node, ParsingError> {
        let mut items = Vec::new();

        loop {
            match self
                .tokens
                .next_token()?
            {
                Token::Dash => {}
                Token::Symbol(_) | Token::String(_) => {
                    return Err(ParsingError::MixedContainer(
                        self.tokens
                            .offset(),
                    ))
                }
                _ => {
                    return Err(ParsingError::ExpectedDash(
                        self.tokens
                            .offset(),
                    ))
                }
            }

            let item = self.read_item(base)?;
            items.push(item);

            if !self.continues(base)? {
                break;
            }
        }

        Ok(Node::Sequence(items))
    }

    fn read_item(&mut self, base: usize) -> Result<Node, ParsingError> {
        let token = self
            .tokens
            .next_token()?;
        let offset = self
            .tokens
            .offset();

        match token {
            Token::Symbol(text) => {
                if self
                    .tokens
                    .peek_token()?
                    == Token::Colon
                {
                    let column = self
                        .tokens
                        .column();
                    self.build_mapping(column, Some((text, offset)))
                } else {
                    Ok(Node::Scalar(text.to_string()))
                }
            }
            Token::String(text) => {
                if self
                    .tokens
                    .peek_token()?
                    == Token::Colon
                {
                    Err(ParsingError::KeyNotSymbol(offset))
                } else {
                    Ok(Node::Scalar(text.into_owned()))
                }
            }
            Token::Indent(level) if level > base => self.read_block(level),
            _ => Err(ParsingError::ExpectedItem(offset)),
        }
    }

    /// Having finished an entry or item in the container at `base`, decide
    /// whether the next line continues it. If the next line is at the same
    /// level its line-start token is consumed. If it belongs to an enclosing
    /// container it is left for that container to pick up.
    fn continues(&mut self, base: usize) -> Result<bool, ParsingError> {
        let level = match self
            .tokens
            .peek_token()?
        {
            Token::End => return Ok(false),
            Token::Empty => self
                .tokens
                .level(),
            Token::Indent(level) | Token::Undent(level) => level,
            _ => {
                self.tokens
                    .next_token()?;
                return Err(ParsingError::ExpectedLineEnd(
                    self.tokens
                        .offset(),
                ));
            }
        };

        if level == base {
            self.tokens
                .next_token()?;
            return Ok(true);
        }

        if level > base {
            self.tokens
                .next_token()?;
            return Err(ParsingError::UnexpectedIndentation(
                self.tokens
                    .offset(),
            ));
        }

        if !self
            .scope
            .resolves(level)
        {
            self.tokens
                .next_token()?;
            return Err(ParsingError::InconsistentIndentation(
                self.tokens
                    .offset(),
                level,
            ));
        }

        trace!(
            "undent to {} closes {} open blocks",
            level,
            self.scope
                .closed_by(level)
        );
        Ok(false)
    }
}
