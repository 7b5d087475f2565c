//! Lexer for device output.
//!
//! The lexer alternates between two phases.
//! In the command phase it skips whitespace and comment lines
//!     and identifies the next command.
//! In the argument phase it reads words until the number of arguments
//!     given in the command's [`Spec`] have been read.
//! A token is only returned once all of its arguments have been read;
//!     running out of input in the argument phase is an error.

use crate::commands::{self, ArgType, Spec};
use crate::error::{Error, LexError};
use crate::{Arg, Op, Token};

/// Lexer for device output.
///
/// The lexer is an iterator over tokens.
/// After the first error the lexer returns [`None`].
///
/// ```
/// use ditroff::{Lexer, Op};
/// let ops: Vec<Op> = Lexer::new("x T utf8\nV80\ntHello\n")
///     .map(|token| token.unwrap().op)
///     .collect();
/// assert_eq!(ops, vec![Op::Typesetter("utf8"), Op::MoveToV(80), Op::Text("Hello")]);
/// ```
pub struct Lexer<'a> {
    source: &'a str,
    /// The current position within the source string.
    current: usize,
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer from source text.
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source,
            current: 0,
            done: false,
        }
    }

    /// Returns the byte offset of the next unread character in the source.
    pub fn position(&self) -> usize {
        self.current
    }

    fn rest(&self) -> &'a str {
        &self.source[self.current..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_while(&mut self, f: fn(char) -> bool) {
        let rest = self.rest();
        self.current += rest.len() - rest.trim_start_matches(f).len();
    }

    fn skip_whitespace(&mut self) {
        self.skip_while(is_whitespace)
    }

    fn skip_comments(&mut self) {
        loop {
            self.skip_whitespace();
            if !self.rest().starts_with('#') {
                return;
            }
            self.current = match self.rest().find('\n') {
                None => self.source.len(),
                Some(i) => self.current + i + 1,
            };
        }
    }

    fn word(&mut self) -> Option<&'a str> {
        let rest = self.rest();
        let end = rest.find(is_whitespace).unwrap_or(rest.len());
        if end == 0 {
            return None;
        }
        self.current += end;
        Some(&rest[..end])
    }

    fn line(&mut self) -> Option<&'a str> {
        let rest = self.rest();
        if rest.is_empty() {
            return None;
        }
        let end = rest.find('\n').map(|i| i + 1).unwrap_or(rest.len());
        self.current += end;
        Some(&rest[..end])
    }

    fn command(&mut self) -> Result<Option<&'static Spec>, LexError> {
        let Some(c) = self.peek() else {
            return Ok(None);
        };
        let spec = match c {
            'm' => {
                let second = self.rest()[1..].chars().next();
                let spec = second
                    .and_then(commands::color)
                    .ok_or(LexError::UnknownColorCommand(second))?;
                self.current += spec.symbol.len();
                spec
            }
            'x' => {
                self.current += 1;
                self.skip_whitespace();
                let word = self
                    .word()
                    .ok_or(LexError::UnexpectedEnd { command: "x" })?;
                let spec = word
                    .chars()
                    .next()
                    .and_then(commands::device_control)
                    .ok_or_else(|| LexError::UnknownDeviceControl(word.into()))?;
                if spec.arg_type == ArgType::Line {
                    // The payload starts right after the blanks; a newline here is part of it.
                    self.skip_while(|c| c == ' ' || c == '\t');
                    return Ok(Some(spec));
                }
                spec
            }
            'D' => {
                let rest = self.rest();
                let Some(spec) = commands::DRAWING
                    .iter()
                    .find(|spec| rest.starts_with(spec.symbol))
                else {
                    return Err(LexError::UnsupportedDrawing(rest.chars().take(2).collect()));
                };
                self.current += spec.symbol.len();
                spec
            }
            c => {
                let spec = commands::plain(c).ok_or(LexError::UnknownCommand(c))?;
                self.current += c.len_utf8();
                spec
            }
        };
        self.skip_whitespace();
        Ok(Some(spec))
    }

    fn arguments(&mut self, spec: &'static Spec) -> Result<Vec<Arg<'a>>, LexError> {
        let unexpected_end = LexError::UnexpectedEnd {
            command: spec.symbol,
        };
        let mut args = Vec::with_capacity(spec.count);
        while args.len() < spec.count {
            let arg = match spec.arg_type {
                ArgType::Line => Arg::Text(self.line().ok_or(unexpected_end.clone())?),
                ArgType::Text => Arg::Text(self.word().ok_or(unexpected_end.clone())?),
                ArgType::Integer => {
                    let word = self.word().ok_or(unexpected_end.clone())?;
                    let n = word.parse::<i32>().map_err(|_| LexError::InvalidInteger {
                        command: spec.symbol,
                        word: word.into(),
                    })?;
                    Arg::Int(n)
                }
                ArgType::None => break,
            };
            args.push(arg);
            if spec.arg_type != ArgType::Line {
                self.skip_whitespace();
            }
        }
        Ok(args)
    }

    fn error_span(&self, start: usize) -> std::ops::Range<usize> {
        if self.current > start {
            start..self.current
        } else {
            start..start + self.peek().map(char::len_utf8).unwrap_or(0)
        }
    }

    fn next_token(&mut self) -> Result<Option<Token<'a>>, Error> {
        self.skip_comments();
        let start = self.current;
        let spec = match self.command() {
            Ok(None) => return Ok(None),
            Ok(Some(spec)) => spec,
            Err(err) => return Err(Error::new(err, self.error_span(start))),
        };
        let args = self
            .arguments(spec)
            .map_err(|err| Error::new(err, self.error_span(start)))?;
        let Some(op) = Op::build(spec.symbol, &args) else {
            return Err(Error::new(
                LexError::Inconsistent {
                    command: spec.symbol,
                },
                self.error_span(start),
            ));
        };
        let consumed = &self.source[start..self.current];
        let end = start + consumed.trim_end_matches(is_whitespace).len();
        Ok(Some(Token {
            op,
            span: start..end,
        }))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(Some(token)) => {
                tracing::trace!(command = token.op.symbol(), span = ?token.span, "lexed command");
                Some(Ok(token))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<'a> std::iter::FusedIterator for Lexer<'a> {}

/// Whitespace that separates words: space, tab, newline, carriage return,
/// vertical tab and form feed.
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}
