//! Errors returned while lexing and rendering device output.
//!
//! There are two kinds of errors.
//! A [`LexError`] means the source is not valid device output,
//!     or uses a part of the format that is not supported.
//! A [`RenderError`] means the source is well formed but the commands in it
//!     can't be rendered to plain text, like a motion that isn't a multiple
//!     of the quantum.
//!
//! Both kinds are fatal.
//! There is no recovery: the first error ends the parse of the document.

use std::ops::Range;

/// Error encountered while lexing or rendering device output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The kind of error.
    pub kind: ErrorKind,
    /// Byte range in the source of the command that triggered the error.
    pub span: Range<usize>,
}

/// Kind of an [`Error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Lex(LexError),
    Render(RenderError),
}

/// The source is not valid device output, or uses unsupported syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that does not introduce any command.
    UnknownCommand(char),
    /// An integer argument that does not parse as an integer.
    InvalidInteger {
        command: &'static str,
        word: String,
    },
    /// A color command other than `mc`, `md`, `mg`, `mk` or `mr`.
    UnknownColorCommand(Option<char>),
    /// A device control command that is not in the command table.
    UnknownDeviceControl(String),
    /// A drawing command other than `DFd`.
    UnsupportedDrawing(String),
    /// The source ended before all of the arguments of a command were read.
    UnexpectedEnd { command: &'static str },
    /// The lexer read a command whose arguments do not match the op it
    ///     corresponds to.
    ///
    /// This indicates a bug in the command table.
    Inconsistent { command: &'static str },
}

/// The commands in the source can't be rendered to plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The typesetter was set more than once.
    TypesetterAlreadySet,
    /// The typesetter is not `utf8`.
    UnsupportedTypesetter(String),
    /// The resolution was set more than once.
    ResolutionAlreadySet,
    /// One of the quanta in the resolution command is not positive.
    InvalidResolution {
        horizontal: i32,
        vertical: i32,
    },
    /// A motion command appeared before the resolution was set.
    ResolutionNotSet { command: &'static str },
    /// A motion is not a multiple of the relevant quantum.
    NotAMultiple {
        command: &'static str,
        value: i32,
        quantum: i32,
    },
    /// A numeric character code outside of printable ASCII and Latin-1.
    UnsupportedCharCode(i32),
    /// A named glyph that is not in the special character table.
    UnknownGlyph(String),
    /// A device font mount other than the three supported ones.
    UnsupportedDeviceFont { position: String, style: String },
    /// The font size changed in the middle of the document.
    FontSizeChanged { old: i32, new: i32 },
    /// A command that the lexer accepts but that can't be rendered.
    UnsupportedCommand(&'static str),
}

impl Error {
    pub(crate) fn new<K: Into<ErrorKind>>(kind: K, span: Range<usize>) -> Self {
        Error {
            kind: kind.into(),
            span,
        }
    }

    /// Returns true if this is a lexical error.
    pub fn is_lex_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Lex(_))
    }

    /// Returns true if this is a rendering error.
    pub fn is_render_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Render(_))
    }

    /// A one line description of the error.
    pub fn message(&self) -> String {
        match &self.kind {
            ErrorKind::Lex(err) => format!["lexing failed: {err}"],
            ErrorKind::Render(err) => format!["rendering failed: {err}"],
        }
    }

    fn note(&self) -> Option<&'static str> {
        use RenderError::*;
        match &self.kind {
            ErrorKind::Lex(LexError::UnsupportedDrawing(_)) => {
                Some("only the DFd drawing command is supported")
            }
            ErrorKind::Lex(LexError::Inconsistent { .. }) => {
                Some("this is a bug in the command table")
            }
            ErrorKind::Lex(_) => None,
            ErrorKind::Render(err) => match err {
                UnsupportedTypesetter(_) => {
                    Some("only output from the utf8 device (e.g. groff -Tutf8 -Z) is supported")
                }
                NotAMultiple { .. } => Some("motions must be whole multiples of the quanta set by `x res`"),
                UnsupportedCharCode(_) => Some("supported codes are 33-126 and 161-255"),
                UnsupportedDeviceFont { .. } => {
                    Some("supported device fonts are `1 R`, `3 B` and `2 I`")
                }
                FontSizeChanged { .. } => Some("documents must use a single font size"),
                ResolutionNotSet { .. } => Some("the `x res` command must come before any motion"),
                TypesetterAlreadySet
                | ResolutionAlreadySet
                | InvalidResolution { .. }
                | UnknownGlyph(_)
                | UnsupportedCommand(_) => None,
            },
        }
    }

    #[cfg(feature = "ariadne")]
    pub fn ariadne_report<'a>(
        &self,
        file_name: &'a str,
    ) -> ariadne::Report<'static, (&'a str, Range<usize>)> {
        let mut report =
            ariadne::Report::build(ariadne::ReportKind::Error, (file_name, self.span.clone()))
                .with_config(ariadne::Config::default().with_index_type(ariadne::IndexType::Byte))
                .with_message(self.message())
                .with_label(
                    ariadne::Label::new((file_name, self.span.clone()))
                        .with_message(match &self.kind {
                            ErrorKind::Lex(err) => format!["{err}"],
                            ErrorKind::Render(err) => format!["{err}"],
                        })
                        .with_color(ariadne::Color::BrightRed),
                );
        if let Some(note) = self.note() {
            report = report.with_note(note);
        }
        report.finish()
    }
}

impl From<LexError> for ErrorKind {
    fn from(value: LexError) -> Self {
        ErrorKind::Lex(value)
    }
}

impl From<RenderError> for ErrorKind {
    fn from(value: RenderError) -> Self {
        ErrorKind::Render(value)
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (at byte {})", self.message(), self.span.start)?;
        if let Some(note) = self.note() {
            write!(f, "; {note}")?;
        }
        Ok(())
    }
}

impl std::error::Error for LexError {}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use LexError::*;
        match self {
            UnknownCommand(c) => write!(f, "unknown command `{}`", c.escape_debug()),
            InvalidInteger { command, word } => {
                write!(f, "command `{command}` takes integer arguments, got `{word}`")
            }
            UnknownColorCommand(Some(c)) => {
                write!(f, "unsupported color command `m{}`", c.escape_debug())
            }
            UnknownColorCommand(None) => write!(f, "data ended while reading a color command"),
            UnknownDeviceControl(word) => {
                write!(f, "unsupported device control command `x {word}`")
            }
            UnsupportedDrawing(command) => {
                write!(f, "drawing command `{command}` is not supported")
            }
            UnexpectedEnd { command } => {
                write!(f, "data ended while reading arguments for command `{command}`")
            }
            Inconsistent { command } => {
                write!(f, "arguments of command `{command}` do not match its op")
            }
        }
    }
}

impl std::error::Error for RenderError {}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use RenderError::*;
        match self {
            TypesetterAlreadySet => write!(f, "the typesetter can't be set twice"),
            UnsupportedTypesetter(name) => write!(f, "unsupported typesetter `{name}`"),
            ResolutionAlreadySet => write!(f, "the resolution can't be set twice"),
            InvalidResolution {
                horizontal,
                vertical,
            } => write!(
                f,
                "quanta must be positive, got horizontal={horizontal} vertical={vertical}"
            ),
            ResolutionNotSet { command } => {
                write!(f, "command `{command}` appears before the resolution is set")
            }
            NotAMultiple {
                command,
                value,
                quantum,
            } => write!(
                f,
                "command `{command}` moves by {value} which is not a multiple of {quantum}"
            ),
            UnsupportedCharCode(code) => write!(f, "character code {code} is not supported"),
            UnknownGlyph(name) => write!(f, "unknown special character `{name}`"),
            UnsupportedDeviceFont { position, style } => {
                write!(f, "unsupported device font `{position} {style}`")
            }
            FontSizeChanged { old, new } => {
                write!(f, "font size changed from {old} to {new}")
            }
            UnsupportedCommand(command) => {
                write!(f, "command `{command}` can't be rendered to plain text")
            }
        }
    }
}
