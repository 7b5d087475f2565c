//! # troff device output
//!
//! This crate renders troff device output to plain text.
//!
//! Device output (sometimes called "ditroff" or "intermediate output")
//!     is the format that `troff` writes and device drivers like `grotty` read.
//! It can be produced from a man page with `groff -Tutf8 -Z`.
//! A device output file is a stream of short commands.
//! Each command is one or two characters long and is followed by
//!     a fixed number of arguments:
//!
//! ```txt
//! x T utf8
//! x res 240 24 40
//! x init
//! p1
//! V40
//! H0
//! tHello
//! V80
//! H0
//! tWorld
//! x trailer
//! V2640
//! x stop
//! ```
//!
//! The most important type in the crate is [`Op`],
//!     which describes a single command with its arguments.
//! The [`Lexer`] turns source text into [`Token`]s, each of which
//!     contains an op and its position in the source.
//! The [`Renderer`] runs the ops and returns fragments of plain text.
//! For most uses the [`render_to_string`] function is all you need:
//!
//! ```
//! let source = "x T utf8\nx res 240 24 40\ntHello\nV80\ntWorld\nx stop\n";
//! assert_eq!(ditroff::render_to_string(source), Ok("Hello\nWorld".to_string()));
//! ```
//!
//! Only the subset of the format needed to render man pages to text is supported.
//! Everything else (most drawing commands, colors, slanted text...)
//!     results in an [`Error`].
//! There is no attempt at partial recovery.

pub mod commands;
pub mod error;
pub mod glyphs;
mod lexer;
mod render;

pub use error::Error;
pub use error::ErrorKind;
pub use error::LexError;
pub use error::RenderError;
pub use lexer::Lexer;
pub use render::DeviceFont;
pub use render::Renderer;
pub use render::Resolution;
pub use render::State;

/// Command that appears in device output.
///
/// Each variant corresponds to one entry in the tables in the
///     [`commands`] module, and [`Op::symbol`] returns the symbol of that entry.
/// Text payloads borrow from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Op<'a> {
    /// Print the special character with the provided name (`C`).
    NamedGlyph(&'a str),
    /// Print a single character (`c`).
    Char(&'a str),
    /// Select the font mounted at the provided position (`f`).
    Font(i32),
    /// Move to an absolute horizontal position (`H`).
    MoveToH(i32),
    /// Move right by the provided amount (`h`).
    MoveRight(i32),
    /// Print the character with the provided code (`N`).
    CharCode(i32),
    /// End of a line (`n`).
    ///
    /// The two payloads are the space before and after the line.
    EndOfLine(i32, i32),
    /// Begin a new page with the provided number (`p`).
    Page(i32),
    /// Set the font size (`s`).
    FontSize(i32),
    /// Print some text (`t`).
    Text(&'a str),
    /// Print some text with additional space between characters (`u`).
    KernedText(&'a str, &'a str),
    /// Move to an absolute vertical position (`V`).
    MoveToV(i32),
    /// Move down by the provided amount (`v`).
    MoveDown(i32),
    /// Marks the space between two words (`w`).
    WordSpace,
    /// Set the color using CMY values (`mc`).
    CmyColor([i32; 3]),
    /// Set the default color (`md`).
    DefaultColor,
    /// Set the color using a gray value (`mg`).
    GrayColor(i32),
    /// Set the color using CMYK values (`mk`).
    CmykColor([i32; 4]),
    /// Set the color using RGB values (`mr`).
    RgbColor([i32; 3]),
    /// Set the default fill color (`DFd`).
    DefaultFillColor,
    /// Name of the source file that the output came from (`x F`).
    SourceFile(&'a str),
    /// Mount a font at a position (`x font`).
    MountFont { position: &'a str, style: &'a str },
    /// Set the character height (`x H`).
    CharHeight(i32),
    /// Initialize the device (`x init`).
    Init,
    /// Pause the device (`x pause`).
    Pause,
    /// Set the resolution and the horizontal and vertical quanta (`x res`).
    Resolution {
        resolution: i32,
        horizontal: i32,
        vertical: i32,
    },
    /// Set the slant (`x S`).
    Slant(i32),
    /// End of the output (`x stop`).
    Stop,
    /// Beginning of the trailer (`x trailer`).
    Trailer,
    /// Name of the typesetter that produced the output (`x T`).
    Typesetter(&'a str),
    /// Underline mode (`x u`).
    Underline(i32),
    /// Device control string, passed through to the device (`x X`).
    ///
    /// The payload is the rest of the line including its terminator.
    Control(&'a str),
}

/// A single argument read by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Arg<'a> {
    Text(&'a str),
    Int(i32),
}

impl<'a> Op<'a> {
    /// Returns the symbol of the command, e.g. `t` for [`Op::Text`].
    pub fn symbol(&self) -> &'static str {
        use Op::*;
        match self {
            NamedGlyph(_) => "C",
            Char(_) => "c",
            Font(_) => "f",
            MoveToH(_) => "H",
            MoveRight(_) => "h",
            CharCode(_) => "N",
            EndOfLine(..) => "n",
            Page(_) => "p",
            FontSize(_) => "s",
            Text(_) => "t",
            KernedText(..) => "u",
            MoveToV(_) => "V",
            MoveDown(_) => "v",
            WordSpace => "w",
            CmyColor(_) => "mc",
            DefaultColor => "md",
            GrayColor(_) => "mg",
            CmykColor(_) => "mk",
            RgbColor(_) => "mr",
            DefaultFillColor => "DFd",
            SourceFile(_) => "xF",
            MountFont { .. } => "xf",
            CharHeight(_) => "xH",
            Init => "xi",
            Pause => "xp",
            Resolution { .. } => "xr",
            Slant(_) => "xS",
            Stop => "xs",
            Trailer => "xt",
            Typesetter(_) => "xT",
            Underline(_) => "xu",
            Control(_) => "xX",
        }
    }

    /// Build the op for a command from the arguments the lexer read.
    ///
    /// Returns [`None`] if the arguments don't match the op,
    ///     which only happens if the command table is wrong.
    pub(crate) fn build(symbol: &str, args: &[Arg<'a>]) -> Option<Self> {
        use Arg::Int;
        use Arg::Text;
        Some(match (symbol, args) {
            ("C", [Text(name)]) => Op::NamedGlyph(*name),
            ("c", [Text(c)]) => Op::Char(*c),
            ("f", [Int(n)]) => Op::Font(*n),
            ("H", [Int(n)]) => Op::MoveToH(*n),
            ("h", [Int(n)]) => Op::MoveRight(*n),
            ("N", [Int(n)]) => Op::CharCode(*n),
            ("n", [Int(b), Int(a)]) => Op::EndOfLine(*b, *a),
            ("p", [Int(n)]) => Op::Page(*n),
            ("s", [Int(n)]) => Op::FontSize(*n),
            ("t", [Text(s)]) => Op::Text(*s),
            ("u", [Text(n), Text(s)]) => Op::KernedText(*n, *s),
            ("V", [Int(n)]) => Op::MoveToV(*n),
            ("v", [Int(n)]) => Op::MoveDown(*n),
            ("w", []) => Op::WordSpace,
            ("mc", [Int(c), Int(m), Int(y)]) => Op::CmyColor([*c, *m, *y]),
            ("md", []) => Op::DefaultColor,
            ("mg", [Int(g)]) => Op::GrayColor(*g),
            ("mk", [Int(c), Int(m), Int(y), Int(k)]) => Op::CmykColor([*c, *m, *y, *k]),
            ("mr", [Int(r), Int(g), Int(b)]) => Op::RgbColor([*r, *g, *b]),
            ("DFd", []) => Op::DefaultFillColor,
            ("xF", [Text(name)]) => Op::SourceFile(*name),
            ("xf", [Text(position), Text(style)]) => Op::MountFont {
                position: *position,
                style: *style,
            },
            ("xH", [Int(n)]) => Op::CharHeight(*n),
            ("xi", []) => Op::Init,
            ("xp", []) => Op::Pause,
            ("xr", [Int(resolution), Int(horizontal), Int(vertical)]) => Op::Resolution {
                resolution: *resolution,
                horizontal: *horizontal,
                vertical: *vertical,
            },
            ("xS", [Int(n)]) => Op::Slant(*n),
            ("xs", []) => Op::Stop,
            ("xt", []) => Op::Trailer,
            ("xT", [Text(name)]) => Op::Typesetter(*name),
            ("xu", [Int(n)]) => Op::Underline(*n),
            ("xX", [Text(line)]) => Op::Control(*line),
            _ => return None,
        })
    }
}

/// An op along with its location in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'a> {
    pub op: Op<'a>,
    /// Byte range of the command and its arguments in the source.
    pub span: std::ops::Range<usize>,
}

/// Render device output to a string.
///
/// This runs the [`Renderer`] to completion and concatenates the fragments.
/// If an error occurs, no output is returned.
pub fn render_to_string(source: &str) -> Result<String, Error> {
    Renderer::new(source).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_args(spec: &commands::Spec) -> Vec<Arg<'static>> {
        (0..spec.count)
            .map(|_| match spec.arg_type {
                commands::ArgType::Integer => Arg::Int(1),
                commands::ArgType::Text | commands::ArgType::Line => Arg::Text("a"),
                commands::ArgType::None => unreachable!(),
            })
            .collect()
    }

    #[test]
    fn every_command_builds_an_op_with_the_same_symbol() {
        for table in [
            commands::PLAIN,
            commands::COLOR,
            commands::DEVICE_CONTROL,
            commands::DRAWING,
        ] {
            for spec in table {
                let op = Op::build(spec.symbol, &sample_args(spec));
                assert_eq!(op.map(|op| op.symbol()), Some(spec.symbol));
            }
        }
    }

    #[test]
    fn build_rejects_wrong_arguments() {
        assert_eq!(Op::build("t", &[Arg::Int(3)]), None);
        assert_eq!(Op::build("xr", &[Arg::Int(3)]), None);
    }

    #[test]
    fn render_hello_world() {
        let source = "x T utf8\nx res 240 24 40\ntHello\nV80\ntWorld\nx stop\n";
        assert_eq!(render_to_string(source), Ok("Hello\nWorld".to_string()));
    }

    #[test]
    fn render_error_discards_output() {
        let source = "x T utf8\nx res 240 24 40\ntHello\nV81\n";
        let err = render_to_string(source).unwrap_err();
        assert!(err.is_render_error());
    }
}
