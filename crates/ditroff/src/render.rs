//! Rendering of device output ops to plain text.

use std::borrow::Cow;

use crate::error::{Error, RenderError};
use crate::{glyphs, Lexer, Op, Token};

/// The only typesetter whose output can be rendered.
const TYPESETTER: &str = "utf8";

/// Device control strings that reset the column.
///
/// The horizontal motion that follows these tags moves back to the
///     start of the line, which can't be done in a text stream.
/// Instead that motion is skipped.
const COLUMN_RESET_TAGS: [&str; 2] = ["devtag:.col 1", "devtag:.eo.h"];

/// Resolution of the device, as set by `x res`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Number of basic units per inch.
    pub units: i32,
    /// Horizontal motions must be a multiple of this.
    ///
    /// One horizontal quantum is rendered as one space.
    pub horizontal: i32,
    /// Vertical motions must be a multiple of this.
    ///
    /// One vertical quantum is rendered as one newline.
    pub vertical: i32,
}

/// Style of a mounted device font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DeviceFont {
    /// Roman font at position 1.
    Link,
    /// Bold font at position 3.
    Bold,
    /// Italic font at position 2, rendered as underlined on terminals.
    Underline,
}

impl DeviceFont {
    fn new(position: &str, style: &str) -> Option<Self> {
        match (position, style) {
            ("1", "R") => Some(DeviceFont::Link),
            ("3", "B") => Some(DeviceFont::Bold),
            ("2", "I") => Some(DeviceFont::Underline),
            _ => None,
        }
    }
}

/// Data structure for tracking values while rendering device output.
///
/// ```
/// let mut state: ditroff::State = Default::default();
/// state.update(&ditroff::Op::Resolution{resolution: 240, horizontal: 24, vertical: 40}).unwrap();
/// assert_eq!(state.line(), 40);
///
/// let newlines = state.update(&ditroff::Op::MoveToV(120)).unwrap();
/// assert_eq!(newlines, Some("\n\n".into()));
/// assert_eq!(state.line(), 120);
///
/// state.update(&ditroff::Op::Page(2)).unwrap();
/// assert_eq!(state.line(), 0);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct State {
    typesetter: Option<String>,
    resolution: Option<Resolution>,
    glyph_width: i64,
    line: i32,
    page: Option<i32>,
    device_font: Option<DeviceFont>,
    font: Option<i32>,
    font_size: Option<i32>,
    column_reset: bool,
    stopped: bool,
}

impl State {
    /// Update the state by applying the provided op.
    ///
    /// Returns the text that the op renders to, if any.
    pub fn update<'a>(&mut self, op: &Op<'a>) -> Result<Option<Cow<'a, str>>, RenderError> {
        match op {
            Op::Typesetter(name) => {
                if self.typesetter.is_some() {
                    return Err(RenderError::TypesetterAlreadySet);
                }
                if *name != TYPESETTER {
                    return Err(RenderError::UnsupportedTypesetter(name.to_string()));
                }
                tracing::debug!(typesetter = name, "set typesetter");
                self.typesetter = Some(name.to_string());
            }
            Op::Resolution {
                resolution,
                horizontal,
                vertical,
            } => {
                if self.resolution.is_some() {
                    return Err(RenderError::ResolutionAlreadySet);
                }
                if *horizontal <= 0 || *vertical <= 0 {
                    return Err(RenderError::InvalidResolution {
                        horizontal: *horizontal,
                        vertical: *vertical,
                    });
                }
                tracing::debug!(
                    units = resolution,
                    horizontal,
                    vertical,
                    "set resolution"
                );
                self.resolution = Some(Resolution {
                    units: *resolution,
                    horizontal: *horizontal,
                    vertical: *vertical,
                });
                self.line = *vertical;
            }
            Op::MoveToH(h) | Op::MoveRight(h) => {
                let quantum = self.quantum(op, |r| r.horizontal)?;
                check_multiple(op, *h, quantum)?;
                if self.column_reset {
                    self.column_reset = false;
                    return Ok(None);
                }
                let n = i64::from(*h / quantum) - self.glyph_width;
                return Ok(repeat(' ', n));
            }
            Op::MoveToV(v) => {
                let quantum = self.quantum(op, |r| r.vertical)?;
                check_multiple(op, *v, quantum)?;
                let n =
                    i64::from(v.div_euclid(quantum)) - i64::from(self.line.div_euclid(quantum));
                self.line = *v;
                return Ok(repeat('\n', n));
            }
            Op::Text(s) => {
                self.glyph_width = 0;
                return Ok(Some(Cow::Borrowed(*s)));
            }
            Op::CharCode(code) => {
                self.glyph_width = 1;
                let c = match *code {
                    33..=126 | 161..=255 => char::from_u32(*code as u32),
                    _ => None,
                };
                let Some(c) = c else {
                    return Err(RenderError::UnsupportedCharCode(*code));
                };
                return Ok(Some(Cow::Owned(c.to_string())));
            }
            Op::NamedGlyph(name) => {
                let Some(s) = glyphs::lookup(name) else {
                    return Err(RenderError::UnknownGlyph(name.to_string()));
                };
                self.glyph_width = s.chars().count() as i64;
                return Ok(Some(Cow::Borrowed(s)));
            }
            Op::Page(n) => {
                tracing::debug!(page = n, "new page");
                self.page = Some(*n);
                self.line = 0;
            }
            Op::MountFont { position, style } => {
                let Some(device_font) = DeviceFont::new(position, style) else {
                    return Err(RenderError::UnsupportedDeviceFont {
                        position: position.to_string(),
                        style: style.to_string(),
                    });
                };
                self.device_font = Some(device_font);
            }
            Op::Font(n) => {
                self.font = Some(*n);
            }
            Op::FontSize(n) => match self.font_size {
                Some(old) if old != *n => {
                    return Err(RenderError::FontSizeChanged { old, new: *n });
                }
                _ => {
                    self.font_size = Some(*n);
                }
            },
            Op::Control(value) => {
                let tag = value.trim_end_matches(['\n', '\r']);
                if COLUMN_RESET_TAGS.contains(&tag) {
                    self.column_reset = true;
                }
            }
            Op::Stop => {
                self.stopped = true;
            }
            Op::EndOfLine(..)
            | Op::WordSpace
            | Op::DefaultColor
            | Op::DefaultFillColor
            | Op::Init
            | Op::SourceFile(_)
            | Op::Trailer => {}
            Op::Char(_)
            | Op::KernedText(..)
            | Op::MoveDown(_)
            | Op::CmyColor(_)
            | Op::GrayColor(_)
            | Op::CmykColor(_)
            | Op::RgbColor(_)
            | Op::CharHeight(_)
            | Op::Pause
            | Op::Slant(_)
            | Op::Underline(_) => {
                return Err(RenderError::UnsupportedCommand(op.symbol()));
            }
        }
        Ok(None)
    }

    fn quantum(&self, op: &Op, f: fn(&Resolution) -> i32) -> Result<i32, RenderError> {
        match &self.resolution {
            None => Err(RenderError::ResolutionNotSet {
                command: op.symbol(),
            }),
            Some(resolution) => Ok(f(resolution)),
        }
    }

    /// Get the typesetter, if it has been set.
    pub fn typesetter(&self) -> Option<&str> {
        self.typesetter.as_deref()
    }
    /// Get the resolution, if it has been set.
    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution
    }
    /// Get the width of the text printed since the last motion, in quanta.
    ///
    /// Horizontal motions are reduced by this amount.
    /// This assumes every glyph is followed by a motion that moves past it.
    pub fn glyph_width(&self) -> i64 {
        self.glyph_width
    }
    /// Get the current vertical position.
    pub fn line(&self) -> i32 {
        self.line
    }
    /// Get the current page number.
    pub fn page(&self) -> Option<i32> {
        self.page
    }
    /// Get the current device font.
    pub fn device_font(&self) -> Option<DeviceFont> {
        self.device_font
    }
    /// Get the current font.
    pub fn font(&self) -> Option<i32> {
        self.font
    }
    /// Get the font size.
    pub fn font_size(&self) -> Option<i32> {
        self.font_size
    }
    /// Returns true if the next horizontal motion will be skipped.
    pub fn column_reset(&self) -> bool {
        self.column_reset
    }
    /// Returns true if the end of the output has been reached.
    pub fn stopped(&self) -> bool {
        self.stopped
    }
}

fn check_multiple(op: &Op, value: i32, quantum: i32) -> Result<(), RenderError> {
    if value.rem_euclid(quantum) != 0 {
        return Err(RenderError::NotAMultiple {
            command: op.symbol(),
            value,
            quantum,
        });
    }
    Ok(())
}

fn repeat(c: char, n: i64) -> Option<Cow<'static, str>> {
    if n <= 0 {
        return None;
    }
    Some(Cow::Owned(std::iter::repeat(c).take(n as usize).collect()))
}

/// Iterator that renders device output to fragments of plain text.
///
/// The concatenation of the fragments is the rendered document.
/// Rendering stops after the first error, or after the `x stop` command.
/// Tokens after `x stop` are never read.
///
/// ```
/// let source = "x T utf8\nx res 240 24 40\ntHello\nh24\ntWorld\nx stop\nq\n";
/// let fragments: Vec<String> = ditroff::Renderer::new(source)
///     .map(|fragment| fragment.unwrap().into_owned())
///     .collect();
/// assert_eq!(fragments, vec!["Hello", " ", "World"]);
/// ```
pub struct Renderer<'a, I = Lexer<'a>> {
    tokens: I,
    state: State,
    done: bool,
    phantom: std::marker::PhantomData<&'a ()>,
}

impl<'a> Renderer<'a, Lexer<'a>> {
    /// Create a new renderer for the provided device output.
    pub fn new(source: &'a str) -> Self {
        Renderer::from_tokens(Lexer::new(source))
    }
}

impl<'a, I: Iterator<Item = Result<Token<'a>, Error>>> Renderer<'a, I> {
    /// Create a new renderer that renders the provided tokens.
    pub fn from_tokens<J: IntoIterator<IntoIter = I>>(tokens: J) -> Self {
        Renderer {
            tokens: tokens.into_iter(),
            state: Default::default(),
            done: false,
            phantom: Default::default(),
        }
    }

    /// Get the current render state.
    pub fn state(&self) -> &State {
        &self.state
    }
}

impl<'a, I: Iterator<Item = Result<Token<'a>, Error>>> Iterator for Renderer<'a, I> {
    type Item = Result<Cow<'a, str>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let token = match self.tokens.next() {
                None => {
                    self.done = true;
                    return None;
                }
                Some(Ok(token)) => token,
                Some(Err(err)) => {
                    self.done = true;
                    return Some(Err(err));
                }
            };
            match self.state.update(&token.op) {
                Ok(fragment) => {
                    if self.state.stopped() {
                        self.done = true;
                    }
                    if let Some(fragment) = fragment {
                        return Some(Ok(fragment));
                    }
                }
                Err(err) => {
                    self.done = true;
                    return Some(Err(Error::new(err, token.span)));
                }
            }
        }
        None
    }
}

impl<'a, I: Iterator<Item = Result<Token<'a>, Error>>> std::iter::FusedIterator
    for Renderer<'a, I>
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, LexError};

    const PREAMBLE: &str = "x T utf8\nx res 240 24 40\nx init\np1\n";

    fn render(body: &str) -> Result<String, Error> {
        crate::render_to_string(&format!["{PREAMBLE}{body}"])
    }

    fn render_error(body: &str) -> RenderError {
        match render(body) {
            Err(Error {
                kind: ErrorKind::Render(err),
                ..
            }) => err,
            other => panic!("expected a render error, got {other:?}"),
        }
    }

    macro_rules! render_tests {
        ( $( ($name: ident, $body: expr, $want: expr), )+ ) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(render($body), Ok($want.to_string()));
                }
            )+
        };
    }

    macro_rules! render_error_tests {
        ( $( ($name: ident, $body: expr, $want: expr), )+ ) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(render_error($body), $want);
                }
            )+
        };
    }

    render_tests!(
        (empty_body, "", ""),
        (text, "tHello\n", "Hello"),
        (
            text_and_newline,
            "V40\ntHello\nV80\ntWorld\nx stop\n",
            "\nHello\nWorld"
        ),
        (
            newline_count_follows_quanta,
            "V40\ntA\nV160\ntB\n",
            "\nA\n\n\nB"
        ),
        (
            vertical_motion_up_renders_nothing,
            "V160\nV80\ntA\n",
            "\n\n\n\nA"
        ),
        (
            horizontal_motion,
            "tA\nh72\ntB\n",
            "A   B"
        ),
        (
            horizontal_motion_absolute,
            "H48\ntA\n",
            "  A"
        ),
        (
            horizontal_motion_zero_after_text,
            "tA\nh0\ntB\n",
            "AB"
        ),
        (
            horizontal_motion_after_char_code,
            "N65\nh24\nN66\nh48\nN67\n",
            "AB C"
        ),
        (
            horizontal_motion_after_char_code_clamps_at_zero,
            "N65\nh0\nN66\n",
            "AB"
        ),
        (
            horizontal_motion_after_named_glyph,
            "Chy\nh48\ntA\n",
            "\u{2010} A"
        ),
        (char_code_ascii, "N33\nN126\n", "!~"),
        (char_code_latin_1, "N161\nN233\nN255\n", "¡éÿ"),
        (named_glyph, "Cem\n", "\u{2014}"),
        (named_glyph_escape, "C\\-\n", "-"),
        (
            column_reset_skips_one_motion,
            "x X devtag:.col 1\nh48\ntA\nh48\ntB\n",
            "A  B"
        ),
        (
            column_reset_end_of_heading,
            "x X devtag:.eo.h\nh48\ntA\n",
            "A"
        ),
        (
            other_device_control_is_ignored,
            "x X devtag:.NH 1\nh48\ntA\n",
            "  A"
        ),
        (
            column_reset_before_vertical_motion,
            "x X devtag:.col 1\nV80\nh48\ntA\n",
            "\n\nA"
        ),
        (
            page_resets_line,
            "V2640\np2\nV40\ntA\n",
            "\n".repeat(67) + "A"
        ),
        (
            noops,
            "n40 0\nw\nmd\nDFd\nx F foo.1\nx trailer\ntA\n",
            "A"
        ),
        (
            mounted_fonts,
            "x font 1 R\nx font 2 I\nx font 3 B\nf3\ntA\n",
            "A"
        ),
        (font_size_unchanged, "s10\ntA\ns10\ntB\n", "AB"),
        (
            stop_ends_rendering,
            "tA\nx stop\ntB\n",
            "A"
        ),
        (
            stop_ignores_invalid_trailing_data,
            "tA\nx stop\nq\n\u{0}",
            "A"
        ),
    );

    render_error_tests!(
        (
            typesetter_twice,
            "x T utf8\n",
            RenderError::TypesetterAlreadySet
        ),
        (
            resolution_twice,
            "x res 240 24 40\n",
            RenderError::ResolutionAlreadySet
        ),
        (
            resolution_twice_with_other_values,
            "x res 72 1 1\n",
            RenderError::ResolutionAlreadySet
        ),
        (
            horizontal_not_a_multiple,
            "h25\n",
            RenderError::NotAMultiple {
                command: "h",
                value: 25,
                quantum: 24
            }
        ),
        (
            horizontal_absolute_not_a_multiple,
            "H-1\n",
            RenderError::NotAMultiple {
                command: "H",
                value: -1,
                quantum: 24
            }
        ),
        (
            vertical_not_a_multiple,
            "V60\n",
            RenderError::NotAMultiple {
                command: "V",
                value: 60,
                quantum: 40
            }
        ),
        (
            char_code_too_small,
            "N32\n",
            RenderError::UnsupportedCharCode(32)
        ),
        (
            char_code_delete,
            "N127\n",
            RenderError::UnsupportedCharCode(127)
        ),
        (
            char_code_latin_1_space,
            "N160\n",
            RenderError::UnsupportedCharCode(160)
        ),
        (
            char_code_too_big,
            "N256\n",
            RenderError::UnsupportedCharCode(256)
        ),
        (
            unknown_glyph,
            "Cnot-a-glyph\n",
            RenderError::UnknownGlyph("not-a-glyph".into())
        ),
        (
            unsupported_device_font,
            "x font 5 CR\n",
            RenderError::UnsupportedDeviceFont {
                position: "5".into(),
                style: "CR".into()
            }
        ),
        (
            font_size_changed,
            "s10\ns12\n",
            RenderError::FontSizeChanged { old: 10, new: 12 }
        ),
        (
            unsupported_char,
            "ca\n",
            RenderError::UnsupportedCommand("c")
        ),
        (
            unsupported_relative_vertical_motion,
            "v40\n",
            RenderError::UnsupportedCommand("v")
        ),
        (
            unsupported_color,
            "mr 0 0 0\n",
            RenderError::UnsupportedCommand("mr")
        ),
        (
            unsupported_slant,
            "x S 10\n",
            RenderError::UnsupportedCommand("xS")
        ),
    );

    #[test]
    fn unsupported_typesetter() {
        assert_eq!(
            crate::render_to_string("x T ps\n"),
            Err(Error {
                kind: ErrorKind::Render(RenderError::UnsupportedTypesetter("ps".into())),
                span: 0..6,
            })
        );
    }

    #[test]
    fn motion_before_resolution() {
        for (source, command) in [("h24\n", "h"), ("H24\n", "H"), ("V40\n", "V")] {
            let err = crate::render_to_string(source).unwrap_err();
            assert_eq!(
                err.kind,
                ErrorKind::Render(RenderError::ResolutionNotSet { command })
            );
        }
    }

    #[test]
    fn zero_quantum_is_rejected() {
        let err = crate::render_to_string("x res 240 0 40\nh24\n").unwrap_err();
        assert_eq!(
            err.kind,
            ErrorKind::Render(RenderError::InvalidResolution {
                horizontal: 0,
                vertical: 40
            })
        );
    }

    #[test]
    fn motions_that_are_not_multiples_fail_for_all_quanta() {
        for quantum in 2..=12 {
            for value in (0..60).filter(|value| value % quantum != 0) {
                for command in ["h", "H", "V"] {
                    let source =
                        format!["x res 240 {quantum} {quantum}\n{command}{value}\n"];
                    let err = crate::render_to_string(&source).unwrap_err();
                    assert_eq!(
                        err.kind,
                        ErrorKind::Render(RenderError::NotAMultiple {
                            command,
                            value,
                            quantum
                        }),
                        "{source}"
                    );
                }
            }
        }
    }

    #[test]
    fn lex_error_is_propagated() {
        let err = render("tA\nDl 1 1\n").unwrap_err();
        assert_eq!(
            err.kind,
            ErrorKind::Lex(LexError::UnsupportedDrawing("Dl".into()))
        );
    }

    #[test]
    fn error_span_points_at_command() {
        let err = render("tA\nV41\n").unwrap_err();
        assert_eq!(&format!["{PREAMBLE}tA\nV41\n"][err.span], "V41");
    }

    #[test]
    fn renderer_stops_reading_tokens_after_stop() {
        let mut lexer = Lexer::new("x stop\ntA\ntB\n");
        assert_eq!(Renderer::from_tokens(&mut lexer).count(), 0);
        let next = lexer.next().map(|token| token.map(|token| token.op));
        assert_eq!(next, Some(Ok(Op::Text("A"))));
    }

    #[test]
    fn renderer_is_fused_after_error() {
        let mut renderer = Renderer::new("x T utf8\nx T utf8\ntA\n");
        assert!(renderer.next().unwrap().is_err());
        assert!(renderer.next().is_none());
    }

    #[test]
    fn state_tracks_fonts_and_page() {
        let mut renderer = Renderer::new(
            "x T utf8\nx res 240 24 40\nx font 3 B\nf3\ns10\np7\nV120\ntA\nx X devtag:.col 1\n",
        );
        let output: String = renderer.by_ref().map(Result::unwrap).collect();
        assert_eq!(output, "\n\n\nA");
        let state = renderer.state();
        assert_eq!(state.typesetter(), Some("utf8"));
        assert_eq!(
            state.resolution(),
            Some(Resolution {
                units: 240,
                horizontal: 24,
                vertical: 40
            })
        );
        assert_eq!(state.device_font(), Some(DeviceFont::Bold));
        assert_eq!(state.font(), Some(3));
        assert_eq!(state.font_size(), Some(10));
        assert_eq!(state.page(), Some(7));
        assert_eq!(state.line(), 120);
        assert_eq!(state.glyph_width(), 0);
        assert!(state.column_reset());
        assert!(!state.stopped());
    }

    #[test]
    fn every_glyph_renders() {
        for (name, want) in glyphs::entries() {
            let got = render(&format!["C{name}\n"]);
            assert_eq!(got, Ok(want.to_string()), "glyph {name}");
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let body = "V40\ntHello\nwh24\nCem\nh48\nN233\nV80\nx X devtag:.col 1\nh0\ntWorld\n";
        assert_eq!(render(body), render(body));
    }
}
