//! Argument specifications for device output commands.
//!
//! Every command in troff device output is identified by a short symbol
//!     and takes a fixed number of arguments of a fixed type.
//! The lexer uses the tables in this module to decide how many
//!     words to read after a command, and how to convert them.
//!
//! The tables are split by how the command is introduced in the source:
//!
//! - [`PLAIN`]: single character commands like `t` or `V`.
//!
//! - [`COLOR`]: the `m` family, where the second character picks the command.
//!
//! - [`DEVICE_CONTROL`]: the `x` family, where the first character of the
//!     word after the `x` picks the command. For example `x res 240 24 40`
//!     is the `xr` command.
//!
//! - [`DRAWING`]: the `D` family. Only `DFd` is supported.
//!
//! ```
//! use ditroff::commands::{self, ArgType};
//! let spec = commands::lookup("xr").unwrap();
//! assert_eq!(spec.arg_type, ArgType::Integer);
//! assert_eq!(spec.count, 3);
//! ```

/// Type of the arguments of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// Each argument is a whitespace delimited word, passed through as is.
    Text,
    /// Each argument is a whitespace delimited word that must parse as an integer.
    Integer,
    /// The single argument is the rest of the current line, including the line terminator.
    Line,
    /// The command takes no arguments.
    None,
}

/// Specification of a single command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spec {
    /// Symbol of the command, e.g. `t` or `xr`.
    pub symbol: &'static str,
    /// Type of the arguments.
    pub arg_type: ArgType,
    /// Number of arguments that must be read before the command is complete.
    pub count: usize,
}

const fn spec(symbol: &'static str, arg_type: ArgType, count: usize) -> Spec {
    Spec {
        symbol,
        arg_type,
        count,
    }
}

/// Commands introduced by a single character.
pub const PLAIN: &[Spec] = &[
    spec("C", ArgType::Text, 1),
    spec("c", ArgType::Text, 1),
    spec("f", ArgType::Integer, 1),
    spec("H", ArgType::Integer, 1),
    spec("h", ArgType::Integer, 1),
    spec("N", ArgType::Integer, 1),
    spec("n", ArgType::Integer, 2),
    spec("p", ArgType::Integer, 1),
    spec("s", ArgType::Integer, 1),
    // The format also allows a second dummy argument here, which is not supported.
    spec("t", ArgType::Text, 1),
    spec("u", ArgType::Text, 2),
    spec("V", ArgType::Integer, 1),
    spec("v", ArgType::Integer, 1),
    spec("w", ArgType::None, 0),
];

/// Color commands, introduced by `m`.
pub const COLOR: &[Spec] = &[
    spec("mc", ArgType::Integer, 3),
    spec("md", ArgType::None, 0),
    spec("mg", ArgType::Integer, 1),
    spec("mk", ArgType::Integer, 4),
    spec("mr", ArgType::Integer, 3),
];

/// Device control commands, introduced by `x`.
pub const DEVICE_CONTROL: &[Spec] = &[
    spec("xF", ArgType::Text, 1),
    spec("xf", ArgType::Text, 2),
    spec("xH", ArgType::Integer, 1),
    spec("xi", ArgType::None, 0),
    spec("xp", ArgType::None, 0),
    spec("xr", ArgType::Integer, 3),
    spec("xS", ArgType::Integer, 1),
    spec("xs", ArgType::None, 0),
    spec("xt", ArgType::None, 0),
    spec("xT", ArgType::Text, 1),
    spec("xu", ArgType::Integer, 1),
    spec("xX", ArgType::Line, 1),
];

/// Drawing commands, introduced by `D`.
pub const DRAWING: &[Spec] = &[spec("DFd", ArgType::None, 0)];

/// Look up the specification of a command by its full symbol.
pub fn lookup(symbol: &str) -> Option<&'static Spec> {
    [PLAIN, COLOR, DEVICE_CONTROL, DRAWING]
        .into_iter()
        .flatten()
        .find(|spec| spec.symbol == symbol)
}

/// Look up a single character command.
pub fn plain(c: char) -> Option<&'static Spec> {
    find_by_suffix(PLAIN, "", c)
}

/// Look up a color command from the character following the `m`.
pub fn color(c: char) -> Option<&'static Spec> {
    find_by_suffix(COLOR, "m", c)
}

/// Look up a device control command from the first character of the
/// word following the `x`.
pub fn device_control(c: char) -> Option<&'static Spec> {
    find_by_suffix(DEVICE_CONTROL, "x", c)
}

fn find_by_suffix(table: &'static [Spec], prefix: &str, c: char) -> Option<&'static Spec> {
    table.iter().find(|spec| {
        spec.symbol
            .strip_prefix(prefix)
            .is_some_and(|suffix| suffix.chars().eq(std::iter::once(c)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_unique() {
        let mut symbols: Vec<&str> = [PLAIN, COLOR, DEVICE_CONTROL, DRAWING]
            .into_iter()
            .flatten()
            .map(|spec| spec.symbol)
            .collect();
        let n = symbols.len();
        symbols.sort();
        symbols.dedup();
        assert_eq!(symbols.len(), n);
    }

    #[test]
    fn argument_counts_are_consistent() {
        for spec in [PLAIN, COLOR, DEVICE_CONTROL, DRAWING].into_iter().flatten() {
            assert!(spec.count <= 4, "{spec:?}");
            assert_eq!(spec.arg_type == ArgType::None, spec.count == 0, "{spec:?}");
        }
    }

    macro_rules! lookup_tests {
        ( $( ($name: ident, $got: expr, $want: expr), )+ ) => {
            $(
                #[test]
                fn $name() {
                    let got = $got.map(|spec: &Spec| spec.symbol);
                    assert_eq!(got, $want);
                }
            )+
        };
    }

    lookup_tests!(
        (plain_t, plain('t'), Some("t")),
        (plain_upper_h, plain('H'), Some("H")),
        (plain_unknown, plain('q'), None),
        (plain_does_not_match_families, plain('x'), None),
        (color_md, color('d'), Some("md")),
        (color_unknown, color('z'), None),
        (device_control_res, device_control('r'), Some("xr")),
        (device_control_typesetter, device_control('T'), Some("xT")),
        (device_control_unknown, device_control('q'), None),
        (lookup_drawing, lookup("DFd"), Some("DFd")),
        (lookup_unknown, lookup("Dl"), None),
    );
}
