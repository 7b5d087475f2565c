//! The special character table.
//!
//! Device output refers to special characters by name,
//!     e.g. `Chy` prints a hyphen and `Cem` prints an em dash.
//! This module maps those names to the text they stand for.
//!
//! The data lives in the [`table`](self) submodule, which is generated
//!     from the glyph registry in groff's source code
//!     (`src/libs/libgroff/uniglyph.cpp`) using [`generate`].
//! When the table is regenerated the [`REGISTRY_VERSION`] must be updated.
//!
//! ```
//! assert_eq!(ditroff::glyphs::lookup("em"), Some("\u{2014}"));
//! assert_eq!(ditroff::glyphs::lookup("not-a-glyph"), None);
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

mod table;

pub use table::REGISTRY_VERSION;

/// Escapes that appear in device output but are not in the registry.
///
/// See the DESCRIPTION section of `groff_char(7)`.
const ESCAPES: [(&str, &str); 6] = [
    ("\\\\", "\\"),
    ("\\´", "´"),
    ("\\`", "`"),
    ("\\-", "-"),
    ("\\.", "."),
    ("\\e", "\\"),
];

/// All entries in the table, in registry order.
///
/// The same name may not appear twice.
pub fn entries() -> &'static [(&'static str, &'static str)] {
    table::ENTRIES
}

/// Returns the text for the special character with the provided name.
pub fn lookup(name: &str) -> Option<&'static str> {
    static INDEX: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    INDEX
        .get_or_init(|| entries().iter().copied().collect())
        .get(name)
        .copied()
}

/// Error returned when a line of the registry can't be converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryError {
    /// 1-indexed line number in the registry.
    pub line: usize,
    /// The code points as they appear in the registry.
    pub code: String,
}

impl std::error::Error for RegistryError {}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line {}: `{}` is not a sequence of Unicode code points",
            self.line, self.code
        )
    }
}

/// Parse the glyph registry into (name, text) pairs.
///
/// Each line of the form `{ "HEX[_HEX...]", "name" },` results in an entry
///     mapping the name to the concatenation of the code points.
/// Lines starting with `//` are skipped, as are lines that don't match.
/// The escapes that are not part of the registry come first.
pub fn parse(registry: &str) -> Result<Vec<(String, String)>, RegistryError> {
    static MATCHER: OnceLock<regex::Regex> = OnceLock::new();
    let matcher = MATCHER.get_or_init(|| {
        regex::Regex::new(r#"\{ "(.*?)", "(.*?)" \},"#).expect("the registry pattern is valid")
    });
    let mut entries: Vec<(String, String)> = ESCAPES
        .iter()
        .map(|(name, text)| (name.to_string(), text.to_string()))
        .collect();
    for (i, line) in registry.lines().enumerate() {
        if line.starts_with("//") {
            continue;
        }
        let Some(captures) = matcher.captures(line) else {
            continue;
        };
        let code = &captures[1];
        let text = code
            .split('_')
            .map(|hex| u32::from_str_radix(hex, 16).ok().and_then(char::from_u32))
            .collect::<Option<String>>()
            .ok_or_else(|| RegistryError {
                line: i + 1,
                code: code.to_string(),
            })?;
        entries.push((unescape(&captures[2]), text));
    }
    Ok(entries)
}

/// Generate the Rust source of the table module from the glyph registry.
pub fn generate(registry: &str, version: &str) -> Result<String, RegistryError> {
    use std::fmt::Write;
    let entries = parse(registry)?;
    let mut s = String::new();
    // Writing to a string can't fail.
    _ = writeln!(s, "// This file is generated by `ditrofftools glyphs`.");
    _ = writeln!(s, "// Do not edit it manually.");
    _ = writeln!(s, "//");
    _ = writeln!(
        s,
        "// The data comes from groff's src/libs/libgroff/uniglyph.cpp"
    );
    _ = writeln!(s, "// and is licensed under the GPLv3 or later.");
    _ = writeln!(s);
    _ = writeln!(s, "/// Version of the glyph registry the table was generated from.");
    _ = writeln!(s, "pub const REGISTRY_VERSION: &str = {version:?};");
    _ = writeln!(s);
    _ = writeln!(s, "pub(super) static ENTRIES: &[(&str, &str)] = &[");
    for (name, text) in &entries {
        _ = writeln!(s, "    ({name:?}, {text:?}),");
    }
    _ = writeln!(s, "];");
    Ok(s)
}

/// Undo the C string escapes that can appear in glyph names.
fn unescape(name: &str) -> String {
    let mut s = String::with_capacity(name.len());
    let mut chars = name.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => s.extend(chars.next()),
            _ => s.push(c),
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const REGISTRY: &str = r#"
// Latin-1 Supplement
  { "00A9", "co" },
  { "0041_0300", "`A" },
//{ "0042", "ignored" },
  { "02DD", "a\"" },
  { "0066_0066_0069", "Fi" },
static const char *not_an_entry = "0041";
"#;

    #[test]
    fn names_are_unique() {
        let mut seen = HashSet::new();
        for (name, _) in entries() {
            assert!(seen.insert(name), "duplicate name {name:?}");
        }
    }

    #[test]
    fn escapes_come_first() {
        assert_eq!(&entries()[..ESCAPES.len()], &ESCAPES);
    }

    #[test]
    fn lookup_known_names() {
        assert_eq!(lookup("hy"), Some("\u{2010}"));
        assert_eq!(lookup("em"), Some("\u{2014}"));
        assert_eq!(lookup("\\-"), Some("-"));
        assert_eq!(lookup("\\e"), Some("\\"));
        assert_eq!(lookup("Fi"), Some("ffi"));
        assert_eq!(lookup("'e"), Some("e\u{301}"));
    }

    #[test]
    fn lookup_agrees_with_entries() {
        for (name, text) in entries() {
            assert_eq!(lookup(name), Some(*text));
        }
    }

    #[test]
    fn parse_registry() {
        let got = parse(REGISTRY).unwrap();
        let want: Vec<(String, String)> = ESCAPES
            .iter()
            .copied()
            .chain([
                ("co", "\u{a9}"),
                ("`A", "A\u{300}"),
                ("a\"", "\u{2dd}"),
                ("Fi", "ffi"),
            ])
            .map(|(name, text)| (name.to_string(), text.to_string()))
            .collect();
        assert_eq!(got, want);
    }

    #[test]
    fn parse_invalid_code_point() {
        let registry = "{ \"0041\", \"A\" },\n{ \"D800\", \"surrogate\" },\n";
        assert_eq!(
            parse(registry),
            Err(RegistryError {
                line: 2,
                code: "D800".to_string()
            })
        );
    }

    #[test]
    fn generate_table_source() {
        let source = generate("{ \"2014\", \"em\" },\n", "test-1").unwrap();
        assert!(source.contains("pub const REGISTRY_VERSION: &str = \"test-1\";\n"));
        assert!(source.contains("    (\"em\", \"\u{2014}\"),\n"));
        assert!(source.contains("    (\"\\\\-\", \"-\"),\n"));
    }
}
