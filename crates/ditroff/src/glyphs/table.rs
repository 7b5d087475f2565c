// This file is generated by `ditrofftools glyphs`.
// Do not edit it manually.
//
// The data comes from groff's src/libs/libgroff/uniglyph.cpp
// and is licensed under the GPLv3 or later.

/// Version of the glyph registry the table was generated from.
pub const REGISTRY_VERSION: &str = "groff-1.23.0";

pub(super) static ENTRIES: &[(&str, &str)] = &[
    ("\\\\", "\\"),
    ("\\´", "´"),
    ("\\`", "`"),
    ("\\-", "-"),
    ("\\.", "."),
    ("\\e", "\\"),
    ("dq", "\""),
    ("sh", "#"),
    ("Do", "$"),
    ("aq", "'"),
    ("pl", "+"),
    ("sl", "/"),
    ("eq", "="),
    ("at", "@"),
    ("lB", "["),
    ("rs", "\\"),
    ("rB", "]"),
    ("a^", "^"),
    ("ul", "_"),
    ("ga", "`"),
    ("lC", "{"),
    ("ba", "|"),
    ("rC", "}"),
    ("a~", "~"),
    ("r!", "¡"),
    ("ct", "¢"),
    ("Po", "£"),
    ("Cs", "¤"),
    ("Ye", "¥"),
    ("bb", "¦"),
    ("sc", "§"),
    ("ad", "¨"),
    ("co", "©"),
    ("Of", "ª"),
    ("Fo", "«"),
    ("tno", "¬"),
    ("no", "¬"),
    ("shc", "­"),
    ("rg", "®"),
    ("a-", "¯"),
    ("de", "°"),
    ("t+-", "±"),
    ("+-", "±"),
    ("S2", "²"),
    ("S3", "³"),
    ("aa", "´"),
    ("mc", "µ"),
    ("ps", "¶"),
    ("pc", "·"),
    ("ac", "¸"),
    ("S1", "¹"),
    ("Om", "º"),
    ("Fc", "»"),
    ("14", "¼"),
    ("12", "½"),
    ("34", "¾"),
    ("r?", "¿"),
    ("`A", "A\u{300}"),
    ("'A", "A\u{301}"),
    ("^A", "A\u{302}"),
    ("~A", "A\u{303}"),
    (":A", "A\u{308}"),
    ("oA", "A\u{30a}"),
    ("`E", "E\u{300}"),
    ("'E", "E\u{301}"),
    ("^E", "E\u{302}"),
    (":E", "E\u{308}"),
    ("`I", "I\u{300}"),
    ("'I", "I\u{301}"),
    ("^I", "I\u{302}"),
    (":I", "I\u{308}"),
    ("`O", "O\u{300}"),
    ("'O", "O\u{301}"),
    ("^O", "O\u{302}"),
    ("~O", "O\u{303}"),
    (":O", "O\u{308}"),
    ("`U", "U\u{300}"),
    ("'U", "U\u{301}"),
    ("^U", "U\u{302}"),
    (":U", "U\u{308}"),
    ("~N", "N\u{303}"),
    ("'Y", "Y\u{301}"),
    (",C", "C\u{327}"),
    ("`a", "a\u{300}"),
    ("'a", "a\u{301}"),
    ("^a", "a\u{302}"),
    ("~a", "a\u{303}"),
    (":a", "a\u{308}"),
    ("oa", "a\u{30a}"),
    ("`e", "e\u{300}"),
    ("'e", "e\u{301}"),
    ("^e", "e\u{302}"),
    (":e", "e\u{308}"),
    ("`i", "i\u{300}"),
    ("'i", "i\u{301}"),
    ("^i", "i\u{302}"),
    (":i", "i\u{308}"),
    ("`o", "o\u{300}"),
    ("'o", "o\u{301}"),
    ("^o", "o\u{302}"),
    ("~o", "o\u{303}"),
    (":o", "o\u{308}"),
    ("`u", "u\u{300}"),
    ("'u", "u\u{301}"),
    ("^u", "u\u{302}"),
    (":u", "u\u{308}"),
    ("~n", "n\u{303}"),
    ("'y", "y\u{301}"),
    (":y", "y\u{308}"),
    (",c", "c\u{327}"),
    ("AE", "Æ"),
    ("-D", "Ð"),
    ("tmu", "×"),
    ("mu", "×"),
    ("/O", "Ø"),
    ("TP", "Þ"),
    ("ss", "ß"),
    ("ae", "æ"),
    ("Sd", "ð"),
    ("tdi", "÷"),
    ("di", "÷"),
    ("/o", "ø"),
    ("Tp", "þ"),
    (".i", "ı"),
    ("IJ", "Ĳ"),
    ("ij", "ĳ"),
    ("/L", "Ł"),
    ("/l", "ł"),
    ("OE", "Œ"),
    ("oe", "œ"),
    ("vS", "S\u{30c}"),
    ("vs", "s\u{30c}"),
    (":Y", "Y\u{308}"),
    ("vZ", "Z\u{30c}"),
    ("vz", "z\u{30c}"),
    ("Fn", "ƒ"),
    (".j", "ȷ"),
    ("ah", "ˇ"),
    ("ab", "˘"),
    ("a.", "˙"),
    ("ao", "˚"),
    ("ho", "˛"),
    ("a\"", "˝"),
    ("*A", "Α"),
    ("*B", "Β"),
    ("*G", "Γ"),
    ("*D", "Δ"),
    ("*E", "Ε"),
    ("*Z", "Ζ"),
    ("*Y", "Η"),
    ("*H", "Θ"),
    ("*I", "Ι"),
    ("*K", "Κ"),
    ("*L", "Λ"),
    ("*M", "Μ"),
    ("*N", "Ν"),
    ("*C", "Ξ"),
    ("*O", "Ο"),
    ("*P", "Π"),
    ("*R", "Ρ"),
    ("*S", "Σ"),
    ("*T", "Τ"),
    ("*U", "Υ"),
    ("*F", "Φ"),
    ("*X", "Χ"),
    ("*Q", "Ψ"),
    ("*W", "Ω"),
    ("*a", "α"),
    ("*b", "β"),
    ("*g", "γ"),
    ("*d", "δ"),
    ("*e", "ε"),
    ("*z", "ζ"),
    ("*y", "η"),
    ("*h", "θ"),
    ("*i", "ι"),
    ("*k", "κ"),
    ("*l", "λ"),
    ("*m", "μ"),
    ("*n", "ν"),
    ("*c", "ξ"),
    ("*o", "ο"),
    ("*p", "π"),
    ("*r", "ρ"),
    ("*s", "σ"),
    ("*t", "τ"),
    ("*u", "υ"),
    ("*f", "φ"),
    ("*x", "χ"),
    ("*q", "ψ"),
    ("*w", "ω"),
    ("ts", "ς"),
    ("+h", "ϑ"),
    ("+f", "ϕ"),
    ("+p", "ϖ"),
    ("+e", "ϵ"),
    ("hy", "‐"),
    ("en", "–"),
    ("em", "—"),
    ("oq", "‘"),
    ("cq", "’"),
    ("bq", "‚"),
    ("lq", "“"),
    ("rq", "”"),
    ("Bq", "„"),
    ("dg", "†"),
    ("dd", "‡"),
    ("bu", "•"),
    ("%0", "‰"),
    ("fm", "′"),
    ("sd", "″"),
    ("fo", "‹"),
    ("fc", "›"),
    ("f/", "⁄"),
    ("Eu", "€"),
    ("eu", "€"),
    ("Im", "ℑ"),
    ("wp", "℘"),
    ("Re", "ℜ"),
    ("tm", "™"),
    ("Ah", "ℵ"),
    ("<-", "←"),
    ("ua", "↑"),
    ("->", "→"),
    ("da", "↓"),
    ("<>", "↔"),
    ("va", "↕"),
    ("CR", "↵"),
    ("lA", "⇐"),
    ("uA", "⇑"),
    ("rA", "⇒"),
    ("dA", "⇓"),
    ("hA", "⇔"),
    ("vA", "⇕"),
    ("fa", "∀"),
    ("pd", "∂"),
    ("te", "∃"),
    ("es", "∅"),
    ("gr", "∇"),
    ("mo", "∈"),
    ("nm", "∈\u{338}"),
    ("st", "∋"),
    ("product", "∏"),
    ("coproduct", "∐"),
    ("sum", "∑"),
    ("mi", "−"),
    ("-+", "∓"),
    ("**", "∗"),
    ("sr", "√"),
    ("pt", "∝"),
    ("if", "∞"),
    ("/_", "∠"),
    ("AN", "∧"),
    ("OR", "∨"),
    ("ca", "∩"),
    ("cu", "∪"),
    ("is", "∫"),
    ("tf", "∴"),
    ("ap", "∼"),
    ("|=", "≃"),
    ("=~", "≅"),
    ("~~", "≈"),
    ("!=", "=\u{338}"),
    ("==", "≡"),
    ("ne", "≡\u{338}"),
    ("<=", "≤"),
    (">=", "≥"),
    ("<<", "≪"),
    (">>", "≫"),
    ("sb", "⊂"),
    ("nb", "⊂\u{338}"),
    ("sp", "⊃"),
    ("nc", "⊃\u{338}"),
    ("ib", "⊆"),
    ("ip", "⊇"),
    ("c+", "⊕"),
    ("c*", "⊗"),
    ("pp", "⊥"),
    ("md", "⋅"),
    ("lc", "⌈"),
    ("rc", "⌉"),
    ("lf", "⌊"),
    ("rf", "⌋"),
    ("la", "〈"),
    ("ra", "〉"),
    ("sq", "□"),
    ("lz", "◊"),
    ("ci", "○"),
    ("SP", "♠"),
    ("CL", "♣"),
    ("HE", "♥"),
    ("DI", "♦"),
    ("OK", "✓"),
    ("ff", "ff"),
    ("fi", "fi"),
    ("fl", "fl"),
    ("Fi", "ffi"),
    ("Fl", "ffl"),
];
