#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };
    let mut tokens = 0_usize;
    for result in ditroff::Lexer::new(source) {
        match result {
            Ok(token) => {
                assert!(token.span.start <= token.span.end);
                assert!(source.get(token.span.clone()).is_some());
                tokens += 1;
            }
            Err(err) => {
                assert!(err.is_lex_error());
                assert!(err.span.end <= source.len());
            }
        }
    }
    let mut fragments = 0_usize;
    for result in ditroff::Renderer::new(source) {
        if result.is_err() {
            break;
        }
        fragments += 1;
    }
    // Every fragment comes from a distinct token.
    assert!(fragments <= tokens);
});
