#![no_main]

use libfuzzer_sys::fuzz_target;

use rpsl::toolchain::diagnostics::NullDiagnosticConsumer;
use rpsl::toolchain::lexer::Lexer;
use rpsl::toolchain::source::SourceBuffer;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let source = SourceBuffer::new_from_string(s, "fuzz_targets/lex.rs");
    let mut diags = NullDiagnosticConsumer {};
    let tokens: Vec<_> = Lexer::new(&source, &mut diags).collect();

    // Every stream ends in exactly one terminal token.
    assert_eq!(tokens.iter().filter(|token| token.is_terminal()).count(), 1);
    assert!(tokens.last().is_some_and(|token| token.is_terminal()));
});
