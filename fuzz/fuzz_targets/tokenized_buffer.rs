#![no_main]

use libfuzzer_sys::fuzz_target;

use rpsl::toolchain::diagnostics::NullDiagnosticConsumer;
use rpsl::toolchain::lexer::TokenizedBuffer;
use rpsl::toolchain::source::SourceBuffer;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let source = SourceBuffer::new_from_string(s, "fuzz_targets/tokenized_buffer.rs");
    let mut diags = NullDiagnosticConsumer {};
    let first = TokenizedBuffer::tokenize(&source, &mut diags);
    let second = TokenizedBuffer::tokenize(&source, &mut diags);
    assert_eq!(first.tokens(), second.tokens());
});
