#[cfg(test)]
mod tests {
    use crate::toolchain::diagnostics::{
        Diagnostic, DiagnosticConsumer, DiagnosticKind, DiagnosticLevel, DiagnosticLocation,
        DiagnosticMessage, LexerDiagnosticKind, StreamDiagnosticConsumer,
    };

    fn message(line_number: i32, column_number: i32, body: &str) -> DiagnosticMessage<'static> {
        DiagnosticMessage {
            kind: DiagnosticKind::LexerError { kind: LexerDiagnosticKind::InvalidEmail },
            location: DiagnosticLocation {
                file_name: "objects.rpsl",
                line_number,
                column_number,
                line: "e-mail: nobody",
            },
            body: body.to_string(),
        }
    }

    #[test]
    fn location_display() {
        let mut location = message(3, 14, "").location;
        assert_eq!(location.to_string(), "objects.rpsl:3:14");
        location.column_number = 0;
        assert_eq!(location.to_string(), "objects.rpsl:3");
        location.line_number = 0;
        assert_eq!(location.to_string(), "objects.rpsl");
    }

    #[test]
    fn error_display() {
        let diag = Diagnostic::new(
            DiagnosticLevel::Error,
            message(3, 14, "Malformed email address."),
            vec![message(1, 6, "In this object.")],
        );
        assert_eq!(
            diag.to_string(),
            "objects.rpsl:3:14: ERROR: Malformed email address.\n  objects.rpsl:1:6: In this object."
        );
    }

    #[test]
    fn warning_display() {
        let diag = Diagnostic::new(DiagnosticLevel::Warning, message(2, 1, "Odd."), Vec::new());
        assert_eq!(diag.to_string(), "objects.rpsl:2:1: Odd.");
    }

    #[test]
    fn stream_consumer_writes_lines() {
        let mut consumer = StreamDiagnosticConsumer::new(Vec::new());
        let first = Diagnostic::new(DiagnosticLevel::Error, message(1, 2, "One."), Vec::new());
        let second = Diagnostic::new(DiagnosticLevel::Note, message(2, 3, "Two."), Vec::new());
        consumer.handle_diagnostic(&first);
        consumer.handle_diagnostic(&second);
        consumer.flush();
        let written = String::from_utf8(consumer.into_inner().unwrap()).unwrap();
        assert_eq!(written, "objects.rpsl:1:2: ERROR: One.\nobjects.rpsl:2:3: Two.\n");
    }

    #[test]
    fn lexer_kind_messages() {
        assert_eq!(LexerDiagnosticKind::MissingColon.to_string(), "Expected ':' after keyword.");
        assert_eq!(
            LexerDiagnosticKind::InvalidPolicy.to_string(),
            "Malformed routing policy expression."
        );
    }
}
