#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::toolchain::source::{SourceBuffer, SourceError};

    fn data_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data").join(name)
    }

    #[test]
    fn from_string() {
        let source = SourceBuffer::new_from_string("mntner: FOO-MNT\n", "inline");
        assert_eq!(source.code(), "mntner: FOO-MNT\n");
        assert_eq!(source.file_name(), "inline");
    }

    #[test]
    fn from_file() {
        let path = data_path("maintainer.rpsl");
        let source = SourceBuffer::new_from_file(&path).unwrap();
        assert!(source.code().starts_with("mntner:"));
        assert!(source.code().ends_with('\n'));
        assert_eq!(source.file_name(), path.to_string_lossy());
    }

    #[test]
    fn from_empty_file() {
        let source = SourceBuffer::new_from_file(&data_path("empty.rpsl")).unwrap();
        assert_eq!(source.code(), "");
    }

    #[test]
    fn missing_file() {
        let result = SourceBuffer::new_from_file(&data_path("does-not-exist.rpsl"));
        assert!(matches!(result, Err(SourceError::Io(_))));
    }

    #[test]
    fn invalid_utf8() {
        match SourceBuffer::new_from_file(&data_path("invalid-utf8.rpsl")) {
            Err(SourceError::InvalidUtf8 { file_name, offset }) => {
                assert!(file_name.ends_with("invalid-utf8.rpsl"));
                // "descr: " precedes the bad byte on the second line.
                assert_eq!(offset, "mntner: FOO-MNT\ndescr: ".len());
            }
            Err(e) => panic!("unexpected error {}", e),
            Ok(_) => panic!("invalid utf-8 accepted"),
        }
    }

    #[test]
    fn call_site_name() {
        let source = crate::rpsl!("person: Jane Doe\n");
        assert!(source.file_name().starts_with(file!()));
    }
}
