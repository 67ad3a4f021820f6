pub mod diagnostics;
pub mod lexer;
pub mod source;
