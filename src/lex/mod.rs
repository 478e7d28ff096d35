mod scan;
mod token;

pub use scan::Lexer;
pub use token::{Token, TokenKind};
