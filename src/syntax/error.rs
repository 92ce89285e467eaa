use source_span::Loc;
use std::fmt;

#[derive(Debug)]
pub enum Error {
	/// Character not allowed in this notation.
	UnexpectedChar(char),

	/// Opening parenthesis never closed.
	MissingCloser,

	/// Closing parenthesis without a matching opening one.
	UnexpectedCloser,
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		use self::Error::*;
		match self {
			UnexpectedChar(c) => write!(f, "unexpected character `{}`", c),
			MissingCloser => write!(f, "unclosed group"),
			UnexpectedCloser => write!(f, "unexpected closing parenthesis"),
		}
	}
}

pub type Result<T> = std::result::Result<T, Loc<Error>>;
