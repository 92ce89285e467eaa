//! Regular expression syntax.
//!
//! An expression is first split into located tokens by the [`Lexer`], then
//! turned into a [`Postfix`] sequence of operands and operators, either by
//! the shunting-yard algorithm (infix notation) or by reading the tokens as
//! they are (postfix notation).
use source_span::{DefaultMetrics, Loc, Span};
use std::fmt;

mod error;
mod infix;
pub mod lexer;

pub use error::{Error, Result};
pub use lexer::Lexer;

/// Notation of the input expression.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Notation {
	/// `a.(b+c)*`, with implicit concatenation and parenthesis.
	Infix,

	/// `abc+*.`, already in reverse polish notation.
	Postfix,
}

/// Parser configuration.
#[derive(Clone, Copy, Debug)]
pub struct Config {
	pub notation: Notation,

	/// Character denoting the epsilon literal.
	pub epsilon: char,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			notation: Notation::Infix,
			epsilon: 'E',
		}
	}
}

/// Regular expression operator.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Operator {
	/// Kleene star, `*`.
	Star,

	/// Concatenation, `.` or implicit.
	Concat,

	/// Union, `+` or `|`.
	Union,
}

impl Operator {
	pub fn from_char(c: char) -> Option<Operator> {
		match c {
			'*' => Some(Operator::Star),
			'.' => Some(Operator::Concat),
			'+' | '|' => Some(Operator::Union),
			_ => None,
		}
	}

	pub fn precedence(&self) -> u8 {
		match self {
			Operator::Star => 2,
			Operator::Concat => 1,
			Operator::Union => 0,
		}
	}

	/// Number of operands.
	pub fn arity(&self) -> usize {
		match self {
			Operator::Star => 1,
			_ => 2,
		}
	}
}

impl fmt::Display for Operator {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Operator::Star => write!(f, "*"),
			Operator::Concat => write!(f, "."),
			Operator::Union => write!(f, "+"),
		}
	}
}

/// Lexical token.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Token {
	Symbol(char),
	Epsilon,
	Operator(Operator),
	Open,
	Close,
}

/// Element of a postfix sequence.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Item {
	/// Literal operand, `None` being the epsilon literal.
	Operand(Option<char>),
	Operator(Operator),
}

/// Expression in reverse polish notation.
pub struct Postfix {
	items: Vec<Loc<Item>>,

	/// Span of the whole expression.
	span: Span,

	epsilon: char,
}

impl Postfix {
	pub fn items(&self) -> &[Loc<Item>] {
		&self.items
	}

	pub fn span(&self) -> Span {
		self.span
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

impl fmt::Display for Postfix {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for item in &self.items {
			match item.as_ref() {
				Item::Operand(Some(c)) => write!(f, "{}", c)?,
				Item::Operand(None) => write!(f, "{}", self.epsilon)?,
				Item::Operator(op) => op.fmt(f)?,
			}
		}

		Ok(())
	}
}

/// Parses the given expression into a postfix sequence.
pub fn parse(input: &str, config: &Config) -> Result<Postfix> {
	let metrics = DefaultMetrics::with_tab_stop(4);

	let mut span = Span::default();
	for c in input.chars() {
		span.push(c, &metrics)
	}

	let tokens = Lexer::new(input.chars(), config.epsilon, metrics);
	let items = match config.notation {
		Notation::Infix => infix::to_postfix(tokens)?,
		Notation::Postfix => read_postfix(tokens)?,
	};

	let postfix = Postfix {
		items,
		span,
		epsilon: config.epsilon,
	};

	log::debug!("postfix form: {}", postfix);
	Ok(postfix)
}

fn read_postfix<I: Iterator<Item = Loc<Token>>>(tokens: I) -> Result<Vec<Loc<Item>>> {
	let mut items = Vec::new();

	for token in tokens {
		let span = token.span();
		let item = match token.into_inner() {
			Token::Symbol(c) => Item::Operand(Some(c)),
			Token::Epsilon => Item::Operand(None),
			Token::Operator(op) => Item::Operator(op),
			Token::Open => return Err(Loc::new(Error::UnexpectedChar('('), span)),
			Token::Close => return Err(Loc::new(Error::UnexpectedChar(')'), span)),
		};

		items.push(Loc::new(item, span))
	}

	Ok(items)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn postfix(input: &str) -> String {
		match parse(input, &Config::default()) {
			Ok(postfix) => postfix.to_string(),
			Err(e) => panic!("unable to parse `{}`: {}", input, e),
		}
	}

	fn read(input: &str) -> Result<Postfix> {
		let config = Config {
			notation: Notation::Postfix,
			..Config::default()
		};

		parse(input, &config)
	}

	#[test]
	fn infix_precedence() {
		assert_eq!(postfix("a.b*"), "ab*.");
		assert_eq!(postfix("a+b"), "ab+");
		assert_eq!(postfix("a|b.c"), "abc.+");
		assert_eq!(postfix("(a.b)*"), "ab.*");
		assert_eq!(postfix("(a+b).c"), "ab+c.");
	}

	#[test]
	fn infix_is_left_associative() {
		assert_eq!(postfix("a.b.c"), "ab.c.");
		assert_eq!(postfix("a+b+c"), "ab+c+");
		assert_eq!(postfix("a**"), "a**");
	}

	#[test]
	fn implicit_concatenation() {
		assert_eq!(postfix("ab"), "ab.");
		assert_eq!(postfix("ab*c"), "ab*.c.");
		assert_eq!(postfix("a(b+c)"), "abc+.");
		assert_eq!(postfix("(a)(b)"), "ab.");
		assert_eq!(postfix("a*(b)"), "a*b.");
	}

	#[test]
	fn whitespace_is_ignored() {
		assert_eq!(postfix(" a . b * "), "ab*.");
	}

	#[test]
	fn epsilon_marker() {
		let parsed = match parse("aE", &Config::default()) {
			Ok(postfix) => postfix,
			Err(e) => panic!("{}", e),
		};
		let items: Vec<_> = parsed
			.items()
			.iter()
			.map(|item| *item.as_ref())
			.collect();

		assert_eq!(
			items,
			vec![
				Item::Operand(Some('a')),
				Item::Operand(None),
				Item::Operator(Operator::Concat)
			]
		);

		let config = Config {
			epsilon: '#',
			..Config::default()
		};
		match parse("E#", &config) {
			Ok(postfix) => assert_eq!(postfix.to_string(), "E#."),
			Err(e) => panic!("{}", e),
		}
	}

	#[test]
	fn unbalanced_parenthesis() {
		match parse("(a.b", &Config::default()) {
			Err(e) => assert!(matches!(e.as_ref(), Error::MissingCloser)),
			Ok(_) => panic!("expected an error"),
		}

		match parse("a.b)", &Config::default()) {
			Err(e) => assert!(matches!(e.as_ref(), Error::UnexpectedCloser)),
			Ok(_) => panic!("expected an error"),
		}
	}

	#[test]
	fn postfix_notation() {
		for (input, expected) in &[("ab*.", "ab*."), ("ab|", "ab+"), ("ab", "ab")] {
			match read(input) {
				Ok(postfix) => assert_eq!(postfix.to_string(), *expected),
				Err(e) => panic!("unable to read `{}`: {}", input, e),
			}
		}

		match read("(ab.)") {
			Err(e) => assert!(matches!(e.as_ref(), Error::UnexpectedChar('('))),
			Ok(_) => panic!("expected an error"),
		}
	}
}
