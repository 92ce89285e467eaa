use super::{Operator, Token};
use source_span::{Loc, Metrics, Span};
use std::iter::Peekable;

fn is_space(c: char) -> bool {
	c.is_whitespace() || c.is_control()
}

/// Regular expression lexer.
///
/// Every character is a token on its own, except whitespaces which are
/// skipped.
pub struct Lexer<I: Iterator<Item = char>, M: Metrics> {
	input: Peekable<I>,
	epsilon: char,
	metrics: M,
	span: Span,
}

impl<I: Iterator<Item = char>, M: Metrics> Lexer<I, M> {
	pub fn new(input: I, epsilon: char, metrics: M) -> Lexer<I, M> {
		Lexer {
			input: input.peekable(),
			epsilon,
			metrics,
			span: Span::default(),
		}
	}

	fn consume(&mut self) -> Option<char> {
		let c = self.input.next()?;
		self.span.push(c, &self.metrics);
		Some(c)
	}

	fn skip_whitespaces(&mut self) {
		while let Some(c) = self.input.peek() {
			if is_space(*c) {
				self.consume();
			} else {
				break;
			}
		}

		self.span.clear()
	}
}

impl<I: Iterator<Item = char>, M: Metrics> Iterator for Lexer<I, M> {
	type Item = Loc<Token>;

	fn next(&mut self) -> Option<Loc<Token>> {
		self.skip_whitespaces();

		let c = self.consume()?;
		let token = match c {
			'(' => Token::Open,
			')' => Token::Close,
			c if c == self.epsilon => Token::Epsilon,
			c => match Operator::from_char(c) {
				Some(op) => Token::Operator(op),
				None => Token::Symbol(c),
			},
		};

		let span = self.span;
		self.span.clear();
		Some(Loc::new(token, span))
	}
}
