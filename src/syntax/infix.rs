//! Shunting-yard conversion from infix to postfix notation.
use super::{Error, Item, Operator, Result, Token};
use source_span::{Loc, Span};

/// Pending element of the operator stack.
enum Pending {
	Operator(Operator, Span),
	Open(Span),
}

struct Converter {
	output: Vec<Loc<Item>>,
	stack: Vec<Pending>,

	/// Does the last token end an operand.
	///
	/// When it does, an operand or group coming next is implicitly
	/// concatenated.
	after_operand: bool,
}

impl Converter {
	fn new() -> Self {
		Converter {
			output: Vec::new(),
			stack: Vec::new(),
			after_operand: false,
		}
	}

	fn push_operator(&mut self, op: Operator, span: Span) {
		while let Some(Pending::Operator(top, top_span)) = self.stack.last() {
			if top.precedence() >= op.precedence() {
				self.output.push(Loc::new(Item::Operator(*top), *top_span));
				self.stack.pop();
			} else {
				break;
			}
		}

		self.stack.push(Pending::Operator(op, span))
	}

	fn implicit_concat(&mut self, span: Span) {
		if self.after_operand {
			self.push_operator(Operator::Concat, span)
		}
	}

	fn close(&mut self, span: Span) -> Result<()> {
		loop {
			match self.stack.pop() {
				Some(Pending::Operator(op, op_span)) => {
					self.output.push(Loc::new(Item::Operator(op), op_span))
				}
				Some(Pending::Open(_)) => break Ok(()),
				None => break Err(Loc::new(Error::UnexpectedCloser, span)),
			}
		}
	}

	fn finish(mut self) -> Result<Vec<Loc<Item>>> {
		while let Some(pending) = self.stack.pop() {
			match pending {
				Pending::Operator(op, span) => self.output.push(Loc::new(Item::Operator(op), span)),
				Pending::Open(span) => return Err(Loc::new(Error::MissingCloser, span)),
			}
		}

		Ok(self.output)
	}
}

pub fn to_postfix<I: Iterator<Item = Loc<Token>>>(tokens: I) -> Result<Vec<Loc<Item>>> {
	let mut converter = Converter::new();

	for token in tokens {
		let span = token.span();
		match token.into_inner() {
			Token::Symbol(c) => {
				converter.implicit_concat(span);
				converter.output.push(Loc::new(Item::Operand(Some(c)), span));
				converter.after_operand = true
			}
			Token::Epsilon => {
				converter.implicit_concat(span);
				converter.output.push(Loc::new(Item::Operand(None), span));
				converter.after_operand = true
			}
			Token::Open => {
				converter.implicit_concat(span);
				converter.stack.push(Pending::Open(span));
				converter.after_operand = false
			}
			Token::Close => {
				converter.close(span)?;
				converter.after_operand = true
			}
			Token::Operator(op) => {
				converter.push_operator(op, span);
				converter.after_operand = op == Operator::Star
			}
		}
	}

	converter.finish()
}
