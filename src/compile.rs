//! Construction of the automaton from a postfix sequence.
use crate::{
	automaton::{self, Fragment},
	syntax::{Item, Operator, Postfix},
};
use source_span::{Loc, Span};
use std::fmt;

#[derive(Debug)]
pub enum Error {
	/// The operator has not enough operands.
	MissingOperand(Operator),

	/// Some operands are not connected by any operator.
	///
	/// The parameter is the number of fragments left at the end.
	DanglingOperand(usize),

	/// There is nothing to compile.
	Empty,
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		use self::Error::*;
		match self {
			MissingOperand(op) => write!(f, "missing operand for `{}`", op),
			DanglingOperand(_) => write!(f, "dangling operand"),
			Empty => write!(f, "empty expression"),
		}
	}
}

pub type Result<T> = std::result::Result<T, Loc<Error>>;

/// Evaluates the postfix sequence, building one fragment per item.
///
/// Each fragment is kept along with the span of the sub-expression it
/// recognizes, so that errors can point at it.
pub fn compile(postfix: &Postfix) -> Result<Fragment> {
	let mut stack: Vec<(Fragment, Span)> = Vec::new();

	for item in postfix.items() {
		let span = item.span();
		let (fragment, fragment_span) = match item.as_ref() {
			Item::Operand(symbol) => (automaton::literal(*symbol), span),
			Item::Operator(Operator::Star) => match stack.pop() {
				Some((a, mut a_span)) => {
					a_span.append(span);
					(automaton::star(a), a_span)
				}
				None => return Err(Loc::new(Error::MissingOperand(Operator::Star), span)),
			},
			Item::Operator(op) => match (stack.pop(), stack.pop()) {
				(Some((b, b_span)), Some((a, mut a_span))) => {
					a_span.append(b_span);
					a_span.append(span);
					match op {
						Operator::Union => (automaton::union(a, b), a_span),
						_ => (automaton::concatenate(a, b), a_span),
					}
				}
				_ => return Err(Loc::new(Error::MissingOperand(*op), span)),
			},
		};

		log::trace!("{:?} produced {} states", item.as_ref(), fragment.len());
		stack.push((fragment, fragment_span))
	}

	if stack.len() > 1 {
		return Err(Loc::new(Error::DanglingOperand(stack.len()), stack[1].1));
	}

	match stack.pop() {
		Some((fragment, _)) => {
			log::debug!(
				"compiled {} states, {} transitions",
				fragment.len(),
				fragment.transition_count()
			);
			log::trace!("automaton:\n{}", fragment);
			Ok(fragment)
		}
		None => Err(Loc::new(Error::Empty, postfix.span())),
	}
}
