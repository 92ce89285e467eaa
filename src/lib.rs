//! Regular expression to finite automaton compiler.
//!
//! The expression is parsed into a postfix sequence (see [`syntax`]), then
//! evaluated with Thompson's construction (see [`compile`] and
//! [`automaton`]). The resulting non deterministic automaton, with its
//! epsilon-transitions, can be projected on an alphabet with [`Table`].
extern crate source_span;

use source_span::Loc;
use std::fmt;

pub mod automaton;
pub mod compile;
pub mod input;
pub mod out;
pub mod syntax;
pub mod table;
mod util;

pub use automaton::{DetAutomaton, Fragment, StateId};
pub use input::Input;
pub use syntax::{Config, Notation};
pub use table::{Alphabet, Table, Tabulate};
pub use util::DisplayChar;

/// Compilation error.
#[derive(Debug)]
pub enum Error {
	Syntax(syntax::Error),
	Compile(compile::Error),
}

impl Error {
	/// Converts a located module error.
	pub fn located<E: Into<Error>>(e: Loc<E>) -> Loc<Error> {
		let span = e.span();
		Loc::new(e.into_inner().into(), span)
	}

	pub fn title(&self) -> String {
		match self {
			Error::Syntax(_) => "invalid expression".to_string(),
			Error::Compile(_) => "malformed expression".to_string(),
		}
	}

	/// Highlight label of the error span.
	pub fn label(&self) -> Option<String> {
		match self {
			Error::Syntax(syntax::Error::MissingCloser) => Some("this group is never closed".to_string()),
			Error::Compile(compile::Error::DanglingOperand(_)) => {
				Some("this operand is not connected to the rest".to_string())
			}
			e => Some(e.to_string()),
		}
	}

	pub fn fill_block(&self, block: &mut out::Block) {
		use yansi::Paint;

		match self {
			Error::Syntax(syntax::Error::UnexpectedChar(c)) => {
				block.add_note(
					out::NoteType::Note,
					format!("groups are not allowed in {} notation", Paint::new("postfix").bold()),
				);
				block.add_note(out::NoteType::Help, format!("remove `{}`", c));
			}
			Error::Syntax(syntax::Error::MissingCloser) => {
				block.add_note(out::NoteType::Help, format!("add a matching {}", Paint::new(')').bold()))
			}
			Error::Syntax(syntax::Error::UnexpectedCloser) => {
				block.add_note(out::NoteType::Note, "there is no matching opening parenthesis")
			}
			Error::Compile(compile::Error::MissingOperand(op)) => {
				let expected = match op.arity() {
					1 => "one operand".to_string(),
					n => format!("{} operands", n),
				};
				block.add_note(
					out::NoteType::Note,
					format!("`{}` expects {}", Paint::new(op).bold(), expected),
				)
			}
			Error::Compile(compile::Error::DanglingOperand(n)) => {
				block.add_note(
					out::NoteType::Note,
					format!("the expression evaluates to {} separate automata", n),
				);
				block.add_note(
					out::NoteType::Help,
					format!(
						"connect the operands with {} or {}",
						Paint::new('.').bold(),
						Paint::new('+').bold()
					),
				)
			}
			Error::Compile(compile::Error::Empty) => {
				block.add_note(out::NoteType::Note, "the expression contains no operand")
			}
		}
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Error::Syntax(e) => e.fmt(f),
			Error::Compile(e) => e.fmt(f),
		}
	}
}

impl From<syntax::Error> for Error {
	fn from(e: syntax::Error) -> Self {
		Error::Syntax(e)
	}
}

impl From<compile::Error> for Error {
	fn from(e: compile::Error) -> Self {
		Error::Compile(e)
	}
}

/// Parses and compiles the given expression.
pub fn compile(input: &str, config: &Config) -> Result<Fragment, Loc<Error>> {
	let postfix = syntax::parse(input, config).map_err(Error::located)?;
	compile::compile(&postfix).map_err(Error::located)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn infix(input: &str) -> Fragment {
		match compile(input, &Config::default()) {
			Ok(fragment) => fragment,
			Err(e) => panic!("unable to compile `{}`: {}", input, e),
		}
	}

	#[test]
	fn concatenation_with_star() {
		let f = infix("a.b*");
		for word in &["a", "ab", "abb", "abbb"] {
			assert!(f.accepts(word))
		}
		assert!(!f.accepts(""));
		assert!(!f.accepts("b"));

		let table = Table::new(&f, &Alphabet::from("ab"));
		assert_eq!(table.get(0, 'a'), Some(1));
	}

	#[test]
	fn infix_and_postfix_agree() {
		let config = Config {
			notation: Notation::Postfix,
			..Config::default()
		};

		for (infix_input, postfix_input) in &[("a.b*", "ab*."), ("a+b", "ab+"), ("(a.b)*", "ab.*")] {
			match compile(postfix_input, &config) {
				Ok(f) => assert_eq!(f, infix(infix_input)),
				Err(e) => panic!("unable to compile `{}`: {}", postfix_input, e),
			}
		}
	}

	#[test]
	fn errors_are_located() {
		match compile("(a+)", &Config::default()) {
			Ok(_) => panic!("should fail"),
			Err(e) => {
				assert!(matches!(
					e.as_ref(),
					Error::Compile(compile::Error::MissingOperand(syntax::Operator::Union))
				));
				assert_eq!(e.span().start().column, 2);
			}
		}

		match compile("(a", &Config::default()) {
			Ok(_) => panic!("should fail"),
			Err(e) => {
				assert!(matches!(e.as_ref(), Error::Syntax(syntax::Error::MissingCloser)));
				assert_eq!(e.span().start().column, 0);
			}
		}
	}

	#[test]
	fn every_error_has_notes() {
		let config = Config::default();
		for input in &["", "*", "(a", "a)", "a+"] {
			match compile(input, &config) {
				Ok(_) => panic!("`{}` should fail", input),
				Err(e) => {
					let block = out::Block::from_error(&e);
					assert!(!block.notes().is_empty(), "no note for `{}`", input)
				}
			}
		}
	}
}
