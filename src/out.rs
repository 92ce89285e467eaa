//! Diagnostic output.
use crate::Error;
use source_span::{DefaultMetrics, Loc, Span};
use std::{convert::Infallible, fmt};
use yansi::Paint;

pub const ERROR: source_span::fmt::Style = source_span::fmt::Style::Error;

pub enum Type {
	Warning,
	Error,
}

impl fmt::Display for Type {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Warning => write!(f, "{}", Paint::yellow("warning").bold()),
			Self::Error => write!(f, "{}", Paint::red("error").bold()),
		}
	}
}

/// Diagnostic block: a title, a highlighted excerpt of the expression and
/// some notes.
///
/// Expressions are single lines, so the excerpt is always the whole
/// expression.
pub struct Block {
	ty: Type,
	title: String,
	source: Option<String>,
	highlights: source_span::fmt::Formatter,
	notes: Vec<Note>,
}

impl Block {
	pub fn new<S: ToString>(ty: Type, title: S) -> Block {
		Block {
			ty,
			title: title.to_string(),
			source: None,
			highlights: source_span::fmt::Formatter::new(),
			notes: Vec::new(),
		}
	}

	/// Block reporting the given compilation error.
	pub fn from_error(e: &Loc<Error>) -> Block {
		let mut block = Block::new(Type::Error, e.title());
		block.highlights.add(e.span(), e.label(), ERROR);
		e.fill_block(&mut block);
		block
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	/// Name of the input the excerpt comes from.
	pub fn set_source<S: ToString>(&mut self, source: S) {
		self.source = Some(source.to_string())
	}

	pub fn notes(&self) -> &[Note] {
		&self.notes
	}

	pub fn add_note<S: ToString>(&mut self, ty: NoteType, content: S) {
		self.notes.push(Note {
			ty,
			content: content.to_string(),
		})
	}

	/// Renders the block over the given expression.
	pub fn render(&self, expression: &str) -> Formatted {
		let metrics = DefaultMetrics::with_tab_stop(4);
		let mut span = Span::default();
		for c in expression.chars() {
			span.push(c, &metrics)
		}

		let input = expression.chars().map(Ok::<char, Infallible>);
		let highlights = match self.highlights.render(input, span, &metrics) {
			Ok(highlights) => highlights,
			Err(e) => match e {},
		};

		Formatted {
			block: self,
			margin_len: self.highlights.margin_len(&span).saturating_sub(2),
			highlights,
		}
	}
}

pub struct Formatted<'a> {
	block: &'a Block,
	margin_len: usize,
	highlights: source_span::fmt::Formatted,
}

impl<'a> fmt::Display for Formatted<'a> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let tab = " ".repeat(self.margin_len);

		writeln!(
			f,
			"{}{} {}",
			self.block.ty,
			Paint::new(':').bold(),
			Paint::new(&self.block.title).bold()
		)?;

		if let Some(source) = &self.block.source {
			writeln!(f, "{}--> {}", tab, source)?
		}

		write!(f, "{}{}", tab, Paint::blue('|').bold())?;
		self.highlights.fmt(f)?;
		writeln!(f, "{}{}", tab, Paint::blue('|').bold())?;

		for note in &self.block.notes {
			for (i, line) in note.content.lines().enumerate() {
				if i == 0 {
					writeln!(f, "{}= {}: {}", tab, note.ty, line)?;
				} else {
					writeln!(f, "{}  {}", tab, line)?
				}
			}
		}

		Ok(())
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoteType {
	Note,
	Help,
}

impl fmt::Display for NoteType {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Note => write!(f, "{}", Paint::new("note").bold()),
			Self::Help => write!(f, "{}", Paint::green("help").bold()),
		}
	}
}

pub struct Note {
	ty: NoteType,
	content: String,
}

impl Note {
	pub fn ty(&self) -> NoteType {
		self.ty
	}

	pub fn content(&self) -> &str {
		&self.content
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Config;

	fn error(input: &str) -> Loc<Error> {
		match crate::compile(input, &Config::default()) {
			Ok(_) => panic!("`{}` should not compile", input),
			Err(e) => e,
		}
	}

	#[test]
	fn error_block() {
		let block = Block::from_error(&error("a+"));
		assert_eq!(block.title(), "malformed expression");
		assert_eq!(block.notes().len(), 1);
		assert_eq!(block.notes()[0].ty(), NoteType::Note);
		assert!(block.notes()[0].content().ends_with("expects 2 operands"));
	}

	#[test]
	fn unclosed_group_suggests_a_closer() {
		let block = Block::from_error(&error("(ab"));
		assert_eq!(block.title(), "invalid expression");
		assert_eq!(block.notes()[0].ty(), NoteType::Help);
	}

	#[test]
	fn rendering() {
		let mut block = Block::from_error(&error("a.b)"));
		block.set_source("input.txt");
		let rendered = block.render("a.b)").to_string();

		assert!(rendered.contains("invalid expression"));
		assert!(rendered.contains("--> input.txt"));
		assert!(rendered.contains("a.b)"));
		assert!(rendered.contains("there is no matching opening parenthesis"));
	}
}
