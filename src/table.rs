//! Adjacency table of an automaton over an explicit alphabet.
use crate::{
	automaton::{DetAutomaton, Fragment, Label, StateId},
	util::{write_padded, DisplayChar},
};
use std::fmt;

/// Marker printed for a missing transition.
pub const NO_TRANSITION: &str = "-1";

/// Ordered alphabet.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
	pub fn new<I: IntoIterator<Item = char>>(symbols: I) -> Alphabet {
		let symbols: Vec<char> = symbols.into_iter().collect();

		for (i, c) in symbols.iter().enumerate() {
			if symbols[..i].contains(c) {
				log::warn!("symbol `{}` appears more than once in the alphabet", DisplayChar(*c))
			}
		}

		Alphabet(symbols)
	}

	pub fn symbols(&self) -> &[char] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Column of the given symbol, that is its first position.
	pub fn position(&self, c: char) -> Option<usize> {
		self.0.iter().position(|d| *d == c)
	}
}

/// Alphabet made of the non-whitespace characters of the string.
impl<'a> From<&'a str> for Alphabet {
	fn from(s: &'a str) -> Alphabet {
		Alphabet::new(s.chars().filter(|c| !c.is_whitespace()))
	}
}

/// Automaton that can be projected on a table.
pub trait Tabulate {
	fn state_count(&self) -> usize;

	fn is_accepting(&self, q: StateId) -> bool;

	/// Outgoing transitions of `q`, in ascending (label, target) order.
	fn edges<'a>(&'a self, q: StateId) -> Box<dyn Iterator<Item = (Label, StateId)> + 'a>;
}

impl Tabulate for Fragment {
	fn state_count(&self) -> usize {
		self.len()
	}

	fn is_accepting(&self, q: StateId) -> bool {
		self.state(q).map(|state| state.is_accepting()).unwrap_or(false)
	}

	fn edges<'a>(&'a self, q: StateId) -> Box<dyn Iterator<Item = (Label, StateId)> + 'a> {
		Box::new(
			self.successors(q)
				.flat_map(|(label, targets)| targets.iter().map(move |target| (*label, *target))),
		)
	}
}

impl Tabulate for DetAutomaton {
	fn state_count(&self) -> usize {
		self.len()
	}

	fn is_accepting(&self, q: StateId) -> bool {
		self.state(q).map(|state| state.is_accepting()).unwrap_or(false)
	}

	fn edges<'a>(&'a self, q: StateId) -> Box<dyn Iterator<Item = (Label, StateId)> + 'a> {
		match self.state(q) {
			Some(state) => Box::new(state.transitions().iter().map(|(c, target)| (Some(*c), *target))),
			None => Box::new(std::iter::empty()),
		}
	}
}

/// Adjacency table.
///
/// Each cell holds at most one destination. When a state has several
/// destinations on the same symbol, the last one visited (the greatest)
/// is kept and the collapse is counted. Epsilon-transitions and symbols
/// outside of the alphabet are not represented.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Table {
	alphabet: Alphabet,
	rows: Vec<Vec<Option<StateId>>>,
	accepting: Vec<StateId>,
	collapsed: usize,
}

impl Table {
	pub fn new<A: Tabulate + ?Sized>(automaton: &A, alphabet: &Alphabet) -> Table {
		let mut rows = Vec::with_capacity(automaton.state_count());
		let mut accepting = Vec::new();
		let mut collapsed = 0;

		for q in 0..automaton.state_count() {
			let mut row = vec![None; alphabet.len()];

			for (label, target) in automaton.edges(q) {
				if let Some(i) = label.and_then(|c| alphabet.position(c)) {
					if let Some(previous) = row[i].replace(target) {
						if previous != target {
							collapsed += 1
						}
					}
				}
			}

			if automaton.is_accepting(q) {
				accepting.push(q)
			}

			rows.push(row)
		}

		if collapsed > 0 {
			log::warn!(
				"{} nondeterministic transition(s) collapsed in the table",
				collapsed
			)
		}

		Table {
			alphabet: alphabet.clone(),
			rows,
			accepting,
			collapsed,
		}
	}

	pub fn alphabet(&self) -> &Alphabet {
		&self.alphabet
	}

	pub fn rows(&self) -> &[Vec<Option<StateId>>] {
		&self.rows
	}

	pub fn get(&self, q: StateId, c: char) -> Option<StateId> {
		let i = self.alphabet.position(c)?;
		self.rows.get(q).and_then(|row| row[i])
	}

	/// Accepting states, in ascending order.
	pub fn accepting(&self) -> &[StateId] {
		&self.accepting
	}

	/// Number of destinations dropped because a cell was already filled.
	pub fn collapsed(&self) -> usize {
		self.collapsed
	}
}

fn cell(target: Option<StateId>) -> String {
	match target {
		Some(q) => q.to_string(),
		None => NO_TRANSITION.to_string(),
	}
}

/// Writes a table line, without trailing whitespaces.
fn write_line<I: Iterator<Item = String>>(
	f: &mut fmt::Formatter,
	first: String,
	first_width: usize,
	cells: I,
	cell_width: usize,
) -> fmt::Result {
	let mut pending = (first, first_width);
	for content in cells {
		write_padded(f, &pending.0, pending.1)?;
		pending = (content, cell_width);
	}

	writeln!(f, "{}", pending.0)
}

impl fmt::Display for Table {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		use itertools::Itertools;

		let state_width = self
			.rows
			.len()
			.saturating_sub(1)
			.to_string()
			.len()
			.max("state".len())
			+ 2;

		let cell_width = self
			.rows
			.iter()
			.flatten()
			.map(|target| cell(*target).len())
			.chain(self.alphabet.symbols().iter().map(|c| DisplayChar(*c).to_string().chars().count()))
			.max()
			.unwrap_or(0)
			.max(NO_TRANSITION.len())
			+ 2;

		let header = self.alphabet.symbols().iter().map(|c| DisplayChar(*c).to_string());
		write_line(f, "state".to_string(), state_width, header, cell_width)?;

		for (q, row) in self.rows.iter().enumerate() {
			let cells = row.iter().map(|target| cell(*target));
			write_line(f, q.to_string(), state_width, cells, cell_width)?
		}

		writeln!(f, "accepting states: {}", self.accepting.iter().format(", "))
	}
}
