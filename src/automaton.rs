use std::{
	collections::{btree_map, BTreeMap, BTreeSet},
	fmt,
};

mod combine;
mod determinize;
mod simulate;

pub use combine::*;
pub use determinize::*;

/// State identifier.
///
/// This is the position of the state in its automaton.
pub type StateId = usize;

/// Transition label.
///
/// `None` is the epsilon label.
pub type Label = Option<char>;

/// State of non deterministic automaton.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct State {
	/// Outgoing transitions, grouped by label.
	transitions: BTreeMap<Label, BTreeSet<StateId>>,

	/// Is this an accepting state.
	accepting: bool,
}

impl State {
	pub fn new(accepting: bool) -> State {
		State {
			transitions: BTreeMap::new(),
			accepting,
		}
	}

	pub fn is_accepting(&self) -> bool {
		self.accepting
	}

	/// Destination states on the given label.
	pub fn targets(&self, label: Label) -> Option<&BTreeSet<StateId>> {
		self.transitions.get(&label)
	}

	pub fn successors(&self) -> Successors {
		Successors::new(Some(&self.transitions))
	}

	/// Number of (label, destination) pairs leaving this state.
	pub fn transition_count(&self) -> usize {
		self.transitions.values().map(BTreeSet::len).sum()
	}

	fn add(&mut self, label: Label, target: StateId) {
		self.transitions
			.entry(label)
			.or_insert_with(BTreeSet::new)
			.insert(target);
	}

	/// Renumbers every destination of this state by `offset`.
	fn shifted(self, offset: StateId) -> State {
		let transitions = self
			.transitions
			.into_iter()
			.map(|(label, targets)| (label, targets.into_iter().map(|q| q + offset).collect()))
			.collect();

		State {
			transitions,
			accepting: self.accepting,
		}
	}
}

/// Single-entry, single-exit non deterministic automaton.
///
/// State `0` is the entry state and the last state is the unique accepting
/// state. A fragment can only be built through the combinators of this
/// module, which guarantees that it is never empty.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Fragment {
	states: Vec<State>,
}

impl Fragment {
	/// Number of states.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn states(&self) -> &[State] {
		&self.states
	}

	pub fn state(&self, q: StateId) -> Option<&State> {
		self.states.get(q)
	}

	pub fn entry(&self) -> StateId {
		0
	}

	pub fn exit(&self) -> StateId {
		self.states.len() - 1
	}

	pub fn accepting_states(&self) -> impl Iterator<Item = StateId> + '_ {
		self.states
			.iter()
			.enumerate()
			.filter(|(_, state)| state.accepting)
			.map(|(q, _)| q)
	}

	pub fn successors(&self, q: StateId) -> Successors {
		Successors::new(self.states.get(q).map(|state| &state.transitions))
	}

	/// Total number of (source, label, destination) transitions.
	pub fn transition_count(&self) -> usize {
		self.states.iter().map(State::transition_count).sum()
	}

	fn add(&mut self, source: StateId, label: Label, target: StateId) {
		self.states[source].add(label, target)
	}

	fn set_accepting(&mut self, q: StateId, accepting: bool) {
		self.states[q].accepting = accepting
	}

	/// Moves the states of `other` at the end of this fragment.
	///
	/// Returns the offset applied to the states of `other`.
	fn absorb(&mut self, other: Fragment) -> StateId {
		let offset = self.states.len();
		self.states
			.extend(other.states.into_iter().map(|state| state.shifted(offset)));
		offset
	}
}

impl fmt::Display for Fragment {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for (q, state) in self.states.iter().enumerate() {
			if state.accepting {
				write!(f, "({})", q)?
			} else {
				write!(f, "{}", q)?
			}

			for (label, targets) in state.successors() {
				for target in targets {
					match label {
						Some(c) => write!(f, " -{}-> {}", crate::util::DisplayChar(*c), target)?,
						None => write!(f, " -ε-> {}", target)?,
					}
				}
			}

			writeln!(f)?
		}

		Ok(())
	}
}

pub struct Successors<'a> {
	inner: Option<btree_map::Iter<'a, Label, BTreeSet<StateId>>>,
}

impl<'a> Successors<'a> {
	pub fn new(map: Option<&'a BTreeMap<Label, BTreeSet<StateId>>>) -> Self {
		Self {
			inner: map.map(|map| map.iter()),
		}
	}
}

impl<'a> Iterator for Successors<'a> {
	type Item = (&'a Label, &'a BTreeSet<StateId>);

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.as_mut().and_then(|inner| inner.next())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_lists_transitions() {
		let f = star(literal(Some('a')));
		let expected = "\
0 -ε-> 1 -ε-> 3
1 -a-> 2
2 -ε-> 1 -ε-> 3
(3)
";
		assert_eq!(f.to_string(), expected);
	}

	#[test]
	fn display_escapes_symbols() {
		assert_eq!(literal(Some(' ')).to_string(), "0 -\\s-> 1\n(1)\n");
		assert_eq!(literal(None).to_string(), "0\n(1)\n");
	}
}
