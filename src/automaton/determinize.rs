use super::{Fragment, StateId};
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

/// State of deterministic automaton.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DetState {
	/// Underlying states of the non deterministic automaton.
	nfa_states: BTreeSet<StateId>,

	transitions: BTreeMap<char, StateId>,

	accepting: bool,
}

impl DetState {
	pub fn nfa_states(&self) -> &BTreeSet<StateId> {
		&self.nfa_states
	}

	pub fn transitions(&self) -> &BTreeMap<char, StateId> {
		&self.transitions
	}

	pub fn target(&self, c: char) -> Option<StateId> {
		self.transitions.get(&c).copied()
	}

	pub fn is_accepting(&self) -> bool {
		self.accepting
	}
}

/// Deterministic epsilon-free automaton.
///
/// State `0` is the initial state.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DetAutomaton {
	states: Vec<DetState>,
}

impl DetAutomaton {
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn states(&self) -> &[DetState] {
		&self.states
	}

	pub fn state(&self, q: StateId) -> Option<&DetState> {
		self.states.get(q)
	}

	pub fn initial_state(&self) -> StateId {
		0
	}

	pub fn accepting_states(&self) -> impl Iterator<Item = StateId> + '_ {
		self.states
			.iter()
			.enumerate()
			.filter(|(_, state)| state.accepting)
			.map(|(q, _)| q)
	}

	pub fn accepts(&self, input: &str) -> bool {
		let mut q = self.initial_state();
		for c in input.chars() {
			match self.states[q].target(c) {
				Some(r) => q = r,
				None => return false,
			}
		}

		self.states[q].accepting
	}
}

impl Fragment {
	/// Removes epsilon-transitions and nondeterminism by subset construction.
	///
	/// Deterministic states are numbered in discovery order, exploring labels
	/// in ascending order. The empty set of states is never created: a
	/// missing transition is a rejection.
	pub fn determinize(&self) -> DetAutomaton {
		let initial = self.epsilon_closure(Some(self.entry()));

		let mut ids = HashMap::new();
		let mut states = Vec::new();
		let mut queue = VecDeque::new();

		ids.insert(initial.clone(), 0);
		states.push(self.det_state(initial.clone()));
		queue.push_back(initial);

		while let Some(set) = queue.pop_front() {
			let source = ids[&set];

			for (c, targets) in self.det_transitions_for(&set) {
				let target = match ids.get(&targets) {
					Some(q) => *q,
					None => {
						let q = states.len();
						ids.insert(targets.clone(), q);
						states.push(self.det_state(targets.clone()));
						queue.push_back(targets);
						q
					}
				};

				states[source].transitions.insert(c, target);
			}
		}

		log::debug!(
			"determinized {} states into {} states",
			self.len(),
			states.len()
		);

		DetAutomaton { states }
	}

	fn det_state(&self, nfa_states: BTreeSet<StateId>) -> DetState {
		DetState {
			accepting: self.is_accepting_set(&nfa_states),
			nfa_states,
			transitions: BTreeMap::new(),
		}
	}

	/// Epsilon-closed destinations of `states`, for each non-epsilon label.
	fn det_transitions_for(&self, states: &BTreeSet<StateId>) -> BTreeMap<char, BTreeSet<StateId>> {
		let mut map: BTreeMap<char, BTreeSet<StateId>> = BTreeMap::new();

		for q in states {
			for (label, targets) in self.successors(*q) {
				if let Some(c) = label {
					map.entry(*c)
						.or_insert_with(BTreeSet::new)
						.extend(self.epsilon_closure(targets.iter().copied()));
				}
			}
		}

		map
	}
}
