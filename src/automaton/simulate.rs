use super::{Fragment, StateId};
use std::collections::BTreeSet;

impl Fragment {
	/// States reachable from `states` through epsilon-transitions only.
	pub fn epsilon_closure<I: IntoIterator<Item = StateId>>(&self, states: I) -> BTreeSet<StateId> {
		let mut closure = BTreeSet::new();
		let mut stack: Vec<StateId> = states.into_iter().collect();

		while let Some(q) = stack.pop() {
			if closure.insert(q) {
				if let Some(epsilon_qs) = self.states.get(q).and_then(|state| state.targets(None)) {
					stack.extend(epsilon_qs.iter().copied())
				}
			}
		}

		closure
	}

	/// States reachable from `states` by reading `c`, before epsilon closure.
	pub fn step(&self, states: &BTreeSet<StateId>, c: char) -> BTreeSet<StateId> {
		states
			.iter()
			.filter_map(|q| self.states.get(*q).and_then(|state| state.targets(Some(c))))
			.flatten()
			.copied()
			.collect()
	}

	pub fn is_accepting_set(&self, states: &BTreeSet<StateId>) -> bool {
		states
			.iter()
			.any(|q| self.states.get(*q).map(|state| state.accepting).unwrap_or(false))
	}

	/// Checks if the automaton recognizes the given word.
	pub fn accepts(&self, input: &str) -> bool {
		let mut current = self.epsilon_closure(Some(self.entry()));

		for c in input.chars() {
			if current.is_empty() {
				return false;
			}

			current = self.epsilon_closure(self.step(&current, c));
		}

		self.is_accepting_set(&current)
	}
}

#[cfg(test)]
mod tests {
	use crate::automaton::{concatenate, literal, star, union};

	#[test]
	fn closure_follows_epsilons_only() {
		let f = star(literal(Some('a')));
		let closure: Vec<_> = f.epsilon_closure(Some(0)).into_iter().collect();
		assert_eq!(closure, vec![0, 1, 3]);
	}

	#[test]
	fn concatenation_language() {
		let f = concatenate(literal(Some('a')), star(literal(Some('b'))));
		for word in &["a", "ab", "abb", "abbb"] {
			assert!(f.accepts(word), "should accept {:?}", word)
		}
		for word in &["", "b", "ba", "aab", "abab"] {
			assert!(!f.accepts(word), "should reject {:?}", word)
		}
	}

	#[test]
	fn union_language() {
		let f = union(literal(Some('a')), literal(Some('b')));
		assert!(f.accepts("a"));
		assert!(f.accepts("b"));
		assert!(!f.accepts(""));
		assert!(!f.accepts("ab"));
	}

	#[test]
	fn star_accepts_empty_word() {
		let f = star(concatenate(literal(Some('a')), literal(Some('b'))));
		assert!(f.accepts(""));
		assert!(f.accepts("ab"));
		assert!(f.accepts("ababab"));
		assert!(!f.accepts("aba"));
		assert!(!f.accepts("ba"));
	}

	#[test]
	fn epsilon_literal_recognizes_nothing() {
		let f = literal(None);
		assert!(!f.accepts(""));
		assert!(!f.accepts("E"));
		assert!(star(literal(None)).accepts(""));
	}
}
