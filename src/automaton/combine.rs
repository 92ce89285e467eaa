//! Thompson construction combinators.
//!
//! Each combinator takes ownership of its operands and returns a new
//! fragment whose states are renumbered so that the entry state is `0` and
//! the unique accepting state is the last one.
use super::{Fragment, Label, State};

/// Two-state fragment recognizing `symbol`.
///
/// The epsilon label (`None`) adds no transition at all: the exit state is
/// then unreachable.
pub fn literal(symbol: Label) -> Fragment {
	let mut fragment = Fragment {
		states: vec![State::new(false), State::new(true)],
	};

	if symbol.is_some() {
		fragment.add(0, symbol, 1)
	}

	fragment
}

/// Fragment recognizing the words of `a` followed by the words of `b`.
pub fn concatenate(a: Fragment, b: Fragment) -> Fragment {
	let mut result = a;
	let a_exit = result.exit();
	result.set_accepting(a_exit, false);

	let b_entry = result.absorb(b);
	result.add(a_exit, None, b_entry);

	result
}

/// Fragment recognizing the words of `a` or the words of `b`.
pub fn union(a: Fragment, b: Fragment) -> Fragment {
	let mut result = Fragment {
		states: vec![State::new(false)],
	};

	let a_entry = result.absorb(a);
	let a_exit = result.exit();
	let b_entry = result.absorb(b);
	let b_exit = result.exit();

	result.states.push(State::new(true));
	let exit = result.exit();

	result.add(0, None, a_entry);
	result.add(0, None, b_entry);

	result.set_accepting(a_exit, false);
	result.set_accepting(b_exit, false);
	result.add(a_exit, None, exit);
	result.add(b_exit, None, exit);

	result
}

/// Fragment recognizing any number of repetitions of the words of `a`.
pub fn star(a: Fragment) -> Fragment {
	let mut result = Fragment {
		states: vec![State::new(false)],
	};

	let a_entry = result.absorb(a);
	let a_exit = result.exit();

	result.states.push(State::new(true));
	let exit = result.exit();

	result.set_accepting(a_exit, false);
	result.add(0, None, a_entry);
	result.add(0, None, exit);
	result.add(a_exit, None, exit);
	result.add(a_exit, None, a_entry);

	result
}
