//! Input files.
use crate::table::Alphabet;
use std::io::{self, Read};
use utf8_decode::UnsafeDecoder;

/// Content of an input file.
///
/// The first line is the expression, the second line the alphabet. Any
/// other line is ignored.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Input {
	pub expression: String,
	pub alphabet: String,
}

impl Input {
	/// Reads the first two lines of `source`.
	///
	/// Carriage returns are dropped. A missing line is read as empty.
	pub fn read<R: Read>(source: R) -> io::Result<Input> {
		let mut lines = Vec::new();
		let mut line = String::new();

		for c in UnsafeDecoder::new(source.bytes()) {
			match c? {
				'\n' => {
					lines.push(std::mem::take(&mut line));
					if lines.len() == 2 {
						break;
					}
				}
				'\r' => (),
				c => line.push(c),
			}
		}

		if lines.len() < 2 && !line.is_empty() {
			lines.push(line)
		}

		let mut lines = lines.into_iter();
		Ok(Input {
			expression: lines.next().unwrap_or_default(),
			alphabet: lines.next().unwrap_or_default(),
		})
	}

	pub fn alphabet(&self) -> Alphabet {
		Alphabet::from(self.alphabet.as_str())
	}
}
