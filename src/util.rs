use std::fmt;

/// Displays a character, escaping whitespace and control characters.
pub struct DisplayChar(pub char);

impl fmt::Display for DisplayChar {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let c = self.0;
		match c {
			'\\' => write!(f, "\\\\"),
			'\r' => write!(f, "\\r"),
			'\n' => write!(f, "\\n"),
			' ' => write!(f, "\\s"),
			'\t' => write!(f, "\\t"),
			_ if c.is_control() => {
				let d = c as u32;
				if d <= 0xff {
					write!(f, "\\x{:02x}", d)
				} else {
					write!(f, "\\u{:04x}", d)
				}
			}
			_ => c.fmt(f),
		}
	}
}

/// Writes `content` left-aligned in a column of `width` characters.
///
/// `fmt` padding does not apply to nested `Display` implementations, hence
/// the manual padding.
pub fn write_padded<T: fmt::Display>(f: &mut fmt::Formatter, content: T, width: usize) -> fmt::Result {
	let content = content.to_string();
	write!(f, "{}", content)?;
	for _ in content.chars().count()..width {
		write!(f, " ")?
	}

	Ok(())
}
