use thompson::{compile, syntax, Alphabet, Config, Error, Notation, Table};

fn postfix_config() -> Config {
	Config {
		notation: Notation::Postfix,
		..Config::default()
	}
}

fn table(expression: &str, alphabet: &str, config: &Config) -> Table {
	match thompson::compile(expression, config) {
		Ok(fragment) => Table::new(&fragment, &Alphabet::from(alphabet)),
		Err(e) => panic!("unable to compile `{}`: {}", expression, e),
	}
}

#[test]
fn concatenation_with_star_report() {
	let expected = "\
state  a   b
0      1   -1
1      -1  -1
2      -1  -1
3      -1  4
4      -1  -1
5      -1  -1
accepting states: 5
";

	assert_eq!(table("ab*.", "ab", &postfix_config()).to_string(), expected);
	assert_eq!(table("a.b*", "ab", &Config::default()).to_string(), expected);
}

#[test]
fn star_of_union() {
	let t = table("(a+b)*", "ab", &Config::default());
	assert_eq!(t.rows().len(), 8);
	assert_eq!(t.get(2, 'a'), Some(3));
	assert_eq!(t.get(4, 'b'), Some(5));
	assert_eq!(t.accepting(), &[7]);
	assert_eq!(t.collapsed(), 0);
}

#[test]
fn postfix_form_is_printed_with_the_epsilon_marker() {
	match syntax::parse("a(E+b)", &Config::default()) {
		Ok(postfix) => assert_eq!(postfix.to_string(), "aEb+."),
		Err(e) => panic!("{}", e),
	}
}

#[test]
fn determinized_report() {
	let fragment = match thompson::compile("a.b*", &Config::default()) {
		Ok(fragment) => fragment,
		Err(e) => panic!("{}", e),
	};
	let t = Table::new(&fragment.determinize(), &Alphabet::from("ab"));

	let expected = "\
state  a   b
0      1   -1
1      -1  2
2      -1  2
accepting states: 1, 2
";
	assert_eq!(t.to_string(), expected);
}

#[test]
fn malformed_postfix_expressions() {
	let config = postfix_config();
	for (input, column) in &[("*", 0), ("a.", 1), ("ab", 1), ("", 0)] {
		match thompson::compile(input, &config) {
			Ok(_) => panic!("`{}` should not compile", input),
			Err(e) => {
				assert!(matches!(e.as_ref(), Error::Compile(_)), "`{}`: {}", input, e);
				assert_eq!(e.span().start().column, *column, "`{}`", input)
			}
		}
	}
}

#[test]
fn specific_compile_errors() {
	let config = postfix_config();

	match thompson::compile("a*+", &config) {
		Err(e) => assert!(matches!(
			e.as_ref(),
			Error::Compile(compile::Error::MissingOperand(syntax::Operator::Union))
		)),
		Ok(_) => panic!("expected an error"),
	}

	match thompson::compile("abc.", &config) {
		Err(e) => assert!(matches!(e.as_ref(), Error::Compile(compile::Error::DanglingOperand(2)))),
		Ok(_) => panic!("expected an error"),
	}

	match thompson::compile("  ", &config) {
		Err(e) => assert!(matches!(e.as_ref(), Error::Compile(compile::Error::Empty))),
		Ok(_) => panic!("expected an error"),
	}
}

#[test]
fn malformed_infix_expressions() {
	let config = Config::default();

	match thompson::compile("a)", &config) {
		Err(e) => assert!(matches!(e.as_ref(), Error::Syntax(syntax::Error::UnexpectedCloser))),
		Ok(_) => panic!("expected an error"),
	}

	match thompson::compile("((a)", &config) {
		Err(e) => assert!(matches!(e.as_ref(), Error::Syntax(syntax::Error::MissingCloser))),
		Ok(_) => panic!("expected an error"),
	}

	match thompson::compile("(ab.)", &postfix_config()) {
		Err(e) => assert!(matches!(e.as_ref(), Error::Syntax(syntax::Error::UnexpectedChar('(')))),
		Ok(_) => panic!("expected an error"),
	}
}

#[test]
fn custom_epsilon_marker() {
	let config = Config {
		epsilon: '#',
		..Config::default()
	};

	// `E` is an ordinary symbol here.
	let t = table("E", "E", &config);
	assert_eq!(t.get(0, 'E'), Some(1));

	let t = table("#", "E#", &config);
	assert!(t.rows().iter().flatten().all(Option::is_none));
	assert_eq!(t.accepting(), &[1]);
}
