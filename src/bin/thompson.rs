#[macro_use]
extern crate clap;

use source_span::Loc;
use std::{
	fs::File,
	io::{self, BufReader, Write},
	path::Path,
	process,
};
use yansi::Paint;

use thompson::{compile, out, syntax, Config, Input, Notation, Table};

fn config_from(matches: &clap::ArgMatches) -> Result<Config, String> {
	let mut config = Config::default();

	if matches.is_present("postfix") {
		config.notation = Notation::Postfix
	}

	if let Some(value) = matches.value_of("epsilon") {
		let mut chars = value.chars();
		match (chars.next(), chars.next()) {
			(Some(c), None) => config.epsilon = c,
			_ => {
				return Err(format!(
					"invalid epsilon marker `{}`, expected a single character",
					value
				))
			}
		}
	}

	Ok(config)
}

fn main() -> io::Result<()> {
	// Parse options.
	let yaml = load_yaml!("thompson.yml");
	let matches = clap::App::from_yaml(yaml).get_matches();

	// Init logger.
	let verbosity = matches.occurrences_of("verbose") as usize;
	if let Err(e) = stderrlog::new().verbosity(verbosity).init() {
		eprintln!("unable to initialize the logger: {}", e);
		process::exit(1)
	}

	let config = match config_from(&matches) {
		Ok(config) => config,
		Err(message) => {
			eprintln!("{}{} {}", out::Type::Error, Paint::new(':').bold(), message);
			process::exit(1)
		}
	};

	let filename = matches.value_of("FILE").unwrap();
	let input = Input::read(BufReader::new(File::open(filename)?))?;
	let alphabet = input.alphabet();

	log::info!("parsing expression...");
	let postfix = match syntax::parse(&input.expression, &config) {
		Ok(postfix) => postfix,
		Err(e) => {
			report(filename, &input.expression, thompson::Error::located(e));
			process::exit(1)
		}
	};
	log::info!("postfix form: {}", postfix);

	log::info!("building automaton...");
	let fragment = match compile::compile(&postfix) {
		Ok(fragment) => fragment,
		Err(e) => {
			report(filename, &input.expression, thompson::Error::located(e));
			process::exit(1)
		}
	};

	log::info!("tabulating...");
	let table = if matches.is_present("determinize") {
		log::info!("determinizing...");
		Table::new(&fragment.determinize(), &alphabet)
	} else {
		Table::new(&fragment, &alphabet)
	};

	if table.collapsed() > 0 {
		eprintln!(
			"{}{} {} transition(s) could not be represented in the table, see `--determinize`",
			out::Type::Warning,
			Paint::new(':').bold(),
			table.collapsed()
		)
	}

	let mut output = match matches.value_of("output") {
		Some(path) => Output::file(path, true)?,
		None => Output::std()?,
	};

	write_table(&mut output, &table)
}

fn write_table(output: &mut Output, table: &Table) -> io::Result<()> {
	write!(output.lock(), "{}", table)?;
	output.lock().flush()
}

/// Prints the given error with an excerpt of the expression.
fn report(filename: &str, expression: &str, e: Loc<thompson::Error>) {
	let mut block = out::Block::from_error(&e);
	block.set_source(filename);
	eprintln!("{}", block.render(expression))
}

pub enum Output {
	Std(std::io::Stdout),
	File(std::fs::File),
}

impl Output {
	fn std() -> io::Result<Self> {
		Ok(Self::Std(std::io::stdout()))
	}

	fn file<P: AsRef<Path>>(path: P, create_parents: bool) -> io::Result<Self> {
		if create_parents {
			if let Some(parent) = path.as_ref().parent() {
				std::fs::create_dir_all(parent)?
			}
		}

		Ok(Self::File(File::create(path)?))
	}

	fn lock(&mut self) -> LockedOutput {
		match self {
			Output::Std(stdout) => LockedOutput::Std(stdout.lock()),
			Output::File(ref mut file) => LockedOutput::File(file),
		}
	}
}

pub enum LockedOutput<'a> {
	Std(std::io::StdoutLock<'a>),
	File(&'a mut std::fs::File),
}

impl<'a> io::Write for LockedOutput<'a> {
	fn write(&mut self, data: &[u8]) -> io::Result<usize> {
		match self {
			Self::Std(o) => o.write(data),
			Self::File(o) => o.write(data),
		}
	}

	fn flush(&mut self) -> io::Result<()> {
		match self {
			Self::Std(o) => o.flush(),
			Self::File(o) => o.flush(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	#[test]
	fn table_is_written_to_the_output_file() {
		let mut path = std::env::temp_dir();
		path.push(format!("thompson-{}", process::id()));
		path.push("report.txt");

		let input = match Input::read("a+b\r\nab\r\n".as_bytes()) {
			Ok(input) => input,
			Err(e) => panic!("{}", e),
		};
		let table = match thompson::compile(&input.expression, &Config::default()) {
			Ok(fragment) => Table::new(&fragment, &input.alphabet()),
			Err(e) => panic!("{}", e),
		};

		let mut output = match Output::file(&path, true) {
			Ok(output) => output,
			Err(e) => panic!("{}", e),
		};
		if let Err(e) = write_table(&mut output, &table) {
			panic!("{}", e)
		}

		match fs::read_to_string(&path) {
			Ok(content) => assert_eq!(content, table.to_string()),
			Err(e) => panic!("{}", e),
		}

		if let Some(dir) = path.parent() {
			let _ = fs::remove_dir_all(dir);
		}
	}
}
