use proc_macro2::TokenStream;
use quote::quote;
use std::{
	env,
	fs::{self, File},
	io::{self, BufReader, Read, Write},
	path::{Path, PathBuf},
};

#[derive(Debug)]
pub enum Error {
	IO(io::Error),
	Toml(toml::de::Error),
	Data(String, DataError),
	NoOutDir,
}

impl From<io::Error> for Error {
	fn from(e: io::Error) -> Self {
		Self::IO(e)
	}
}

impl From<toml::de::Error> for Error {
	fn from(e: toml::de::Error) -> Self {
		Self::Toml(e)
	}
}

#[derive(Debug)]
pub enum DataError {
	DocumentNotATable,
	ExpressionNotString,
	NoExpression,
	AlphabetNotString,
	InvalidNotation,
	StatesNotInteger,
	AcceptingNotArray,
	ChallengeNotArray,
	ChallengeNotTable,
	ChallengeNoName,
	NameNotString,
	InvalidName(String),
	ChallengeNoInput,
	InputNotString,
	ChallengeNoResult,
	AcceptNotBoolean,
}

fn main() -> Result<(), Error> {
	println!("cargo:rerun-if-changed=tests");

	let out_dir = PathBuf::from(env::var_os("OUT_DIR").ok_or(Error::NoOutDir)?);
	let mut modules = Vec::new();

	foreach_toml_file("tests", |path| {
		let stem = path.file_stem().unwrap().to_string_lossy().to_string();
		let mut output = out_dir.clone();
		output.push(&stem);
		output.set_extension("rs");

		let contents = read_file(&path)?;
		let toml: toml::Value = contents.parse()?;
		let test = Test::from_toml(toml).map_err(|e| Error::Data(stem.clone(), e))?;
		write_file(output, format!("{}", test.generate()))?;

		modules.push(stem);
		Ok(())
	})?;

	modules.sort();
	let index = modules.iter().map(|stem| {
		let id = quote::format_ident!("{}", stem);
		let filename = format!("/{}.rs", stem);
		quote! {
			mod #id {
				include!(concat!(env!("OUT_DIR"), #filename));
			}
		}
	});

	let mut index_path = out_dir;
	index_path.push("challenges.rs");
	write_file(index_path, format!("{}", quote! { #(#index)* }))?;

	Ok(())
}

fn foreach_toml_file<P: AsRef<Path>, F>(dir: P, mut f: F) -> Result<(), Error>
where
	F: FnMut(PathBuf) -> Result<(), Error>,
{
	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();
		if path.is_file() {
			if let Some(ext) = path.extension() {
				if ext == "toml" {
					f(path)?
				}
			}
		}
	}

	Ok(())
}

fn read_file<P: AsRef<Path>>(path: P) -> io::Result<String> {
	let file = fs::File::open(path)?;
	let mut buf_reader = BufReader::new(file);
	let mut contents = String::new();
	buf_reader.read_to_string(&mut contents)?;
	Ok(contents)
}

fn write_file<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> io::Result<()> {
	let mut file = File::create(path)?;
	file.write_all(contents.as_ref())
}

/// Expression notation.
pub enum Notation {
	Infix,
	Postfix,
}

/// Test description.
pub struct Test {
	/// Compiled expression.
	expression: String,

	/// Alphabet used to check the accepting states in the table.
	alphabet: String,

	notation: Notation,

	/// Expected number of states.
	states: Option<usize>,

	/// Expected accepting states.
	accepting: Option<Vec<usize>>,

	/// Challenges.
	challenges: Vec<Challenge>,
}

impl Test {
	fn from_toml(toml: toml::Value) -> Result<Self, DataError> {
		let table = toml.as_table().ok_or(DataError::DocumentNotATable)?;
		let expression = table
			.get("expression")
			.ok_or(DataError::NoExpression)?
			.as_str()
			.ok_or(DataError::ExpressionNotString)?;
		let alphabet = table
			.get("alphabet")
			.map(|a| a.as_str().ok_or(DataError::AlphabetNotString))
			.transpose()?
			.unwrap_or("");
		let notation = match table.get("notation").map(|n| n.as_str()) {
			None | Some(Some("infix")) => Notation::Infix,
			Some(Some("postfix")) => Notation::Postfix,
			_ => return Err(DataError::InvalidNotation),
		};
		let states = table
			.get("states")
			.map(|n| n.as_integer().ok_or(DataError::StatesNotInteger))
			.transpose()?
			.map(|n| n as usize);
		let accepting = table
			.get("accepting")
			.map(|a| {
				let values = a.as_array().ok_or(DataError::AcceptingNotArray)?;
				values
					.iter()
					.map(|q| q.as_integer().map(|q| q as usize).ok_or(DataError::AcceptingNotArray))
					.collect::<Result<Vec<_>, _>>()
			})
			.transpose()?;

		let mut challenges = Vec::new();
		if let Some(value) = table.get("challenge") {
			let values = value.as_array().ok_or(DataError::ChallengeNotArray)?;
			for challenge in values {
				challenges.push(Challenge::from_toml(challenge)?)
			}
		}

		Ok(Self {
			expression: expression.to_string(),
			alphabet: alphabet.to_string(),
			notation,
			states,
			accepting,
			challenges,
		})
	}

	fn generate(&self) -> TokenStream {
		let expression = &self.expression;
		let alphabet = &self.alphabet;
		let notation = match self.notation {
			Notation::Infix => quote! { thompson::Notation::Infix },
			Notation::Postfix => quote! { thompson::Notation::Postfix },
		};

		let states = self.states.map(|n| {
			quote! {
				#[test]
				fn state_count() {
					assert_eq!(AUTOMATON.len(), #n);
				}
			}
		});

		let accepting = self.accepting.as_ref().map(|accepting| {
			quote! {
				#[test]
				fn accepting_states() {
					let table = thompson::Table::new(&*AUTOMATON, &thompson::Alphabet::from(#alphabet));
					let expected: &[usize] = &[#(#accepting),*];
					assert_eq!(table.accepting(), expected);
				}
			}
		});

		let challenges = self.challenges.iter().map(|c| c.generate());

		quote! {
			lazy_static::lazy_static! {
				static ref AUTOMATON: thompson::Fragment = {
					let config = thompson::Config {
						notation: #notation,
						..thompson::Config::default()
					};

					match thompson::compile(#expression, &config) {
						Ok(fragment) => fragment,
						Err(e) => panic!("unable to compile `{}`: {}", #expression, e)
					}
				};

				static ref DETERMINIZED: thompson::DetAutomaton = AUTOMATON.determinize();
			}

			#[test]
			fn tabulation_is_stable() {
				let alphabet = thompson::Alphabet::from(#alphabet);
				let table = thompson::Table::new(&*AUTOMATON, &alphabet);
				assert_eq!(table, thompson::Table::new(&*AUTOMATON, &alphabet));
				assert_eq!(table.rows().len(), AUTOMATON.len());
			}

			#states
			#accepting
			#(#challenges)*
		}
	}
}

/// Test challenge.
pub struct Challenge {
	/// Challenge name.
	///
	/// The generated test is `challenge_<name>`, so that names may be Rust
	/// keywords or collide with the other generated tests.
	name: String,

	/// Input word.
	input: String,

	/// Is the word recognized.
	accept: bool,
}

impl Challenge {
	fn from_toml(toml: &toml::Value) -> Result<Self, DataError> {
		let table = toml.as_table().ok_or(DataError::ChallengeNotTable)?;
		let name = table
			.get("name")
			.ok_or(DataError::ChallengeNoName)?
			.as_str()
			.ok_or(DataError::NameNotString)?;
		if !is_identifier(name) {
			return Err(DataError::InvalidName(name.to_string()));
		}

		let input = table
			.get("input")
			.ok_or(DataError::ChallengeNoInput)?
			.as_str()
			.ok_or(DataError::InputNotString)?;
		let accept = table
			.get("accept")
			.ok_or(DataError::ChallengeNoResult)?
			.as_bool()
			.ok_or(DataError::AcceptNotBoolean)?;

		Ok(Self {
			name: name.to_string(),
			input: input.to_string(),
			accept,
		})
	}

	fn generate(&self) -> TokenStream {
		let id = quote::format_ident!("challenge_{}", self.name);
		let input = &self.input;
		let accept = self.accept;

		quote! {
			#[test]
			fn #id() {
				assert_eq!(AUTOMATON.accepts(#input), #accept, "nfa on {:?}", #input);
				assert_eq!(DETERMINIZED.accepts(#input), #accept, "dfa on {:?}", #input);
			}
		}
	}
}

fn is_identifier(name: &str) -> bool {
	!name.is_empty() && name.chars().all(|c| c == '_' || c.is_ascii_alphanumeric())
}
