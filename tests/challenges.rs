//! Tests generated by the build script from the `tests/*.toml` files.
include!(concat!(env!("OUT_DIR"), "/challenges.rs"));
