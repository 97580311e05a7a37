//! Basic introduction to stackerr annotations.
//!
//! This example demonstrates:
//! 1. Annotating an error with `handle!`
//! 2. Adding the arguments of the failing call
//! 3. Building a chain of annotations through function calls
//! 4. Walking the chain back to the root cause

use std::fs;

use stackerr::prelude::*;

/// The annotation records this function, the failing step and the path.
fn read_config_file(path: &str) -> Result<String, StackError> {
    fs::read_to_string(path).map_err(|err| handle!(err, "read", path))
}

/// Each layer adds its own annotation in front of the previous one.
fn load_user_config() -> Result<String, StackError> {
    read_config_file("/nonexistent/config.toml").map_err(|err| handle!(err, "load"))
}

fn parse_port(input: &str) -> Result<u16, StackError> {
    input.parse().map_err(|err| handle!(err, "atoi", input))
}

fn main() {
    println!("=== Basic Annotations ===\n");

    println!("Example 1: A single annotation");
    if let Err(err) = parse_port("http") {
        println!("{err}");
    }
    println!();

    println!("Example 2: A chain of annotations");
    println!("(Shows: load_user_config → read_config_file → io::Error)\n");
    if let Err(err) = load_user_config() {
        println!("{err}\n");

        for (depth, cause) in err.chain().enumerate() {
            println!("{depth}: {cause}");
        }
        println!("\nroot cause: {}", err.root_cause());
    }
}
