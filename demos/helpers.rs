//! Reusable `StackErr` helpers.
//!
//! A helper carries shared arguments that are rendered after the location of
//! every annotation it makes. `copy` gives a sibling helper with the same
//! style and new shared arguments; the original is never modified.

use stackerr::{
    Style,
    caller::{CallerName, install_default_namer},
    prelude::*,
};

#[derive(Debug, thiserror::Error)]
#[error("connection to {host}:{port} refused")]
struct ConnectionRefused {
    host: String,
    port: u16,
}

fn dial(host: &str, port: u16) -> Result<(), ConnectionRefused> {
    Err(ConnectionRefused {
        host: host.to_owned(),
        port,
    })
}

fn connect(helper: &StackErr, host: &str, port: u16) -> Result<(), StackError> {
    dial(host, port).map_err(|err| handle!(helper => err, "dial", port.to_string()))
}

fn main() {
    println!("=== Reusable Helpers ===\n");

    // `StackErr::handle` and `ResultExt` name the caller through the default
    // namer; `stackerr-backtrace` provides one that walks the stack.
    install_default_namer(CallerName("helpers::main")).expect("no namer installed yet");

    let db = StackErr::new(&["db.local"]);
    if let Err(err) = connect(&db, "db.local", 5432) {
        println!("{err}");
    }

    let cache = db.copy(&["cache.local"]);
    if let Err(err) = connect(&cache, "cache.local", 6379) {
        println!("{err}");
    }
    println!("original helper still reports {:?}\n", db.arguments());

    println!("Custom style");
    let styled = StackErr::with_style(Style::new(" <- ", "'"), &["tenant-7"]);
    if let Err(err) = connect(&styled, "db.local", 5432) {
        println!("{err}");
    }

    let mut tweaked = StackErr::new(&["batch"]).with_namer(CallerName("jobs::nightly"));
    tweaked.separator = String::from(" => ");
    println!("{}", tweaked.handle("deadline exceeded", "poll", &["3"]));

    println!("\nResult extension");
    let result: Result<(), ConnectionRefused> = dial("queue.local", 5672);
    if let Err(err) = result.stack_err(&db, "publish", &["orders"]) {
        println!("{err}");
    }
}
