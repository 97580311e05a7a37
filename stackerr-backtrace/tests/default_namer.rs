//! Installs the backtrace namer process-wide. Kept in its own test binary
//! since the default namer is global state.

use stackerr::{StackError, caller::default_namer};
use stackerr_backtrace::BacktraceNamer;

#[inline(never)]
fn parse_port(input: &str) -> Result<u16, StackError> {
    input
        .parse()
        .map_err(|err| stackerr::handle(err, "atoi", &[input]))
}

#[test]
fn test_free_handle_uses_installed_namer() {
    BacktraceNamer::DEFAULT
        .install()
        .expect("no namer should be installed yet");
    assert!(default_namer().is_some());
    assert!(BacktraceNamer::DEFAULT.install().is_err());

    let err = parse_port("x").unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"default_namer::parse_port.atoi("x"): invalid digit found in string"#
    );
    assert!(err.find_source::<std::num::ParseIntError>().is_some());

    assert_eq!(parse_port("8080").ok(), Some(8080));
}
