use stackerr::{ResultExt, StackErr, StackError, caller::CallerNamer};
use stackerr_backtrace::BacktraceNamer;

#[derive(Debug, thiserror::Error)]
#[error("connection refused")]
struct ConnectionRefused;

fn helper(arguments: &[&str]) -> StackErr {
    StackErr::new(arguments).with_namer(BacktraceNamer::DEFAULT)
}

#[inline(never)]
fn connect(host: &str) -> Result<(), StackError> {
    let helper = helper(&[host]);
    Err(helper.handle(ConnectionRefused, "dial", &["443"]))
}

// The connect_* functions differ in their annotations so that optimized
// builds cannot fold them into one symbol.
#[inline(never)]
fn connect_with_closure(host: &str) -> Result<(), StackError> {
    let helper = helper(&[host]);
    Err::<(), _>(ConnectionRefused).map_err(|err| helper.handle(err, "dial", &["tcp"]))
}

#[inline(never)]
fn connect_with_result_ext(host: &str) -> Result<(), StackError> {
    let helper = helper(&[host]);
    Err::<(), _>(ConnectionRefused).stack_err(&helper, "handshake", &[])
}

#[inline(never)]
fn copied_helper(parent: &StackErr) -> StackError {
    parent.copy(&["child"]).handle("boom", "step", &[])
}

#[test]
fn test_reports_function_calling_handle() {
    let err = connect("db.local").unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"caller_lookup::connect("443").dial("db.local"): connection refused"#
    );
    assert!(err.find_source::<ConnectionRefused>().is_some());
}

#[test]
fn test_closures_report_enclosing_function() {
    let err = connect_with_closure("db.local").unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"caller_lookup::connect_with_closure("tcp").dial("db.local"): connection refused"#
    );
}

#[test]
fn test_result_ext_frames_are_skipped() {
    let err = connect_with_result_ext("db.local").unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"caller_lookup::connect_with_result_ext.handshake("db.local"): connection refused"#
    );
}

#[test]
fn test_copies_keep_the_namer() {
    let parent = helper(&["parent"]);
    let err = copied_helper(&parent);
    assert_eq!(err.to_string(), r#"caller_lookup::copied_helper.step("child"): boom"#);
}

#[test]
fn test_without_skipped_prefixes_the_walker_itself_is_reported() {
    let namer = BacktraceNamer {
        skipped_prefixes: &[],
    };
    let name = namer.caller_name().expect("the current stack has symbols");
    assert!(name.starts_with("backtrace::"), "unexpected caller: {name}");
}
