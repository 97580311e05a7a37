use alloc::string::String;

/// Renders a list of arguments as a parenthesized, comma-separated fragment.
///
/// Every argument is wrapped in `punctuation`. An empty list renders as an
/// empty string, so no parentheses appear at all.
///
/// Arguments are concatenated verbatim: punctuation that occurs inside an
/// argument is not escaped.
///
/// # Examples
///
/// ```
/// use stackerr::render_arguments;
///
/// assert_eq!(render_arguments(&["a", "b"], "\""), r#"("a", "b")"#);
/// assert_eq!(render_arguments(&["it's"], "'"), "('it's')");
/// assert_eq!(render_arguments::<&str>(&[], "\""), "");
/// ```
#[must_use]
pub fn render_arguments<S: AsRef<str>>(args: &[S], punctuation: &str) -> String {
    if args.is_empty() {
        return String::new();
    }

    let capacity = args
        .iter()
        .map(|arg| arg.as_ref().len() + 2 * punctuation.len() + 2)
        .sum::<usize>();
    let mut rendered = String::with_capacity(capacity);

    rendered.push('(');
    for (index, arg) in args.iter().enumerate() {
        if index > 0 {
            rendered.push_str(", ");
        }
        rendered.push_str(punctuation);
        rendered.push_str(arg.as_ref());
        rendered.push_str(punctuation);
    }
    rendered.push(')');

    rendered
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec, vec::Vec};

    use super::*;

    #[test]
    fn test_empty_renders_nothing() {
        assert_eq!(render_arguments::<&str>(&[], "\""), "");
        assert_eq!(render_arguments(&Vec::<String>::new(), "foo"), "");
    }

    #[test]
    fn test_single_argument() {
        assert_eq!(render_arguments(&["42"], "\""), "(\"42\")");
    }

    #[test]
    fn test_many_arguments() {
        let args = vec!["some".to_string(), "arguments".to_string(), "here".to_string()];
        assert_eq!(
            render_arguments(&args, "\""),
            "(\"some\", \"arguments\", \"here\")"
        );
    }

    #[test]
    fn test_custom_and_empty_punctuation() {
        assert_eq!(render_arguments(&["a", "b"], "`"), "(`a`, `b`)");
        assert_eq!(render_arguments(&["a", "b"], ""), "(a, b)");
        assert_eq!(render_arguments(&["a"], "<>"), "(<>a<>)");
    }

    #[test]
    fn test_punctuation_inside_argument_is_not_escaped() {
        assert_eq!(
            render_arguments(&["say \"hi\""], "\""),
            "(\"say \"hi\"\")"
        );
    }

    #[test]
    fn test_empty_argument_values_are_kept() {
        assert_eq!(render_arguments(&["", ""], "\""), "(\"\", \"\")");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let args = ["x", "y", "z"];
        assert_eq!(render_arguments(&args, "'"), render_arguments(&args, "'"));
    }
}
