use crate::{
    error::{BoxError, StackError},
    stack_err::StackErr,
};

mod sealed {
    pub trait Sealed {}
    impl<T, E> Sealed for Result<T, E> {}
}

/// Extension methods for annotating the error of a [`Result`].
///
/// The caller is resolved the same way as by [`StackErr::handle`] and
/// [`handle`](crate::handle()); use the [`handle!`](crate::handle!) macro in
/// a `map_err` when the exact function name matters.
///
/// ```
/// use stackerr::{StackErr, caller::CallerName, prelude::*};
///
/// let helper = StackErr::new(&["cfg.toml"]).with_namer(CallerName("app::load"));
/// let result: Result<(), &str> = Err("permission denied");
///
/// let err = result.stack_err(&helper, "open", &[]).unwrap_err();
/// assert_eq!(err.to_string(), r#"app::load.open("cfg.toml"): permission denied"#);
/// ```
pub trait ResultExt<T, E>: sealed::Sealed {
    /// Annotates the error, if any, through `helper`.
    fn stack_err(self, helper: &StackErr, location: &str, arguments: &[&str]) -> Result<T, StackError>
    where
        E: Into<BoxError>;

    /// Annotates the error, if any, like the free [`handle`](crate::handle())
    /// function.
    fn handle(self, location: &str, arguments: &[&str]) -> Result<T, StackError>
    where
        E: Into<BoxError>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn stack_err(self, helper: &StackErr, location: &str, arguments: &[&str]) -> Result<T, StackError>
    where
        E: Into<BoxError>,
    {
        self.map_err(|err| helper.handle(err, location, arguments))
    }

    fn handle(self, location: &str, arguments: &[&str]) -> Result<T, StackError>
    where
        E: Into<BoxError>,
    {
        self.map_err(|err| crate::handle(err, location, arguments))
    }
}
