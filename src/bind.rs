//! Binding of dynamic arguments to a function's named parameters.
//!
//! Targets generated by the [`curry`](macro@crate::curry) attribute receive their arguments as
//! [`Value`]s. A [`Binder`] assigns positional arguments to parameters in
//! declaration order and keyword arguments by name, then deserializes each
//! parameter into its declared type.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::Arguments;

/// Why a set of dynamic arguments does not fit a function's parameter list.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("{function}() takes {expected} positional argument(s) but {given} were given")]
    TooManyPositional {
        function: &'static str,
        expected: usize,
        given: usize,
    },

    #[error("{function}() got an unexpected keyword argument `{name}`")]
    UnexpectedKeyword {
        function: &'static str,
        name: String,
    },

    #[error("{function}() got multiple values for argument `{name}`")]
    MultipleValues {
        function: &'static str,
        name: &'static str,
    },

    #[error("{function}() missing required argument `{name}`")]
    Missing {
        function: &'static str,
        name: &'static str,
    },

    #[error("{function}() argument `{name}` has the wrong type: {source}")]
    InvalidArgument {
        function: &'static str,
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Parameter slots for one invocation.
#[derive(Debug)]
pub struct Binder {
    function: &'static str,
    parameters: &'static [&'static str],
    slots: Vec<Option<Value>>,
}

impl Binder {
    pub fn new(
        function: &'static str,
        parameters: &'static [&'static str],
        arguments: Arguments<Value>,
    ) -> Result<Self, BindError> {
        let (args, kwargs) = arguments.into_parts();

        if args.len() > parameters.len() {
            return Err(BindError::TooManyPositional {
                function,
                expected: parameters.len(),
                given: args.len(),
            });
        }

        let mut slots: Vec<Option<Value>> = args.into_iter().map(Some).collect();
        slots.resize(parameters.len(), None);

        for (name, value) in kwargs {
            let Some(index) = parameters.iter().position(|parameter| *parameter == name) else {
                return Err(BindError::UnexpectedKeyword { function, name });
            };
            if slots[index].is_some() {
                return Err(BindError::MultipleValues {
                    function,
                    name: parameters[index],
                });
            }
            slots[index] = Some(value);
        }

        Ok(Self {
            function,
            parameters,
            slots,
        })
    }

    /// Takes the value bound to parameter `index` as a `T`.
    pub fn take<T: DeserializeOwned>(&mut self, index: usize) -> Result<T, BindError> {
        let name = self.parameters[index];
        let value = self.slots[index].take().ok_or(BindError::Missing {
            function: self.function,
            name,
        })?;
        serde_json::from_value(value).map_err(|source| BindError::InvalidArgument {
            function: self.function,
            name,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::args;

    const PARAMETERS: &[&str] = &["name", "times"];

    fn bind(arguments: Arguments<Value>) -> Result<(String, u32), BindError> {
        let mut binder = Binder::new("repeat", PARAMETERS, arguments)?;
        Ok((binder.take(0)?, binder.take(1)?))
    }

    #[test]
    fn positional_then_keyword() {
        let bound = bind(args![json!("hi"), times = json!(3)]).expect("binds");
        assert_eq!(bound, ("hi".to_owned(), 3));

        let bound = bind(args![times = json!(2), name = json!("yo")]).expect("binds");
        assert_eq!(bound, ("yo".to_owned(), 2));
    }

    #[test]
    fn too_many_positional() {
        let error = bind(args![json!("a"), json!(1), json!(2)]).expect_err("too many");
        assert_eq!(
            error.to_string(),
            "repeat() takes 2 positional argument(s) but 3 were given"
        );
    }

    #[test]
    fn unexpected_keyword() {
        let error = bind(args![json!("a"), count = json!(1)]).expect_err("unknown keyword");
        assert!(matches!(error, BindError::UnexpectedKeyword { ref name, .. } if name == "count"));
    }

    #[test]
    fn multiple_values() {
        let error = bind(args![json!("a"), name = json!("b")]).expect_err("bound twice");
        assert!(matches!(error, BindError::MultipleValues { name: "name", .. }));
    }

    #[test]
    fn missing() {
        let error = bind(args![json!("a")]).expect_err("missing");
        assert_eq!(error.to_string(), "repeat() missing required argument `times`");
    }

    #[test]
    fn wrong_type() {
        let error = bind(args![json!("a"), json!("three")]).expect_err("wrong type");
        assert!(matches!(error, BindError::InvalidArgument { name: "times", .. }));
    }
}
