use std::fmt;

use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Keyword arguments, kept in the order they were first supplied.
pub type Kwargs<V> = IndexMap<String, V>;

/// A batch of positional and keyword arguments.
///
/// This is both the unit of accumulation passed to a curried call and the
/// calling convention of the wrapped target function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "V: Serialize",
    deserialize = "V: Deserialize<'de>"
))]
pub struct Arguments<V> {
    #[serde(default)]
    args: Vec<V>,
    #[serde(default)]
    kwargs: Kwargs<V>,
}

impl<V> Arguments<V> {
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            kwargs: IndexMap::new(),
        }
    }

    pub fn from_parts(args: Vec<V>, kwargs: Kwargs<V>) -> Self {
        Self { args, kwargs }
    }

    #[must_use]
    pub fn arg(mut self, value: V) -> Self {
        self.push_arg(value);
        self
    }

    #[must_use]
    pub fn kwarg(mut self, name: impl Into<String>, value: V) -> Self {
        self.push_kwarg(name, value);
        self
    }

    pub fn push_arg(&mut self, value: V) {
        self.args.push(value);
    }

    /// Adds a keyword argument, replacing any earlier value under the same name.
    pub fn push_kwarg(&mut self, name: impl Into<String>, value: V) {
        self.kwargs.insert(name.into(), value);
    }

    pub fn args(&self) -> &[V] {
        &self.args
    }

    pub fn kwargs(&self) -> &Kwargs<V> {
        &self.kwargs
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.kwargs.get(name)
    }

    /// Total number of positional and keyword arguments.
    pub fn len(&self) -> usize {
        self.args.len() + self.kwargs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty() && self.kwargs.is_empty()
    }

    pub fn into_parts(self) -> (Vec<V>, Kwargs<V>) {
        (self.args, self.kwargs)
    }
}

impl<V> Default for Arguments<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<Vec<V>> for Arguments<V> {
    fn from(args: Vec<V>) -> Self {
        Self {
            args,
            kwargs: IndexMap::new(),
        }
    }
}

impl<V> FromIterator<V> for Arguments<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<V: fmt::Display> fmt::Display for Arguments<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_call(f, &self.args, &self.kwargs)
    }
}

/// Writes `(a, b, key=value)`.
pub(crate) fn write_call<V: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    args: &[V],
    kwargs: &Kwargs<V>,
) -> fmt::Result {
    let positional = args.iter().map(|value| value.to_string());
    let keyword = kwargs.iter().map(|(name, value)| format!("{name}={value}"));
    write!(f, "({})", positional.chain(keyword).format(", "))
}

/// Builds [`Arguments`] from positional expressions and `name = value` pairs.
///
/// ```
/// use curried::args;
///
/// let arguments = args![1, 2, scale = 10];
/// assert_eq!(arguments.args(), &[1, 2]);
/// assert_eq!(arguments.get("scale"), Some(&10));
/// ```
#[macro_export]
macro_rules! args {
    (@push $arguments:ident;) => {};
    (@push $arguments:ident; $name:ident = $value:expr $(, $($rest:tt)*)?) => {
        $arguments.push_kwarg(stringify!($name), $value);
        $crate::args!(@push $arguments; $($($rest)*)?);
    };
    (@push $arguments:ident; $value:expr $(, $($rest:tt)*)?) => {
        $arguments.push_arg($value);
        $crate::args!(@push $arguments; $($($rest)*)?);
    };
    ($($tokens:tt)*) => {{
        #[allow(unused_mut)]
        let mut arguments = $crate::Arguments::new();
        $crate::args!(@push arguments; $($tokens)*);
        arguments
    }};
}
