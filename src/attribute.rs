use std::fmt;

use crate::{Kwargs, Target};

/// A read-only view returned by [`Curried::attribute`](crate::Curried::attribute).
pub enum Attribute<'a, V, R> {
    Func(&'a Target<V, R>),
    Args(&'a [V]),
    /// Owned copy; changing it has no effect on the curried call.
    Kwargs(Kwargs<V>),
}

impl<'a, V, R> Attribute<'a, V, R> {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Func(_) => "func",
            Self::Args(_) => "args",
            Self::Kwargs(_) => "kwargs",
        }
    }

    pub fn into_func(self) -> Option<&'a Target<V, R>> {
        match self {
            Self::Func(func) => Some(func),
            _ => None,
        }
    }

    pub fn into_args(self) -> Option<&'a [V]> {
        match self {
            Self::Args(args) => Some(args),
            _ => None,
        }
    }

    pub fn into_kwargs(self) -> Option<Kwargs<V>> {
        match self {
            Self::Kwargs(kwargs) => Some(kwargs),
            _ => None,
        }
    }
}

impl<V: fmt::Debug, R> fmt::Debug for Attribute<'_, V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Func(_) => f.write_str("Func(..)"),
            Self::Args(args) => f.debug_tuple("Args").field(args).finish(),
            Self::Kwargs(kwargs) => f.debug_tuple("Kwargs").field(kwargs).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{args, Arguments, Curry, CurryError};

    fn count(arguments: Arguments<u8>) -> usize {
        arguments.len()
    }

    #[test]
    fn lookup_by_name() {
        let factory = Curry::new(count);
        let curried = factory
            .call(args![1, 2, k = 3])
            .expect("call")
            .into_partial()
            .expect("partial");

        let func = curried.attribute("func").expect("func").into_func().expect("func");
        assert!(Arc::ptr_eq(func, factory.func()));

        let args = curried.attribute("args").expect("args");
        assert_eq!(args.name(), "args");
        assert_eq!(args.into_args(), Some(&[1u8, 2][..]));

        let mut kwargs = curried
            .attribute("kwargs")
            .expect("kwargs")
            .into_kwargs()
            .expect("kwargs");
        kwargs.insert("extra".to_owned(), 9);
        assert_eq!(curried.len(), 3);
        assert_eq!(curried.invoke(), 3);
    }

    #[test]
    fn unknown_name() {
        let curried = Curry::new(count).start();
        assert_eq!(
            curried.attribute("name").map(|attribute| attribute.name()),
            Err(CurryError::UnknownAttribute {
                name: "name".to_owned()
            })
        );
    }
}
