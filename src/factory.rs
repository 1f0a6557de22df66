use std::{fmt, sync::Arc};

use log::{debug, trace};

use crate::{
    arguments::write_call, Arguments, Attribute, CurryError, CurryOptions, Kwargs, MinArgs,
};

/// The wrapped function, shared read-only by a factory and every call derived from it.
pub type Target<V, R> = Arc<dyn Fn(Arguments<V>) -> R + Send + Sync>;

struct Shared<V, R> {
    target: Target<V, R>,
    options: CurryOptions,
}

/// A factory of curried calls over one target function.
///
/// Cloning a factory is cheap and yields a handle to the same configuration.
/// Every constructor, and every builder step, produces an independent factory.
pub struct Curry<V, R> {
    shared: Arc<Shared<V, R>>,
}

/// Shorthand for [`Curry::new`].
pub fn curry<V, R, F>(func: F) -> Curry<V, R>
where
    F: Fn(Arguments<V>) -> R + Send + Sync + 'static,
{
    Curry::new(func)
}

impl<V, R> Curry<V, R> {
    /// Curries `func` with no argument threshold and unique keyword names.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(Arguments<V>) -> R + Send + Sync + 'static,
    {
        Self::with_options(func, CurryOptions::default())
    }

    pub fn with_options<F>(func: F, options: CurryOptions) -> Self
    where
        F: Fn(Arguments<V>) -> R + Send + Sync + 'static,
    {
        Self::from_target(Arc::new(func), options)
    }

    pub fn from_target(target: Target<V, R>, options: CurryOptions) -> Self {
        Self {
            shared: Arc::new(Shared { target, options }),
        }
    }

    /// Curries `func`, validating the optional threshold.
    ///
    /// ```
    /// use curried::{Arguments, Curry, CurryError};
    ///
    /// let sum = |arguments: Arguments<i64>| arguments.args().iter().sum::<i64>();
    /// assert!(Curry::make(sum, Some(2), true).is_ok());
    /// assert!(matches!(
    ///     Curry::make(sum, Some(-1), true),
    ///     Err(CurryError::Configuration { .. })
    /// ));
    /// assert!(Curry::make(sum, Some("x"), true).is_err());
    /// ```
    pub fn make<F, M>(func: F, min_args: Option<M>, unique_keys: bool) -> Result<Self, CurryError>
    where
        F: Fn(Arguments<V>) -> R + Send + Sync + 'static,
        M: TryInto<MinArgs, Error = CurryError>,
    {
        let mut options = CurryOptions::new().with_unique_keys(unique_keys);
        if let Some(min_args) = min_args {
            options = options.with_min_args(min_args.try_into()?);
        }
        Ok(Self::with_options(func, options))
    }

    /// Returns a new factory over the same target with a validated threshold.
    pub fn min_args<M>(&self, min_args: M) -> Result<Self, CurryError>
    where
        M: TryInto<MinArgs, Error = CurryError>,
    {
        let options = self.shared.options.with_min_args(min_args.try_into()?);
        Ok(Self::from_target(self.shared.target.clone(), options))
    }

    /// Returns a new factory over the same target with the given key policy.
    #[must_use]
    pub fn unique_keys(&self, unique_keys: bool) -> Self {
        let options = self.shared.options.with_unique_keys(unique_keys);
        Self::from_target(self.shared.target.clone(), options)
    }

    pub fn func(&self) -> &Target<V, R> {
        &self.shared.target
    }

    pub fn options(&self) -> CurryOptions {
        self.shared.options
    }

    /// An empty curried call.
    pub fn start(&self) -> Curried<V, R> {
        Curried {
            shared: self.shared.clone(),
            args: Vec::new(),
            kwargs: Kwargs::new(),
        }
    }
}

impl<V: Clone, R> Curry<V, R> {
    /// Starts a chain with `arguments`.
    ///
    /// No arguments yields an empty [`Curried`]; otherwise this is the same as
    /// calling [`Curried::call`] on an empty one, so the threshold applies.
    pub fn call(&self, arguments: Arguments<V>) -> Result<Applied<V, R>, CurryError> {
        if arguments.is_empty() {
            return Ok(Applied::Partial(self.start()));
        }
        self.start().call(arguments)
    }
}

impl<V, R> Clone for Curry<V, R> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<V, R> fmt::Debug for Curry<V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curry")
            .field("options", &self.shared.options)
            .finish_non_exhaustive()
    }
}

/// The outcome of an accumulation call.
pub enum Applied<V, R> {
    /// Not enough arguments yet; keep calling.
    Partial(Curried<V, R>),
    /// The target was invoked and this is what it returned.
    Complete(R),
}

impl<V, R> Applied<V, R> {
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    pub fn into_partial(self) -> Option<Curried<V, R>> {
        match self {
            Self::Partial(curried) => Some(curried),
            Self::Complete(_) => None,
        }
    }

    pub fn into_complete(self) -> Option<R> {
        match self {
            Self::Partial(_) => None,
            Self::Complete(result) => Some(result),
        }
    }
}

impl<V: fmt::Debug, R: fmt::Debug> fmt::Debug for Applied<V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Partial(curried) => f.debug_tuple("Partial").field(curried).finish(),
            Self::Complete(result) => f.debug_tuple("Complete").field(result).finish(),
        }
    }
}

/// A target function together with the arguments accumulated so far.
///
/// A `Curried` is never modified after construction. Calling it with more
/// arguments produces a fresh value, so any number of chains can branch off
/// the same partial application without observing each other.
pub struct Curried<V, R> {
    shared: Arc<Shared<V, R>>,
    args: Vec<V>,
    kwargs: Kwargs<V>,
}

impl<V, R> Curried<V, R> {
    pub fn func(&self) -> &Target<V, R> {
        &self.shared.target
    }

    pub fn args(&self) -> &[V] {
        &self.args
    }

    pub fn min_args(&self) -> Option<MinArgs> {
        self.shared.options.min_args
    }

    pub fn unique_keys(&self) -> bool {
        self.shared.options.unique_keys
    }

    /// Number of accumulated positional and keyword arguments.
    pub fn len(&self) -> usize {
        self.args.len() + self.kwargs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: Clone, R> Curried<V, R> {
    /// A copy of the accumulated keyword arguments.
    pub fn kwargs(&self) -> Kwargs<V> {
        self.kwargs.clone()
    }

    /// Looks up `func`, `args` or `kwargs` by name.
    pub fn attribute(&self, name: &str) -> Result<Attribute<'_, V, R>, CurryError> {
        match name {
            "func" => Ok(Attribute::Func(self.func())),
            "args" => Ok(Attribute::Args(self.args())),
            "kwargs" => Ok(Attribute::Kwargs(self.kwargs())),
            _ => Err(CurryError::UnknownAttribute {
                name: name.to_owned(),
            }),
        }
    }

    /// Adds `arguments` to a copy of this call, invoking the target when the
    /// call is empty or the merged count reaches the threshold.
    pub fn call(&self, arguments: Arguments<V>) -> Result<Applied<V, R>, CurryError> {
        if arguments.is_empty() {
            debug!(
                "invoking curried function explicitly with {} argument(s)",
                self.len()
            );
            return Ok(Applied::Complete(self.invoke()));
        }

        let (new_args, new_kwargs) = arguments.into_parts();

        if self.shared.options.unique_keys {
            let collisions: Vec<String> = new_kwargs
                .keys()
                .filter(|name| self.kwargs.contains_key(name.as_str()))
                .cloned()
                .collect();
            if !collisions.is_empty() {
                debug!("rejecting duplicate keyword argument(s) {collisions:?}");
                return Err(CurryError::KeyCollision { keys: collisions });
            }
        }

        let mut args = self.args.clone();
        args.extend(new_args);
        let mut kwargs = self.kwargs.clone();
        kwargs.extend(new_kwargs);

        let count = args.len() + kwargs.len();
        trace!(
            "accumulated {} positional and {} keyword argument(s)",
            args.len(),
            kwargs.len()
        );

        match self.shared.options.min_args {
            Some(min_args) if min_args.is_met_by(count) => {
                debug!("invoking curried function with {count} argument(s), threshold {min_args}");
                Ok(Applied::Complete((self.shared.target)(Arguments::from_parts(
                    args, kwargs,
                ))))
            }
            _ => Ok(Applied::Partial(Self {
                shared: self.shared.clone(),
                args,
                kwargs,
            })),
        }
    }

    /// Adds a single positional argument.
    pub fn arg(&self, value: V) -> Result<Applied<V, R>, CurryError> {
        self.call(Arguments::new().arg(value))
    }

    /// Adds a single keyword argument.
    pub fn kwarg(&self, name: impl Into<String>, value: V) -> Result<Applied<V, R>, CurryError> {
        self.call(Arguments::new().kwarg(name, value))
    }

    /// Invokes the target with the accumulated arguments, regardless of the threshold.
    pub fn invoke(&self) -> R {
        (self.shared.target)(Arguments::from_parts(
            self.args.clone(),
            self.kwargs.clone(),
        ))
    }
}

impl<V: Clone, R> Clone for Curried<V, R> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
            args: self.args.clone(),
            kwargs: self.kwargs.clone(),
        }
    }
}

impl<V: fmt::Debug, R> fmt::Debug for Curried<V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curried")
            .field("args", &self.args)
            .field("kwargs", &self.kwargs)
            .field("options", &self.shared.options)
            .finish_non_exhaustive()
    }
}

impl<V: fmt::Display, R> fmt::Display for Curried<V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("curried")?;
        write_call(f, &self.args, &self.kwargs)
    }
}
