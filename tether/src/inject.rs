//! Injection points and construction of injectable types

use crate::Container;
use crate::error::Error;

/// A trait for objects whose injection points can be filled from the DI container.
///
/// Injection runs in two passes, always in this order:
/// 1. [`inject_methods`](Injectable::inject_methods): every marked method is called once
///    with each of its parameters resolved from the container
/// 2. [`inject_fields`](Injectable::inject_fields): every marked field is assigned
///
/// Both passes default to doing nothing, so a type without injection points
/// only needs an empty `impl` (or the [`injectable!`](crate::injectable) macro).
///
/// With the `macros` feature this trait is usually derived:
/// ```
/// use std::sync::Arc;
/// use tether::{Container, Injectable};
///
/// struct Logger;
///
/// #[derive(Default, Injectable)]
/// struct Widget {
///     #[inject]
///     logger: Option<Arc<Logger>>,
///     title: String,
/// }
///
/// let container = Container::new();
/// let widget = container.create_instance::<Widget>().unwrap();
///
/// assert!(widget.logger.is_none());
/// ```
///
/// Or implemented by hand:
/// ```
/// use std::sync::Arc;
/// use tether::{Container, Injectable, error::Error};
///
/// struct Logger;
///
/// #[derive(Default)]
/// struct Widget {
///     logger: Option<Arc<Logger>>,
/// }
///
/// impl Injectable for Widget {
///     fn inject_fields(&mut self, container: &Container) -> Result<(), Error> {
///         self.logger = container.get_instance();
///         Ok(())
///     }
/// }
/// ```
pub trait Injectable {
    /// Calls the injection methods of `self`
    #[inline]
    fn inject_methods(&mut self, _container: &Container) -> Result<(), Error> {
        Ok(())
    }

    /// Assigns the injection fields of `self`
    #[inline]
    fn inject_fields(&mut self, _container: &Container) -> Result<(), Error> {
        Ok(())
    }
}

/// A table of injection methods, generated by `#[inject_methods]` on an impl block.
///
/// A derived [`Injectable`] delegates its method pass here whenever the type has an
/// `#[inject_methods]` block. Hand-written [`Injectable`] impls call
/// [`MethodInjection::invoke_injection_methods`] from `inject_methods` themselves.
pub trait MethodInjection {
    /// Calls every injection method in declaration order
    fn invoke_injection_methods(&mut self, container: &Container) -> Result<(), Error>;
}

/// Return types allowed for injection methods
pub trait InjectionOutput {
    /// Converts the method output into the injection result
    fn into_result(self) -> Result<(), Error>;
}

impl InjectionOutput for () {
    #[inline]
    fn into_result(self) -> Result<(), Error> {
        Ok(())
    }
}

impl InjectionOutput for Result<(), Error> {
    #[inline]
    fn into_result(self) -> Result<(), Error> {
        self
    }
}

/// The no-argument construction path used by [`Container::create_instance`]
///
/// Every [`Default`] type implements it. Types that can fail to build
/// implement it by hand and return an error, which is handed to the caller as is.
pub trait Construct: Sized {
    /// Builds a new instance of `Self`
    fn construct() -> Result<Self, Error>;
}

impl<T: Default> Construct for T {
    #[inline]
    fn construct() -> Result<Self, Error> {
        Ok(Self::default())
    }
}

/// An `injectable!` macro that implements [`Injectable`] without injection points
/// for one or more types.
///
/// # Macro Syntax
/// ```ignore
/// injectable! {
///     Type1
///     Type2
///     …
///     TypeN
/// };
/// ```
///
/// # Example
/// ```
/// use tether::{Container, injectable};
///
/// #[derive(Default)]
/// struct Settings { retries: u8 }
///
/// injectable! { Settings }
///
/// let container = Container::new();
/// let settings = container.create_instance::<Settings>().unwrap();
///
/// assert_eq!(settings.retries, 0);
/// ```
#[macro_export]
macro_rules! injectable {
    ($($name:ident)*) => {
        $(impl $crate::Injectable for $name {})*
    };
}
