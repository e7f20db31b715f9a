//! Conversions from a concrete type to the abstraction it is exposed as

/// Converts a boxed concrete value into a boxed abstraction `A`.
///
/// Every type trivially upcasts to itself. Trait-object upcasts are declared with [`upcast!`].
///
/// [`upcast!`]: crate::upcast
pub trait Upcast<A: ?Sized> {
    /// Performs the conversion
    fn upcast(self: Box<Self>) -> Box<A>;
}

impl<T> Upcast<T> for T {
    #[inline]
    fn upcast(self: Box<Self>) -> Box<T> {
        self
    }
}

/// An `upcast!` macro that implements [`Upcast`] for one or more concrete-to-abstract pairs.
///
/// # Macro Syntax
/// ```ignore
/// upcast! {
///     Concrete1 => dyn Trait1,
///     Concrete2 => dyn Trait2
/// };
/// ```
///
/// # Example
/// ```
/// use tether::{Upcast, upcast};
///
/// trait Greeter { fn greet(&self) -> String; }
///
/// struct English;
/// impl Greeter for English { fn greet(&self) -> String { "hello".into() } }
///
/// upcast! { English => dyn Greeter }
///
/// let greeter: Box<dyn Greeter> = Box::new(English).upcast();
/// assert_eq!(greeter.greet(), "hello");
/// ```
#[macro_export]
macro_rules! upcast {
    ($($concrete:ty => $abstract:ty),* $(,)?) => {
        $(impl $crate::Upcast<$abstract> for $concrete {
            #[inline]
            fn upcast(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<$abstract> {
                self
            }
        })*
    };
}
