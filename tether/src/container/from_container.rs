//! Resolution of injection points from the DI container

use super::{Error, Container};
use std::sync::Arc;

/// A trait that defines how an injection point of type `Self` is resolved from the DI container
///
/// Resolution only looks the container up and never creates missing dependencies:
/// - `Option<Arc<T>>` resolves to the registered instance or `None`
/// - `Arc<T>` resolves to the registered instance or fails with [`Error::NotRegistered`]
/// - [`Container`] resolves the same way as `Arc<Container>`, which is the resolving
///   container itself unless another one was registered
pub trait FromContainer: Sized {
    /// Extracts `Self` from DI container
    fn from_container(container: &Container) -> Result<Self, Error>;
}

impl FromContainer for Container {
    #[inline]
    fn from_container(container: &Container) -> Result<Self, Error> {
        container
            .try_get_instance::<Container>()
            .map(|resolved| Container::clone(&resolved))
    }
}

impl FromContainer for () {
    #[inline]
    fn from_container(_: &Container) -> Result<Self, Error> {
        Ok(())
    }
}

impl<T: ?Sized + Send + Sync + 'static> FromContainer for Option<Arc<T>> {
    #[inline]
    fn from_container(container: &Container) -> Result<Self, Error> {
        Ok(container.get_instance::<T>())
    }
}

impl<T: ?Sized + Send + Sync + 'static> FromContainer for Arc<T> {
    #[inline]
    fn from_container(container: &Container) -> Result<Self, Error> {
        container.try_get_instance::<T>()
    }
}

macro_rules! define_generic_from_container {
    ($($T: ident),*) => {
        impl<$($T: FromContainer),+> FromContainer for ($($T,)+) {
            #[inline]
            #[allow(non_snake_case)]
            fn from_container(container: &Container) -> Result<Self, Error>{
                let tuple = (
                    $(
                    $T::from_container(container)?,
                    )*
                );
                Ok(tuple)
            }
        }
    }
}

define_generic_from_container! { T1 }
define_generic_from_container! { T1, T2 }
define_generic_from_container! { T1, T2, T3 }
define_generic_from_container! { T1, T2, T3, T4 }
define_generic_from_container! { T1, T2, T3, T4, T5 }
