//! # Tether
//!
//! A minimal dependency injection container.
//!
//! A [`Container`] maps a type to at most one shared instance. Objects built through
//! [`Container::create_instance`] get their injection points filled from whatever is
//! registered at that moment: marked methods first, then marked fields.
//! [`Installer`]s bootstrap a container from an explicit, ordered list.
//!
//! ## Example
//! ```
//! use std::sync::Arc;
//! use tether::{Container, Injectable, error::Error};
//!
//! #[derive(Debug)]
//! struct Config { url: &'static str }
//!
//! #[derive(Default)]
//! struct Repository { config: Option<Arc<Config>> }
//!
//! impl Injectable for Repository {
//!     fn inject_fields(&mut self, container: &Container) -> Result<(), Error> {
//!         self.config = container.get_instance::<Config>();
//!         Ok(())
//!     }
//! }
//!
//! let container = Container::new();
//! container.register(Config { url: "postgres://localhost" });
//!
//! let repo = container.create_instance::<Repository>().unwrap();
//! assert_eq!(repo.config.unwrap().url, "postgres://localhost");
//! ```

pub use crate::{
    container::{Container, ContainerBuilder, FromContainer, Upcast},
    inject::{Construct, Injectable, InjectionOutput, MethodInjection},
    installer::{Installer, Installers},
};

#[cfg(feature = "macros")]
pub use tether_macros::{Injectable, inject_methods};

pub mod error;
pub mod container;
pub mod inject;
pub mod installer;

#[doc(hidden)]
pub mod __private {
    //! Support items for the generated code of `tether-macros`

    use crate::{Container, error::Error};

    /// Method pass of a derived `Injectable` whose type has no `#[inject_methods]` block.
    ///
    /// The inherent method emitted by `#[inject_methods]` has the same name and
    /// takes precedence over this one during method resolution.
    pub trait InjectMethodsFallback {
        /// Does nothing
        #[inline]
        fn __tether_inject_methods(&mut self, _container: &Container) -> Result<(), Error> {
            Ok(())
        }
    }

    impl<T: ?Sized> InjectMethodsFallback for T {}
}
