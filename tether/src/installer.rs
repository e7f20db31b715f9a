//! Installers that bootstrap a DI container

use crate::{Construct, Container, Injectable, error::Error};
use std::{any::type_name, fmt::{Debug, Formatter}};

/// A bootstrap object that populates the DI container.
///
/// Installers are injected like any other target before [`install`](Installer::install)
/// is called, so they can declare injection points of their own.
///
/// # Example
/// ```
/// use tether::{Container, Installer, Installers, error::Error, injectable};
///
/// struct Config { url: &'static str }
///
/// #[derive(Default)]
/// struct ConfigInstaller;
///
/// injectable! { ConfigInstaller }
///
/// impl Installer for ConfigInstaller {
///     fn install(&mut self, container: &Container) -> Result<(), Error> {
///         container.register(Config { url: "redis://localhost" });
///         Ok(())
///     }
/// }
///
/// let container = Container::new();
/// container.configure_installers(&Installers::new().add::<ConfigInstaller>()).unwrap();
///
/// assert_eq!(container.get_instance::<Config>().unwrap().url, "redis://localhost");
/// ```
pub trait Installer: Injectable {
    /// Registers services into the `container`
    fn install(&mut self, container: &Container) -> Result<(), Error>;
}

type InstallerFactory = Box<
    dyn Fn() -> Result<Box<dyn Installer>, Error>
>;

struct InstallerEntry {
    name: &'static str,
    factory: InstallerFactory,
}

/// An ordered list of installers assembled at startup
#[derive(Default)]
pub struct Installers {
    entries: Vec<InstallerEntry>
}

impl Debug for Installers {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.names())
            .finish()
    }
}

impl Installers {
    /// Creates an empty list of installers
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an installer built through its [`Construct`] implementation
    pub fn add<I: Installer + Construct + 'static>(self) -> Self {
        self.add_with(I::construct)
    }

    /// Appends an installer built by a custom `factory`
    ///
    /// The factory runs when the installers are configured, not when it is added.
    pub fn add_with<I, F>(mut self, factory: F) -> Self
    where
        I: Installer + 'static,
        F: Fn() -> Result<I, Error> + 'static
    {
        self.entries.push(InstallerEntry {
            name: type_name::<I>(),
            factory: Box::new(move || factory().map(|i| Box::new(i) as Box<dyn Installer>)),
        });
        self
    }

    /// Returns the number of installers
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no installers
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the type names of the installers in the order they run
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }
}

impl Container {
    /// Runs the `installers` in order: each one is constructed, injected and then installed.
    ///
    /// The first failure aborts the remaining installers and is returned as is.
    /// Everything registered before the failure stays registered.
    pub fn configure_installers(&self, installers: &Installers) -> Result<(), Error> {
        for entry in &installers.entries {
            #[cfg(feature = "tracing")]
            tracing::debug!(installer = entry.name, "running installer");

            let mut installer = (entry.factory)()?;
            self.inject(&mut *installer)?;
            installer.install(self)?;

            #[cfg(feature = "tracing")]
            tracing::debug!(installer = entry.name, "installer completed");
        }
        Ok(())
    }
}
