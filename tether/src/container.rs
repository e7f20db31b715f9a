//! Dependency Injection container and tools

use crate::{Construct, Injectable, error::Error};
use std::{
    any::{Any, TypeId, type_name},
    collections::HashMap,
    fmt::{Debug, Formatter},
    hash::{BuildHasherDefault, Hasher},
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

pub use self::{
    from_container::FromContainer,
    upcast::Upcast,
};

pub mod from_container;
pub mod upcast;

/// A type-erased registry value, always an `Arc<T>` for the slot's `T`
type AnyService = Box<
    dyn Any
    + Send
    + Sync
>;

struct ServiceEntry {
    instance: AnyService,
    type_name: &'static str,
}

impl Debug for ServiceEntry {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ServiceEntry({})", self.type_name)
    }
}

impl ServiceEntry {
    #[inline]
    fn new<T: ?Sized + Send + Sync + 'static>(instance: Arc<T>) -> Self {
        Self {
            instance: Box::new(instance),
            type_name: type_name::<T>(),
        }
    }

    #[inline]
    fn downcast<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<T>, Error> {
        (*self.instance)
            .downcast_ref::<Arc<T>>()
            .cloned()
            .ok_or(Error::ResolveFailed(type_name::<T>()))
    }
}

/// Inner HashMap of registered instances
type ServiceMap = HashMap<
    TypeId,
    ServiceEntry,
    BuildHasherDefault<TypeIdHasher>
>;

#[derive(Default)]
struct TypeIdHasher(u64);

impl Hasher for TypeIdHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }

    #[cold]
    fn write(&mut self, _: &[u8]) {
        unreachable!("TypeId calls write_u64");
    }

    #[inline]
    fn write_u64(&mut self, id: u64) {
        self.0 = id;
    }
}

/// Represents a DI container builder
/// that seeds registrations before the container is shared.
#[derive(Debug, Default)]
pub struct ContainerBuilder {
    services: ServiceMap
}

impl ContainerBuilder {
    /// Creates a new DI container builder
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a DI container that owns the seeded registrations
    #[inline]
    pub fn build(self) -> Container {
        Container {
            services: Arc::new(RwLock::new(self.services)),
        }
    }

    /// Registers an instance, replacing any previous one of the same type
    pub fn register<T: Send + Sync + 'static>(&mut self, instance: T) {
        self.register_shared(Arc::new(instance));
    }

    /// Registers an already shared instance, e.g. an `Arc<dyn Trait>`
    pub fn register_shared<T: ?Sized + Send + Sync + 'static>(&mut self, instance: Arc<T>) {
        self.services.insert(TypeId::of::<T>(), ServiceEntry::new(instance));
    }
}

/// Represents a DI container: one replaceable instance slot per type
/// plus creation and injection of objects that depend on those instances.
///
/// Cloning a `Container` is cheap and yields a handle to the **same** registry.
/// Containers created separately never share registrations.
#[derive(Debug, Clone, Default)]
pub struct Container {
    services: Arc<RwLock<ServiceMap>>
}

impl Container {
    /// Creates an empty DI container
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a [`ContainerBuilder`]
    #[inline]
    pub fn builder() -> ContainerBuilder {
        ContainerBuilder::new()
    }

    /// Stores `instance` in the slot for `T`, replacing whatever was there.
    #[inline]
    pub fn register<T: Send + Sync + 'static>(&self, instance: T) {
        self.register_shared(Arc::new(instance));
    }

    /// Stores an already shared instance in the slot for `T`.
    ///
    /// Later lookups return clones of this very `Arc`, so identity is preserved.
    /// This is also the way to register an abstraction:
    /// ```
    /// use std::sync::Arc;
    /// use tether::Container;
    ///
    /// trait Logger: Send + Sync { fn log(&self, msg: &str); }
    ///
    /// struct ConsoleLogger;
    /// impl Logger for ConsoleLogger { fn log(&self, msg: &str) { println!("{msg}"); } }
    ///
    /// let container = Container::new();
    /// container.register_shared::<dyn Logger>(Arc::new(ConsoleLogger));
    ///
    /// assert!(container.get_instance::<dyn Logger>().is_some());
    /// ```
    pub fn register_shared<T: ?Sized + Send + Sync + 'static>(&self, instance: Arc<T>) {
        #[cfg(feature = "tracing")]
        tracing::debug!(service = type_name::<T>(), "registering instance");

        self.write().insert(TypeId::of::<T>(), ServiceEntry::new(instance));
    }

    /// Returns the instance currently registered for `T`, or `None`.
    ///
    /// An empty slot is a normal outcome rather than an error.
    #[inline]
    pub fn get_instance<T: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        let instance = self.try_get_instance::<T>().ok();

        #[cfg(feature = "tracing")]
        if instance.is_none() {
            tracing::trace!(service = type_name::<T>(), "no instance registered");
        }

        instance
    }

    /// Returns the instance currently registered for `T`
    /// or an [`Error::NotRegistered`] if the slot is empty.
    ///
    /// The container is always registered as itself: unless another [`Container`]
    /// was registered explicitly, looking up `Container` returns a handle to `self`.
    pub fn try_get_instance<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<T>, Error> {
        let registered = self.read()
            .get(&TypeId::of::<T>())
            .map(ServiceEntry::downcast::<T>);
        match registered {
            Some(instance) => instance,
            None if is_container::<T>() => ServiceEntry::new(Arc::new(self.clone())).downcast::<T>(),
            None => Err(Error::NotRegistered(type_name::<T>())),
        }
    }

    /// Returns `true` if an instance is registered for `T`
    ///
    /// Always `true` for [`Container`] itself.
    #[inline]
    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        is_container::<T>() || self.read().contains_key(&TypeId::of::<T>())
    }

    /// Returns the number of occupied slots
    ///
    /// The implicit self-registration is not counted.
    #[inline]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if nothing has been registered yet
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Constructs a new `T` and fills its injection points from the current registrations.
    ///
    /// Dependencies registered afterwards are not applied to the returned value.
    pub fn create_instance<T: Construct + Injectable>(&self) -> Result<T, Error> {
        let mut instance = T::construct()?;
        self.inject(&mut instance)?;
        Ok(instance)
    }

    /// Constructs and injects a concrete `C`, handing it back as the abstraction `A`.
    ///
    /// # Example
    /// ```
    /// use tether::{Container, injectable, upcast};
    ///
    /// trait Clock { fn now(&self) -> u64; }
    ///
    /// #[derive(Default)]
    /// struct FixedClock;
    /// impl Clock for FixedClock { fn now(&self) -> u64 { 42 } }
    ///
    /// injectable! { FixedClock }
    /// upcast! { FixedClock => dyn Clock }
    ///
    /// let container = Container::new();
    /// let clock = container.create_instance_as::<dyn Clock, FixedClock>().unwrap();
    ///
    /// assert_eq!(clock.now(), 42);
    /// ```
    pub fn create_instance_as<A, C>(&self) -> Result<Box<A>, Error>
    where
        A: ?Sized,
        C: Construct + Injectable + Upcast<A>
    {
        self.create_instance::<C>()
            .map(|instance| <C as Upcast<A>>::upcast(Box::new(instance)))
    }

    /// Fills the injection points of `target`: methods first, then fields.
    ///
    /// Every call re-resolves every injection point and overwrites it.
    #[inline]
    pub fn inject<T: Injectable + ?Sized>(&self, target: &mut T) -> Result<(), Error> {
        target.inject_methods(self)?;
        target.inject_fields(self)
    }

    #[inline]
    fn read(&self) -> RwLockReadGuard<'_, ServiceMap> {
        self.services
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    fn write(&self) -> RwLockWriteGuard<'_, ServiceMap> {
        self.services
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[inline]
fn is_container<T: ?Sized + 'static>() -> bool {
    TypeId::of::<T>() == TypeId::of::<Container>()
}
