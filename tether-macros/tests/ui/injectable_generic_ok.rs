#![allow(missing_docs, dead_code)]

use std::sync::Arc;
use tether::{Container, Injectable, inject_methods};

#[derive(Injectable)]
struct Holder<T: Send + Sync + 'static> {
    #[inject]
    value: Option<Arc<T>>,
    seen: usize,
}

impl<T: Send + Sync + 'static> Default for Holder<T> {
    fn default() -> Self {
        Self { value: None, seen: 0 }
    }
}

#[inject_methods]
impl<T: Send + Sync + 'static> Holder<T> {
    #[inject]
    fn observe(&mut self, value: Option<Arc<T>>) {
        self.seen += usize::from(value.is_some());
    }
}

fn main() {
    let container = Container::new();
    container.register(7_u32);

    let holder = container.create_instance::<Holder<u32>>().unwrap();
    assert_eq!(holder.value.as_deref(), Some(&7));
    assert_eq!(holder.seen, 1);
}
