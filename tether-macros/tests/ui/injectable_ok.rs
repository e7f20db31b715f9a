#![allow(missing_docs, dead_code)]

use std::sync::Arc;
use tether::{Container, Injectable};

struct Logger;

#[derive(Default, Injectable)]
struct Widget {
    #[inject]
    logger: Option<Arc<Logger>>,
    #[inject]
    container: Container,
    title: String,
}

#[derive(Default, Injectable)]
struct Pair(#[inject] Option<Arc<Logger>>, u8);

#[derive(Default, Injectable)]
struct Empty;

fn main() {
    let container = Container::new();
    container.register(Logger);

    let widget = container.create_instance::<Widget>().unwrap();
    assert!(widget.logger.is_some());

    let pair = container.create_instance::<Pair>().unwrap();
    assert!(pair.0.is_some());

    let _ = container.create_instance::<Empty>().unwrap();
}
