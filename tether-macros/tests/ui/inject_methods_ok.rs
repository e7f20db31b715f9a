#![allow(missing_docs, dead_code)]

use std::sync::Arc;
use tether::{Container, Injectable, error::Error, inject_methods};

struct Logger;
struct Settings;

#[derive(Default, Injectable)]
struct Widget {
    logger: Option<Arc<Logger>>,
    settings: Option<Arc<Settings>>,
    ready: bool,
}

#[inject_methods]
impl Widget {
    #[inject]
    fn configure(&mut self, logger: Option<Arc<Logger>>, settings: Option<Arc<Settings>>) {
        self.logger = logger;
        self.settings = settings;
    }

    #[inject]
    fn mark_ready(&mut self) -> Result<(), Error> {
        self.ready = true;
        Ok(())
    }

    #[inject]
    fn check(&self, _container: Container) {}

    fn helper(&self) -> bool {
        self.ready
    }
}

fn main() {
    let container = Container::new();
    container.register(Logger);

    let widget = container.create_instance::<Widget>().unwrap();
    assert!(widget.logger.is_some());
    assert!(widget.settings.is_none());
    assert!(widget.helper());
}
