#![allow(missing_docs, dead_code)]

use std::sync::Arc;
use tether::{Container, Injectable};

struct Logger;

#[derive(Default, Injectable)]
struct Widget {
    logger: Option<Arc<Logger>>,
    calls: usize,
}

mod setup {
    use super::{Logger, Widget};
    use std::sync::Arc;

    #[tether::inject_methods]
    impl Widget {
        #[inject]
        fn set_logger(&mut self, logger: Option<Arc<Logger>>) {
            self.logger = logger;
            self.calls += 1;
        }
    }
}

fn main() {
    let container = Container::new();
    container.register(Logger);

    let widget = container.create_instance::<Widget>().unwrap();
    assert!(widget.logger.is_some());
    assert_eq!(widget.calls, 1);
}
