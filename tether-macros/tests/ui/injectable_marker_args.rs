#![allow(unused, missing_docs)]

use std::sync::Arc;

#[derive(Default, tether::Injectable)]
struct Widget {
    #[inject(optional)]
    logger: Option<Arc<u8>>,
}

fn main() {}
