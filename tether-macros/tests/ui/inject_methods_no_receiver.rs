#![allow(unused, missing_docs)]

struct Widget;

#[tether::inject_methods]
impl Widget {
    #[inject]
    fn build(value: Option<std::sync::Arc<u8>>) {}
}

fn main() {}
