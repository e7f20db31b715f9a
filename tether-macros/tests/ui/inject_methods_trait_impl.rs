#![allow(unused, missing_docs)]

struct Widget;

#[tether::inject_methods]
impl Clone for Widget {
    fn clone(&self) -> Self {
        Widget
    }
}

fn main() {}
