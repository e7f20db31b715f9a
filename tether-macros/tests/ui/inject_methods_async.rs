#![allow(unused, missing_docs)]

struct Widget;

#[tether::inject_methods]
impl Widget {
    #[inject]
    async fn start(&mut self) {}
}

fn main() {}
