#![allow(unused, missing_docs)]

#[derive(tether::Injectable)]
enum Mode {
    Fast,
    Slow,
}

fn main() {}
