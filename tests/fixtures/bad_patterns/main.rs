use std::collections::*;

fn risky() -> i32 {
    let value: Option<i32> = Some(1);
    value.unwrap()
}

fn main() {
    println!("{}", risky());
}
