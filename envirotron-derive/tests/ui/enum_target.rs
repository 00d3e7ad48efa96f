#![allow(dead_code)]

use envirotron::Override;

#[derive(Override)]
enum Mode {
    Fast,
    Slow,
}

fn main() {}
