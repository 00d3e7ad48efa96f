#![allow(dead_code)]

use envirotron::Override;

#[derive(Override)]
struct Config {
    #[env(name = "PORT", skip)]
    pub port: u16,
}

fn main() {}
