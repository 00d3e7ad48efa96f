#![allow(dead_code)]

use envirotron::Override;

#[derive(Override)]
struct Config {
    #[env(name = "PORT")]
    #[env(name = "SERVER_PORT")]
    pub port: u16,
}

fn main() {}
