//! Binary entry point for `ena-release`.

use std::process;

fn main() {
    if let Err(e) = ena_release::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
