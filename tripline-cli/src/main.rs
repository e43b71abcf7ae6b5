//! Entry point for the Tripline command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = tripline_cli::run() {
        eprintln!("tripline: {err}");
        std::process::exit(1);
    }
}
