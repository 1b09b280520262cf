use std::process;

fn main() {
    if let Err(err) = letterbox::run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
