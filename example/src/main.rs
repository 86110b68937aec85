fn main() {
    if let Err(error) = example::run() {
        eprintln!("example failed: {error}");
        std::process::exit(1);
    }
}
