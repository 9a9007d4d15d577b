fn main() {
    if let Err(e) = heroscope_cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
