pub fn run() {
    println!("typeshift {}", env!("CARGO_PKG_VERSION"));
}
