fn main() {
    if let Err(err) = layercraft::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
