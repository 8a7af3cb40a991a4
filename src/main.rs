fn main() -> Result<(), Box<dyn std::error::Error>> {
    showcase::runtime::run()
}
