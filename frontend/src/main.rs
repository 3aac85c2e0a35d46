//! Entry point for the WASM application

pub fn main() {
    rpa_frontend::run()
}
