//! Entry point for the WASM application

pub fn main() {
    pipeline_frontend::run();
}
