// =============================================================================
// Campana Web - WASM Entry Point
// =============================================================================
// Trunk compiles this binary and injects it into index.html.
// =============================================================================

fn main() {
    campana_web::start();
}
