#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), puffistery::backend::ServeError> {
    puffistery::backend::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    puffistery::frontend::run();
}
