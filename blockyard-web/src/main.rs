#[macroquad::main("Blockyard")]
async fn main() {
    blockyard_web_lib::run().await;
}
