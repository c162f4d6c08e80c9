#[tokio::main]
async fn main() {
    needledrop_be::start_server().await;
}
