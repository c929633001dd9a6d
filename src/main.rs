#[tokio::main]
async fn main() -> anyhow::Result<()> {
    secret_number_rust::run().await
}
