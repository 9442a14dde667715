#[tokio::main]
async fn main() -> anyhow::Result<()> {
    reading_drill_backend::run().await
}
