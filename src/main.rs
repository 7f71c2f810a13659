use influencer_scorer::api::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    server::run_server().await
}
