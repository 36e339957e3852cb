#[tokio::main]
async fn main() {
    nba_outlook::start_server().await;
}
