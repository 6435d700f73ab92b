/// A service that keeps running beside the web host until the process stops.
#[async_trait::async_trait]
pub trait BackgroundService: Send + Sync {
    async fn run(&self);
}
