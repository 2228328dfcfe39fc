use async_trait::async_trait;

/// Opens deep links (WhatsApp, mail) in whatever the host platform provides.
#[async_trait]
pub trait LinkOpenerPort: Send + Sync {
    async fn open(&self, url: &str) -> anyhow::Result<()>;
}
