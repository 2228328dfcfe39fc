use std::io::Write;

use async_trait::async_trait;
use ec_core::ports::LinkOpenerPort;
use tracing::info;

/// A terminal cannot follow a deep link itself, so the link is printed for
/// the operator to open.
#[derive(Debug, Default)]
pub struct ConsoleLinkOpener;

#[async_trait]
impl LinkOpenerPort for ConsoleLinkOpener {
    async fn open(&self, url: &str) -> anyhow::Result<()> {
        info!(%url, "Opening link");
        writeln!(std::io::stdout(), "{url}")?;
        Ok(())
    }
}
