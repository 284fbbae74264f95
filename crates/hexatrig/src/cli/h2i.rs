use anyhow::Context;
use clap::Parser;
use tokio::io::AsyncWriteExt;

use crate::codec;

/// Print the instance id encoded in a hostname
#[derive(Parser)]
pub struct H2iCommand {
    #[arg()]
    hostname: String,

    /// Fail on short hostnames or characters outside 0-9A-Z
    #[arg(long = "strict")]
    strict: bool,
}

impl H2iCommand {
    pub fn render(&self) -> anyhow::Result<String> {
        tracing::debug!(hostname = %self.hostname, strict = self.strict, "decoding hostname");

        if self.strict {
            let instance_id = codec::try_decode(&self.hostname)
                .with_context(|| format!("decode hostname: {}", self.hostname))?;

            return Ok(instance_id.to_string());
        }

        Ok(codec::decode(&self.hostname).to_string())
    }

    pub async fn execute(&self) -> anyhow::Result<()> {
        let output = self.render()?;

        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(format!("{output}\n").as_bytes())
            .await
            .context("write instance id")?;
        stdout.flush().await?;

        Ok(())
    }
}
