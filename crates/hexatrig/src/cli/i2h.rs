use anyhow::Context;
use clap::Parser;
use tokio::io::AsyncWriteExt;

use crate::codec;

/// Print the hostname for an instance id
#[derive(Parser)]
pub struct I2hCommand {
    #[arg()]
    prefix: String,

    #[arg()]
    instance_id: u64,

    /// Fail instead of widening the field when the id needs more than 6 digits
    #[arg(long = "strict")]
    strict: bool,
}

impl I2hCommand {
    pub fn render(&self) -> anyhow::Result<String> {
        tracing::debug!(
            prefix = %self.prefix,
            instance_id = self.instance_id,
            strict = self.strict,
            "encoding instance id"
        );

        if self.strict {
            return codec::try_encode(&self.prefix, self.instance_id)
                .with_context(|| format!("encode instance id: {}", self.instance_id));
        }

        Ok(codec::encode(&self.prefix, self.instance_id))
    }

    pub async fn execute(&self) -> anyhow::Result<()> {
        let output = self.render()?;

        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(format!("{output}\n").as_bytes())
            .await
            .context("write hostname")?;
        stdout.flush().await?;

        Ok(())
    }
}
