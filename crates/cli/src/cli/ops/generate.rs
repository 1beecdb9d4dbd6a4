use clap::Args;

use client::generator::{generate_password, DEFAULT_LENGTH};

#[derive(Args, Debug, Clone)]
pub struct Generate {
    /// Password length
    #[arg(long, default_value_t = DEFAULT_LENGTH)]
    pub length: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Generate operation failed: {0}")]
    Failed(String),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Generate {
    type Error = GenerateError;
    type Output = String;

    async fn execute(&self, _ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        Ok(generate_password(self.length))
    }
}
