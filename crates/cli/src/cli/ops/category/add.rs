use clap::Args;

use client::api::categories::CreateRequest;
use client::prelude::ApiError;

#[derive(Args, Debug, Clone)]
pub struct Add {
    /// Name of the category to create
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CategoryAddError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Add {
    type Error = CategoryAddError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let ack = ctx
            .client
            .call(CreateRequest {
                name: self.name.clone(),
            })
            .await?;
        tracing::debug!(ack = %ack, "create acknowledged");

        Ok(format!("Created category '{}'", self.name))
    }
}
