use clap::Args;

use client::api::sites::DeleteRequest;
use client::prelude::{ApiError, Id};

#[derive(Args, Debug, Clone)]
pub struct Rm {
    /// Id of the site to delete
    pub id: Id,
}

#[derive(Debug, thiserror::Error)]
pub enum SiteRmError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("could not read confirmation: {0}")]
    Prompt(#[from] std::io::Error),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Rm {
    type Error = SiteRmError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let message = format!("Delete site {}?", self.id);
        if !ctx.confirmer().confirm(&message)? {
            return Ok("Aborted".to_string());
        }

        ctx.client
            .call(DeleteRequest {
                id: self.id.clone(),
            })
            .await?;

        Ok(format!("Deleted site {}", self.id))
    }
}
