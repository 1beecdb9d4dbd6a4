use clap::Args;

use client::api::categories::DeleteRequest;
use client::prelude::{ApiError, Id};

#[derive(Args, Debug, Clone)]
pub struct Rm {
    /// Id of the category to delete
    pub id: Id,
}

#[derive(Debug, thiserror::Error)]
pub enum CategoryRmError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("could not read confirmation: {0}")]
    Prompt(#[from] std::io::Error),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Rm {
    type Error = CategoryRmError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        // The backend cascades: every site in the category goes too.
        let message = format!("Delete category {} and every site in it?", self.id);
        if !ctx.confirmer().confirm(&message)? {
            return Ok("Aborted".to_string());
        }

        ctx.client
            .call(DeleteRequest {
                id: self.id.clone(),
            })
            .await?;

        Ok(format!("Deleted category {}", self.id))
    }
}
