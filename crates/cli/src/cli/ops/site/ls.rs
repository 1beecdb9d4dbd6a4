use clap::Args;

use client::api::sites;
use client::prelude::{ApiError, Id};

#[derive(Args, Debug, Clone)]
pub struct Ls {
    /// Only sites in this category (all sites when omitted)
    #[arg(long)]
    pub category: Option<Id>,
}

#[derive(Debug, thiserror::Error)]
pub enum SiteLsError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Ls {
    type Error = SiteLsError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let listed = match &self.category {
            Some(id) => {
                ctx.client
                    .call(sites::ListRequest {
                        category_id: id.clone(),
                    })
                    .await?
                    .into_vec()
            }
            None => ctx.client.call(sites::ListAllRequest).await?.into_vec(),
        };

        if listed.is_empty() {
            Ok("No sites found".to_string())
        } else {
            let output = listed
                .iter()
                .map(|s| format!("{}  {} ({})", s.id, s.name, s.user))
                .collect::<Vec<_>>()
                .join("\n");
            Ok(output)
        }
    }
}
