use clap::Args;

use client::api::categories;
use client::prelude::ApiError;

#[derive(Args, Debug, Clone)]
pub struct List;

#[derive(Debug, thiserror::Error)]
pub enum CategoryListError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for List {
    type Error = CategoryListError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let listed = ctx.client.call(categories::ListRequest).await?;

        if listed.is_empty() {
            Ok("No categories found".to_string())
        } else {
            let output = listed
                .iter()
                .map(|c| format!("{}  {}", c.id, c.name))
                .collect::<Vec<_>>()
                .join("\n");
            Ok(output)
        }
    }
}
