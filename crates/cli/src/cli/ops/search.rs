use clap::Args;

use client::prelude::{ApiError, CollectionController, View};

#[derive(Args, Debug, Clone)]
pub struct Search {
    /// Text to look for in site names, users, and category names
    pub term: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("empty search term")]
    EmptyTerm,
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Search {
    type Error = SearchError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        if self.term.is_empty() {
            return Err(SearchError::EmptyTerm);
        }

        let mut controller = CollectionController::new(ctx.client.clone());
        controller.load_categories().await?;
        controller.set_search_term(&self.term).await?;

        let mut lines = Vec::new();

        let matching = controller.visible_categories();
        if !matching.is_empty() {
            lines.push("Categories:".to_string());
            for category in matching {
                lines.push(format!("  {}  {}", category.id, category.name));
            }
        }

        if let View::SearchResults { sites, .. } = controller.view() {
            if !sites.is_empty() {
                lines.push("Sites:".to_string());
                for site in sites {
                    lines.push(format!("  {}  {} ({})", site.id, site.name, site.user));
                }
            }
        }

        if lines.is_empty() {
            return Ok(format!("No matches for '{}'", self.term));
        }
        Ok(lines.join("\n"))
    }
}
