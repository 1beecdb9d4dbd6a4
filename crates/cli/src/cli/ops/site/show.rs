use clap::Args;

use client::api::sites;
use client::prelude::{ApiError, Id, Site};

#[derive(Args, Debug, Clone)]
pub struct Show {
    /// Id of the site to display
    pub id: Id,

    /// Print the stored password instead of masking it
    #[arg(long)]
    pub reveal: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SiteShowError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("no site with id {0}")]
    NotFound(Id),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Show {
    type Error = SiteShowError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        // The backend has no per-site read; resolve through the full list.
        let all = ctx.client.call(sites::ListAllRequest).await?.into_vec();
        let site = all
            .into_iter()
            .find(|s| is_same_id(&s.id, &self.id))
            .ok_or_else(|| SiteShowError::NotFound(self.id.clone()))?;

        Ok(render(&site, self.reveal))
    }
}

/// The argument parses digits as a number, but the backend may store the
/// same id as a string; compare rendered forms, not variants.
fn is_same_id(stored: &Id, wanted: &Id) -> bool {
    stored.to_string() == wanted.to_string()
}

fn render(site: &Site, reveal: bool) -> String {
    let mut lines = vec![
        format!("id:          {}", site.id),
        format!("name:        {}", site.name),
        format!("url:         {}", site.url),
        format!("user:        {}", site.user),
    ];
    if reveal {
        lines.push(format!("password:    {}", site.password));
    } else {
        lines.push("password:    ********".to_string());
    }
    if !site.description.is_empty() {
        lines.push(format!("description: {}", site.description));
    }
    if let Some(created_at) = site.created_at {
        lines.push(format!("created:     {}", created_at));
    }
    lines.push(format!("category:    {}", site.category_id));
    lines.join("\n")
}
