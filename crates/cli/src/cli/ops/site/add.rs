use clap::Args;

use client::api::sites::CreateRequest;
use client::generator::{generate_password, DEFAULT_LENGTH};
use client::prelude::{ApiError, Id, SiteDraft};

#[derive(Args, Debug, Clone)]
pub struct Add {
    /// Category to file the new site under
    #[arg(long)]
    pub category: Id,

    /// Address of the site
    #[arg(long)]
    pub url: String,

    /// Display name (defaults to the url)
    #[arg(long)]
    pub name: Option<String>,

    /// Login user for the site
    #[arg(long)]
    pub user: String,

    /// Password to store
    #[arg(long, conflicts_with = "generate")]
    pub password: Option<String>,

    /// Generate a random password instead of providing one
    #[arg(long)]
    pub generate: bool,

    /// Free-form note
    #[arg(long, default_value = "")]
    pub description: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SiteAddError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("either --password or --generate must be provided")]
    NoPassword,
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Add {
    type Error = SiteAddError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let password = match (&self.password, self.generate) {
            (Some(password), _) => password.clone(),
            (None, true) => generate_password(DEFAULT_LENGTH),
            (None, false) => return Err(SiteAddError::NoPassword),
        };

        let draft = match &self.name {
            Some(name) => SiteDraft {
                name: name.clone(),
                url: self.url.clone(),
                user: self.user.clone(),
                password: password.clone(),
                description: self.description.clone(),
            },
            None => SiteDraft::for_url(
                self.url.clone(),
                self.user.clone(),
                password.clone(),
                self.description.clone(),
            ),
        };

        let ack = ctx
            .client
            .call(CreateRequest {
                category_id: self.category.clone(),
                draft,
            })
            .await?;
        tracing::debug!(ack = %ack, "create acknowledged");

        let mut output = format!("Stored site '{}' in category {}", self.url, self.category);
        if self.generate {
            output.push_str(&format!("\nGenerated password: {}", password));
        }
        Ok(output)
    }
}
