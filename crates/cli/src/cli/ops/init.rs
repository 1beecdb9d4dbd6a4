use clap::Args;

use crate::state::{AppConfig, AppState};

#[derive(Args, Debug, Clone)]
pub struct Init;

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("init failed: {0}")]
    StateFailed(#[from] crate::state::StateError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Init {
    type Error = InitError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        // The resolved remote (flag or default) is what gets persisted.
        let config = AppConfig {
            remote: ctx.client.base_url().clone(),
        };
        let state = AppState::init(ctx.config_path.clone(), Some(config))?;

        let output = format!(
            "Initialized passkeep directory at: {}\n\
             - Config: {}\n\
             - Remote: {}",
            state.passkeep_dir.display(),
            state.config_path.display(),
            state.config.remote,
        );

        Ok(output)
    }
}
