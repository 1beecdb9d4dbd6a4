use std::error::Error;
use std::path::PathBuf;

use url::Url;

use client::prelude::{ApiClient, ApiError};

use crate::cli::confirm::{AssumeYes, Confirmer, TerminalConfirmer};
use crate::state::{AppState, DEFAULT_REMOTE};

/// Resolve the remote URL for the API client.
///
/// Priority: explicit `--remote` flag > config file remote > hardcoded
/// http://localhost:3000.
pub fn resolve_remote(explicit: Option<Url>, config_path: Option<PathBuf>) -> Url {
    if let Some(url) = explicit {
        return url;
    }
    if let Ok(state) = AppState::load(config_path) {
        return state.config.remote;
    }
    Url::parse(DEFAULT_REMOTE).expect("hardcoded URL must parse")
}

#[derive(Clone)]
pub struct OpContext {
    /// API client (always initialized with default or custom URL)
    pub client: ApiClient,
    /// Optional custom config path (defaults to ~/.passkeep)
    pub config_path: Option<PathBuf>,
    /// Skip confirmation prompts (--yes)
    pub assume_yes: bool,
}

impl OpContext {
    /// Create context with custom remote URL and optional config path
    pub fn new(
        remote: Url,
        config_path: Option<PathBuf>,
        assume_yes: bool,
    ) -> Result<Self, ApiError> {
        Ok(Self {
            client: ApiClient::new(&remote)?,
            config_path,
            assume_yes,
        })
    }

    /// The confirmation gate destructive ops must pass through.
    pub fn confirmer(&self) -> Box<dyn Confirmer> {
        if self.assume_yes {
            Box::new(AssumeYes)
        } else {
            Box::new(TerminalConfirmer)
        }
    }
}

#[async_trait::async_trait]
pub trait Op: Send + Sync {
    type Error: Error + Send + Sync + 'static;
    type Output;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error>;
}

#[macro_export]
macro_rules! command_enum {
    ($(($variant:ident, $type:ty)),* $(,)?) => {
        #[derive(Subcommand, Debug, Clone)]
        pub enum Command {
            $($variant($type),)*
        }

        #[derive(Debug)]
        pub enum OpOutput {
            $($variant(<$type as $crate::cli::op::Op>::Output),)*
        }

        #[derive(Debug, thiserror::Error)]
        pub enum OpError {
            $(
                #[error(transparent)]
                $variant(<$type as $crate::cli::op::Op>::Error),
            )*
        }

        #[async_trait::async_trait]
        impl $crate::cli::op::Op for Command {
            type Output = OpOutput;
            type Error = OpError;

            async fn execute(&self, ctx: &$crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
                match self {
                    $(
                        Command::$variant(op) => {
                            op.execute(ctx).await
                                .map(OpOutput::$variant)
                                .map_err(OpError::$variant)
                        },
                    )*
                }
            }
        }

        impl std::fmt::Display for OpOutput {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        OpOutput::$variant(output) => write!(f, "{}", output),
                    )*
                }
            }
        }
    };
}
