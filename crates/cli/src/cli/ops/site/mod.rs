use clap::{Args, Subcommand};

pub mod add;
pub mod ls;
pub mod rm;
pub mod show;

use crate::cli::op::Op;

crate::command_enum! {
    (Ls, ls::Ls),
    (Add, add::Add),
    (Rm, rm::Rm),
    (Show, show::Show),
}

// Rename the generated Command to SiteCommand for clarity
pub type SiteCommand = Command;

#[derive(Args, Debug, Clone)]
pub struct Site {
    #[command(subcommand)]
    pub command: SiteCommand,
}

#[async_trait::async_trait]
impl Op for Site {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}
