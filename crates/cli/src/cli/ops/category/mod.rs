use clap::{Args, Subcommand};

pub mod add;
pub mod list;
pub mod rm;

use crate::cli::op::Op;

crate::command_enum! {
    (List, list::List),
    (Add, add::Add),
    (Rm, rm::Rm),
}

// Rename the generated Command to CategoryCommand for clarity
pub type CategoryCommand = Command;

#[derive(Args, Debug, Clone)]
pub struct Category {
    #[command(subcommand)]
    pub command: CategoryCommand,
}

#[async_trait::async_trait]
impl Op for Category {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}
