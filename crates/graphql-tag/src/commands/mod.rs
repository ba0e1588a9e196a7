mod check;
mod print;

use crate::Cli;
use crate::CommandResult;
use check::CheckCmd;
use print::PrintCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-tag")]
pub(crate) enum CommandEnum {
    /// Parse every GraphQL file found under the given paths through one
    /// document cache and report errors and duplicate fragment names.
    Check(Box<CheckCmd>),

    /// Parse GraphQL files and print the resolved documents.
    Print(Box<PrintCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Print(cmd) => cmd.run(cli).await,
        }
    }
}
