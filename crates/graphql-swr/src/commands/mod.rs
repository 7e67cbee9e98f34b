mod generate;

use crate::Cli;
use crate::CommandResult;
use generate::GenerateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-swr")]
pub(crate) enum CommandEnum {
    /// Generate the `getSdkWithHooks()` module for a set of GraphQL documents.
    Generate(Box<GenerateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Generate(cmd) => {
                log::debug!("Running `{}`.", cmd.name());
                cmd.run(cli).await
            },
        }
    }
}
