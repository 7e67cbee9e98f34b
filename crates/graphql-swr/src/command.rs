use crate::Cli;
use crate::CommandResult;

/// A `graphql-swr` subcommand, consumed by running it.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    /// The subcommand as typed on the command line.
    fn name(&self) -> &'static str;

    async fn run(self, cli: Cli) -> CommandResult;
}
