use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_tag::GraphQLTagEngine;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct PrintCmd {
    #[arg(
        help="Accept variable definitions on fragments \
             (`fragment F($id: ID!) on T { .. }`).",
        long,
    )]
    experimental_fragment_variables: bool,

    #[arg(
        help="Paths to one or more GraphQL files to print.",
        name="FILE_PATHS",
        required=true,
    )]
    file_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for PrintCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut engine = GraphQLTagEngine::new();
        if self.experimental_fragment_variables {
            engine.enable_experimental_fragment_variables();
        }

        let mut output = String::new();
        for file_path in &self.file_paths {
            let document = match engine.parse_cached_file(file_path) {
                Ok(document) => document,
                Err(e) => return CommandResult::stderr(format_args!(
                    "{} {}: {e}",
                    output_utils::RED_X,
                    file_path.display(),
                )),
            };

            output.push_str(&format!("# {}\n", file_path.display()));
            for definition in document.definitions() {
                output.push_str(&format!("# kind: {}\n", definition.kind()));
            }
            output.push_str(&format!("{document}\n"));
        }

        CommandResult::stdout(format_args!("{}", output.trim_end()))
    }
}
