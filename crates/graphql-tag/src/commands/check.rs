use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_tag::DuplicateFragmentNameWarning;
use libgraphql_tag::GraphQLTagConfig;
use libgraphql_tag::GraphQLTagEngine;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Accept variable definitions on fragments \
             (`fragment F($id: ID!) on T { .. }`).",
        long,
    )]
    experimental_fragment_variables: bool,

    #[arg(
        help="Do not report fragments that reuse the name of a different \
             fragment.",
        long,
    )]
    no_fragment_warnings: bool,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be checked.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<String> = vec![];

        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped_files = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }

                        let matches_ext = path.extension()
                            .map(|ext| ext.to_string_lossy())
                            .is_some_and(|ext| graphql_file_exts.contains(&*ext));
                        if matches_ext {
                            log::trace!("Found GraphQL file at {path:#?}.");
                            file_paths.push(path.to_path_buf());
                        } else {
                            log::trace!("Skipping non-graphql file: {path:#?}.");
                            num_skipped_files += 1;
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(e.to_string());
                    },
                }
            }
        }

        // A single file passed explicitly is checked even if its extension
        // doesn't match `graphql_file_exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to check {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            num_skipped_files -= 1;
            file_paths.push(first_arg_path.to_owned());
        }

        log::debug!(
            "Found {} GraphQL files to be checked.",
            file_paths.len(),
        );

        let mut engine = GraphQLTagEngine::with_config(GraphQLTagConfig {
            fragment_warnings_enabled: !self.no_fragment_warnings,
            experimental_fragment_variables: self.experimental_fragment_variables,
        });
        let warnings: Arc<Mutex<Vec<DuplicateFragmentNameWarning>>> = Default::default();
        let sink_warnings = Arc::clone(&warnings);
        engine.set_warning_sink(move |warning| {
            log::debug!("{warning}");
            sink_warnings
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(warning.clone());
        });

        let mut num_operations = 0;
        for file_path in &file_paths {
            match engine.parse_cached_file(file_path) {
                Ok(document) => {
                    log::debug!(
                        "Parsed {} definitions from {file_path:#?}.",
                        document.definitions().len(),
                    );
                    num_operations += document.operations().count();
                },
                Err(e) => errors.push(format!("{}: {e}", file_path.display())),
            }
        }

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} {} GraphQL errors:\n{}",
                output_utils::RED_X,
                errors.len(),
                errors.iter()
                    .map(|err| format!("  * {err}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ));
        }

        let warnings = warnings.lock().unwrap_or_else(PoisonError::into_inner);
        let warning_lines: String = warnings.iter()
            .map(|warning| format!(
                "\n{} Duplicate fragment name `{}`:\n    first: {}\n    new:   {}",
                output_utils::YELLOW_WARNING,
                warning.fragment_name,
                warning.first_body,
                warning.new_body,
            ))
            .collect();

        CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL parsed successfully:\n",
                "  * Parsed {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Found {} operations.\n",
                "  * Found {} distinct fragment names.\n",
                "  * Found {} duplicate fragment names.",
                "{}",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_skipped_files,
            num_operations,
            engine.registered_fragment_names().len(),
            warnings.len(),
            warning_lines,
        ))
    }
}
