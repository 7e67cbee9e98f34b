use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_swr::codegen::HookEmitter;
use libgraphql_swr::config::SwrConfig;
use libgraphql_swr::operation::OperationLoader;
use std::collections::HashSet;
use std::error::Error;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        help="Path to a YAML file holding the hook generation options \
             (`excludeQueries`, `infiniteQueries`, `autogenKey`, \
             `rawResponse`, `typesPrefix`, `typesSuffix`, `useTypeImports`).",
        long,
        short='c',
    )]
    config: Option<PathBuf>,

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
        help="File to write the generated module to. The module is printed \
             to stdout when omitted.",
        long,
        short='o',
    )]
    output: Option<PathBuf>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files whose operations need hooks generated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub fn name(&self) -> &'static str {
        "generate"
    }

    pub async fn run(self, _cli: Cli) -> CommandResult {
        let config = match &self.config {
            Some(config_path) => {
                log::debug!("Loading hook options from {config_path:#?}.");
                match SwrConfig::from_file(config_path) {
                    Ok(config) => config,
                    Err(e) => return CommandResult::stderr(format_args!(
                        "{} Invalid configuration: {e}",
                        output_utils::RED_X,
                    )),
                }
            },
            None => SwrConfig::default(),
        };

        let (file_paths, mut errors) = self.find_graphql_files();
        if !errors.is_empty() {
            return Self::report_errors(&errors);
        }
        log::debug!(
            "Found {} GraphQL files to generate hooks from.",
            file_paths.len(),
        );

        let loader = OperationLoader::from_config(&config);
        let mut emitter = HookEmitter::new(config);
        for file_path in &file_paths {
            match loader.load_file(file_path) {
                Ok(operations) => {
                    for operation in operations {
                        emitter.record(operation);
                    }
                },
                Err(load_errors) => errors.extend(
                    load_errors.into_iter()
                        .map(|e| Box::new(e) as Box<dyn Error>)
                ),
            }
        }
        if !errors.is_empty() {
            return Self::report_errors(&errors);
        }

        let module = match emitter.emit() {
            Ok(module) => module,
            Err(e) => return Self::report_errors(&[Box::new(e) as Box<dyn Error>]),
        };
        let num_hooks = module.hook_names().len();
        let rendered = module.render();

        let Some(output_path) = &self.output else {
            return CommandResult::stdout(format_args!("{}", rendered.trim_end()));
        };

        if let Err(e) = std::fs::write(output_path, rendered) {
            return CommandResult::stderr(format_args!(
                "{} Failed to write {output_path:#?}: {e}",
                output_utils::RED_X,
            ));
        }

        CommandResult::stdout(format_args!(
            "{} Generated {num_hooks} hooks for {} operations from {} files \
            into {output_path:#?}.",
            output_utils::GREEN_CHECK,
            emitter.collector().len(),
            file_paths.len(),
        ))
    }
}
impl GenerateCmd {
    /// Every GraphQL file at or under the paths given as args, sorted and
    /// deduplicated so the emitted module is stable across runs.
    fn find_graphql_files(&self) -> (Vec<PathBuf>, Vec<Box<dyn Error>>) {
        let mut errors: Vec<Box<dyn Error>> = vec![];

        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(Box::new(e));
                        continue
                    },
                };

                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue
                }
                if let Some(ext) = entry_path.extension().map(|s| s.to_string_lossy())
                    && graphql_file_exts.contains(&*ext) {
                    log::trace!("Found GraphQL file at {entry_path:#?}.");
                    match Self::canonicalize(entry_path) {
                        Ok(file_path) => file_paths.push(file_path),
                        Err(e) => errors.push(e),
                    }
                }
            }
        }

        // A single file passed explicitly is loaded even when its extension
        // isn't one of `graphql_file_exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            match Self::canonicalize(first_arg_path) {
                Ok(file_path) => {
                    log::warn!(
                        "Proceeding to load {file_path:#?} even though it \
                        doesn't match any of the --graphql-file-exts ({}).",
                        self.graphql_file_exts.iter()
                            .map(|ext| format!("`{ext}`"))
                            .collect::<Vec<_>>()
                            .join(", "),
                    );
                    file_paths.push(file_path);
                },
                Err(e) => errors.push(e),
            }
        }

        file_paths.sort();
        file_paths.dedup();
        (file_paths, errors)
    }

    fn canonicalize(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
        std::fs::canonicalize(path).map_err(|e| -> Box<dyn Error> {
            format!("Failed to resolve {path:#?}: {e}").into()
        })
    }

    fn report_errors(errors: &[Box<dyn Error>]) -> CommandResult {
        CommandResult::stderr(format_args!(
            "{} Hook generation failed:\n{}",
            output_utils::RED_X,
            errors.iter()
                .map(|e| format!("  * {e}"))
                .collect::<Vec<_>>()
                .join("\n"),
        ))
    }
}
