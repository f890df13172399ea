use crate::runner::CommandError;
use pudding_deps::ProjectType;
use thiserror::Error;

/// All the ways opening docs can go wrong
///
/// Every variant names the dependency (or tool) involved so the message
/// makes sense on its own when printed by the CLI.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unsupported project type: {0}")]
    UnsupportedProjectType(ProjectType),

    #[error("failed to fetch docs for {name}: {source}")]
    FetchDocs {
        name: String,
        #[source]
        source: CommandError,
    },

    #[error("failed to extract docs path for {name} from {output}")]
    DocsPathNotFound { name: String, output: String },

    #[error("failed to open docs for {name}: {source}")]
    OpenDocs {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to generate rdoc for {name}: {source}")]
    GenerateRdoc {
        name: String,
        #[source]
        source: CommandError,
    },

    #[error("failed to get gem env home: {0}")]
    GemEnvHome(#[source] CommandError),

    #[error("gem env home printed nothing")]
    EmptyGemHome,

    #[error("failed to open rdoc for {name}: {source}")]
    OpenRdoc {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no version known for {0}; rdoc is generated per installed gem version")]
    MissingVersion(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
