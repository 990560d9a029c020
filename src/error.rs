use std::path::PathBuf;

/// The errors that may happen when running the converter.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid options: `{0}`")]
    Options(String),

    #[error("input file does not exist: `{}`", .0.to_string_lossy())]
    InputNotFound(PathBuf),

    #[error("unable to read input file `{}`", .path.to_string_lossy())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input is not well-formed XML")]
    MalformedInput(#[from] roxmltree::Error),

    #[error("malformed member: {0}")]
    MalformedMember(String),

    #[error("unrecognized kind tag `{tag}` in member `{name}`")]
    UnrecognizedKindTag { name: String, tag: char },

    #[error("unable to write output file `{}`", .path.to_string_lossy())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
