use std::path::PathBuf;

// -------------------------------------------------------------------------------------------------

/// Options for the markdown converter.
///
/// Includes clap argument definitions, when using the converter from the command line.
#[derive(clap::Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Options {
    /// XML documentation file, as exported by the compiler.
    #[arg(name = "input_path")]
    pub input: PathBuf,
    /// Markdown file to write. Defaults to the input path with a `.md` extension.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Language of fenced code blocks.
    #[arg(long, default_value = "csharp")]
    pub lang: String,
    /// Log debug details to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Options {
    /// Default options for the given input file.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            lang: "csharp".to_string(),
            verbose: false,
        }
    }

    /// Path of the resulting markdown file.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("md"))
    }
}

// -------------------------------------------------------------------------------------------------
