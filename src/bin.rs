use clap::Parser;
use tracing::Level;

use xmldoc_md::{generate_docs, Error, Options};

// -------------------------------------------------------------------------------------------------

fn main() -> Result<(), Error> {
    // get and validate args
    let options = Options::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(if options.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();
    if let Some(parent) = options.output.as_deref().and_then(|output| output.parent()) {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(Error::Options(format!(
                "output directory does not exist: `{}`",
                parent.to_string_lossy(),
            )));
        }
    }
    // convert with options from args...
    generate_docs(&options)?;
    Ok(())
}
