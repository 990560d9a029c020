pub(crate) mod library;
pub(crate) mod options;
pub(crate) mod render;
pub(crate) mod toc;

// -------------------------------------------------------------------------------------------------

use std::{fs, path::PathBuf};

use tracing::info;

use crate::{
    error::Error,
    generator::{
        library::Library,
        options::Options,
        render::{h1, h2},
        toc::features_list,
    },
};

// -------------------------------------------------------------------------------------------------

/// Convert the XML documentation export with the given [`Options`](options::Options).
///
/// The whole export is parsed before anything gets written, so a failing input never
/// leaves a partial markdown file behind. Returns the path of the written file.
pub fn generate_docs(options: &Options) -> Result<PathBuf, Error> {
    let library = Library::from_path(&options.input)?;
    let content = convert(&library, &options.lang);

    let path = options.output_path();
    info!("Creating '{}'", path.to_string_lossy());
    fs::write(&path, content).map_err(|source| Error::OutputWriteFailure {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Render the whole markdown document: an optional assembly title, the features list and
/// the documentation of all members. `lang` is used for fenced code blocks.
pub fn convert(library: &Library, lang: &str) -> String {
    let mut content = String::new();
    if let Some(title) = &library.title {
        content.push_str(&h1(title));
        content.push_str("\n\n");
    }
    content.push_str(&h2("Features List"));
    content.push('\n');
    content.push_str(&features_list(library));
    content.push('\n');
    content.push_str(&h2("Doc"));
    content.push_str("\n\n");
    content.push_str(&library.export_docs(lang));
    content
}

// -------------------------------------------------------------------------------------------------
