#![doc = include_str!("../README.md")]

// -------------------------------------------------------------------------------------------------

mod error;
mod generator;
mod parser;

// -------------------------------------------------------------------------------------------------

// re-export generator, model and error as public interface
pub use error::Error;
pub use generator::{
    convert, generate_docs,
    library::{Group, Library},
    options::Options,
};
pub use parser::{
    types::{DocTag, DocumentationSet, Kind, Member},
    xml::XmlDoc,
};
