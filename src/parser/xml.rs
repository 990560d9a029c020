use std::{fs, path::Path};

use roxmltree::{Document, Node, ParsingOptions};

use crate::{
    error::Error,
    parser::types::{DocTag, DocumentationSet, Member},
};

// -------------------------------------------------------------------------------------------------

pub struct XmlDoc {}

impl XmlDoc {
    /// Load and parse a documentation export from a file
    pub fn get(path: &Path) -> Result<DocumentationSet, Error> {
        if !path.exists() {
            return Err(Error::InputNotFound(path.to_path_buf()));
        }
        let xml = fs::read_to_string(path).map_err(|source| Error::InputUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&xml)
    }

    /// Parse a documentation export from a string
    pub fn parse(xml: &str) -> Result<DocumentationSet, Error> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(xml, options)?;
        let members = doc
            .descendants()
            .filter(|node| node.has_tag_name("member"))
            .map(Self::member)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DocumentationSet {
            assembly: assembly_name(&doc),
            members,
        })
    }

    fn member(node: Node<'_, '_>) -> Result<Member, Error> {
        let raw_name = node.attribute("name").ok_or_else(|| {
            Error::MalformedMember("member element without a `name` attribute".to_string())
        })?;
        let sections = node
            .children()
            .filter(Node::is_element)
            .map(|child| {
                let attribute = child.attributes().next().map(|attr| attr.value());
                DocTag::from_parts(child.tag_name().name(), attribute, &inner_text(child))
            })
            .collect();
        Member::new(raw_name, sections)
    }
}

// -------------------------------------------------------------------------------------------------

fn assembly_name(doc: &Document<'_>) -> Option<String> {
    let assembly_node = doc
        .descendants()
        .find(|node| node.has_tag_name("assembly"))?;
    let name_node = assembly_node
        .children()
        .find(|node| node.has_tag_name("name"))?;
    let name = inner_text(name_node).trim().to_string();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

// concatenated text of all descendants, as the XML DOM's "inner text", with
// references which carry no text of their own rendered as inline code
fn inner_text(node: Node<'_, '_>) -> String {
    node.children().map(inline_text).collect()
}

fn inline_text(node: Node<'_, '_>) -> String {
    if node.is_text() {
        return node.text().unwrap_or_default().to_string();
    }
    if !node.is_element() {
        return String::new();
    }
    let text = inner_text(node);
    if !text.trim().is_empty() {
        return text;
    }
    let target = match node.tag_name().name() {
        "see" | "seealso" => node
            .attribute("cref")
            .or_else(|| node.attribute("href"))
            .or_else(|| node.attribute("langword")),
        "paramref" | "typeparamref" => node.attribute("name"),
        _ => None,
    };
    match target.map(str::trim) {
        Some(target) if !target.is_empty() => format!("`{}`", strip_kind_prefix(target)),
        _ => text,
    }
}

// `T:Foo.Baz` -> `Foo.Baz`
fn strip_kind_prefix(cref: &str) -> &str {
    match cref.split_once(':') {
        Some((kind, name)) if kind.len() == 1 => name,
        _ => cref,
    }
}

// -------------------------------------------------------------------------------------------------
