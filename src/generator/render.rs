use tracing::debug;

use crate::{
    generator::{library::Library, toc::anchor_slug},
    parser::types::{DocTag, Member},
};

// -------------------------------------------------------------------------------------------------

impl Library {
    /// render the documentation body of all members in source order
    pub fn export_docs(&self, lang: &str) -> String {
        let mut content = String::new();
        for member in self.members() {
            content.push_str(&member.render(lang));
        }
        content
    }
}

// -------------------------------------------------------------------------------------------------

pub(crate) fn heading(text: &str, level: usize) -> String {
    format!("{} {}", "#".repeat(level), text)
}

pub(crate) fn h1(text: &str) -> String {
    heading(text, 1)
}

pub(crate) fn h2(text: &str) -> String {
    heading(text, 2)
}

fn hash(text: &str, hash: &str) -> String {
    format!("{}<a name=\"{}\"></a>", text, hash)
}

fn inline_code(text: &str) -> String {
    format!("`{}`", text)
}

fn code_block(lang: &str, code: &str) -> String {
    format!("```{}\n{}\n```", lang, code)
}

// -------------------------------------------------------------------------------------------------

impl DocTag {
    fn render(&self, heading_level: usize, lang: &str) -> String {
        match self {
            DocTag::Name(name) => heading(name, heading_level),
            DocTag::Summary(text) => text.clone(),
            DocTag::Param { name, text } => format!("- {}: {}", name, text),
            DocTag::TypeParam { name, text } => format!("- Type parameter {}: {}", name, text),
            DocTag::Returns(text) => format!("Returns: {}", text),
            DocTag::Remarks(text) => format!("Remarks: {}", text),
            DocTag::Code(code) => code_block(lang, code),
            DocTag::InlineCode(text) => inline_code(text),
            DocTag::Example(text) => format!("Example:\n{}", text),
            DocTag::Value(text) => format!("Value: {}", text),
            DocTag::Exception { cref, text } => format!("- Throws {}: {}", cref, text),
            DocTag::SeeAlso { cref } => format!("See also: {}", cref),
            DocTag::Other { tag, text } => {
                debug!("no template for tag '{}', rendering it as plain text", tag);
                text.clone()
            }
        }
    }
}

// -------------------------------------------------------------------------------------------------

impl Member {
    /// Classes use level 3 headings, all other members nest below them with level 4.
    fn heading_level(&self) -> usize {
        if self.kind().is_class() {
            3
        } else {
            4
        }
    }

    pub fn render(&self, lang: &str) -> String {
        let level = self.heading_level();
        let mut content = String::new();
        if self.name_tag().is_none() {
            content.push_str(&hash(
                &heading(&self.short_name(), level),
                &anchor_slug(self.display_name()),
            ));
            content.push_str("\n\n");
        }
        for tag in self.sections().iter().filter(|tag| !tag.is_empty()) {
            content.push_str(tag.render(level, lang).trim());
            content.push_str("\n\n");
        }
        content
    }
}

// -------------------------------------------------------------------------------------------------
