use crate::{generator::library::Library, parser::types::Member};

// -------------------------------------------------------------------------------------------------

/// Anchor used to link to a member: the display name, lowercased, with spaces as hyphens.
pub(crate) fn anchor_slug(display_name: &str) -> String {
    display_name.to_lowercase().replace(' ', "-")
}

// -------------------------------------------------------------------------------------------------

#[derive(Clone, Debug)]
pub(crate) struct TocEntry {
    pub link: String,
}

impl TocEntry {
    /// Numbered top-level entry for classes, unordered sub item for everything else.
    pub fn from(member: &Member, number: Option<usize>) -> Self {
        let prefix = match number {
            Some(number) => format!("\n{}. ", number),
            None => "- ".to_string(),
        };
        let link = format!(
            "{}[{}](#{})\n",
            prefix,
            member.long_name(),
            anchor_slug(member.display_name())
        );
        Self { link }
    }
}

// -------------------------------------------------------------------------------------------------

/// Render the features list of all members in the library.
pub(crate) fn features_list(library: &Library) -> String {
    let mut content = String::new();
    let mut class_count = 0;
    for member in library.members() {
        let number = member.kind().is_class().then(|| {
            class_count += 1;
            class_count
        });
        content.push_str(&TocEntry::from(member, number).link);
    }
    content
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::types::{DocTag, DocumentationSet};

    fn library(names: &[(&str, Option<&str>)]) -> Library {
        let members = names
            .iter()
            .map(|(raw_name, name)| {
                let tags = name
                    .map(|name| vec![DocTag::Name(name.to_string())])
                    .unwrap_or_default();
                Member::new(raw_name, tags).unwrap()
            })
            .collect();
        Library::from_set(DocumentationSet {
            assembly: None,
            members,
        })
    }

    #[test]
    fn slugs() {
        assert_eq!(anchor_slug("Bar"), "bar");
        assert_eq!(anchor_slug("Foo.Bar.Baz"), "foo.bar.baz");
        assert_eq!(anchor_slug("My Fancy Class"), "my-fancy-class");
        assert_eq!(anchor_slug("My Fancy Class"), anchor_slug("My Fancy Class"));
    }

    #[test]
    fn numbered_classes() {
        let library = library(&[
            ("T:Foo.Bar", Some("Bar")),
            ("M:Foo.Bar.Baz", None),
            ("P:Foo.Bar.Size", None),
            ("T:Foo.Qux", None),
            ("T:Foo.Quux", Some("The Quux")),
            ("F:Foo.Quux.Field", None),
        ]);
        assert_eq!(
            features_list(&library),
            "\n1. [Foo.Bar](#bar)\n\
             - [Foo.Bar.Baz](#foo.bar.baz)\n\
             - [Foo.Bar.Size](#foo.bar.size)\n\
             \n2. [Foo.Qux](#foo.qux)\n\
             \n3. [Foo.Quux](#the-quux)\n\
             - [Foo.Quux.Field](#foo.quux.field)\n"
        );
    }

    #[test]
    fn members_before_any_class() {
        let library = library(&[("M:Free", None), ("T:Foo", None)]);
        assert_eq!(features_list(&library), "- [Free](#free)\n\n1. [Foo](#foo)\n");
    }

    #[test]
    fn empty_library() {
        assert_eq!(features_list(&Library::default()), "");
    }
}
