use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

use crate::error::Error;

// -------------------------------------------------------------------------------------------------

/// The symbol category encoded in the first character of a member's raw name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Class,
    Method,
    Property,
    Field,
    Event,
    Namespace,
}

impl Kind {
    /// Map a compiler kind tag to a kind, if it is one we support.
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'T' => Some(Self::Class),
            'M' => Some(Self::Method),
            'P' => Some(Self::Property),
            'F' => Some(Self::Field),
            'E' => Some(Self::Event),
            'N' => Some(Self::Namespace),
            _ => None,
        }
    }

    /// Human readable label of the kind.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Method => "method",
            Self::Property => "property",
            Self::Field => "field",
            Self::Event => "event",
            Self::Namespace => "namespace",
        }
    }

    pub fn is_class(&self) -> bool {
        matches!(self, Self::Class)
    }
}

// -------------------------------------------------------------------------------------------------

/// One nested documentation element of a member.
///
/// Texts are stored normalized: trimmed, with continuation line indentation removed
/// (or dedented for code blocks).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocTag {
    Name(String),
    Summary(String),
    Param { name: String, text: String },
    TypeParam { name: String, text: String },
    Returns(String),
    Remarks(String),
    Code(String),
    InlineCode(String),
    Example(String),
    Value(String),
    Exception { cref: String, text: String },
    SeeAlso { cref: String },
    /// Any tag we have no template for, or a two-slot tag which lacks its attribute.
    Other { tag: String, text: String },
}

impl DocTag {
    /// Create a tag from its XML tag name, the value of its first attribute and its inner text.
    pub fn from_parts(tag_name: &str, attribute: Option<&str>, text: &str) -> Self {
        match (tag_name, attribute.map(str::to_string)) {
            ("name", _) => Self::Name(normalize_text(text)),
            ("summary", _) => Self::Summary(normalize_text(text)),
            ("param", Some(name)) => Self::Param {
                name,
                text: normalize_text(text),
            },
            ("typeparam", Some(name)) => Self::TypeParam {
                name,
                text: normalize_text(text),
            },
            ("returns", _) => Self::Returns(normalize_text(text)),
            ("remarks", _) => Self::Remarks(normalize_text(text)),
            ("code", _) => Self::Code(normalize_code(text)),
            ("c", _) => Self::InlineCode(normalize_text(text)),
            ("example", _) => Self::Example(normalize_text(text)),
            ("value", _) => Self::Value(normalize_text(text)),
            ("exception", Some(cref)) => Self::Exception {
                cref,
                text: normalize_text(text),
            },
            ("seealso", Some(cref)) => Self::SeeAlso { cref },
            (tag, _) => Self::Other {
                tag: tag.to_string(),
                text: normalize_text(text),
            },
        }
    }

    /// The (normalized) text content of the tag.
    pub fn text(&self) -> &str {
        match self {
            Self::Name(text)
            | Self::Summary(text)
            | Self::Returns(text)
            | Self::Remarks(text)
            | Self::Code(text)
            | Self::InlineCode(text)
            | Self::Example(text)
            | Self::Value(text) => text,
            Self::Param { text, .. }
            | Self::TypeParam { text, .. }
            | Self::Exception { text, .. }
            | Self::Other { text, .. } => text,
            Self::SeeAlso { .. } => "",
        }
    }

    /// true when rendering the tag would produce no content.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Param { .. }
            | Self::TypeParam { .. }
            | Self::Exception { .. }
            | Self::SeeAlso { .. } => false,
            _ => self.text().is_empty(),
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// One documented symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    raw_name: String,
    kind: Kind,
    sections: Vec<DocTag>,
}

impl Member {
    /// Create a new member from its compiler assigned raw name, e.g. `T:Foo.Bar`.
    pub fn new(raw_name: &str, sections: Vec<DocTag>) -> Result<Self, Error> {
        let mut chars = raw_name.chars();
        let tag = chars
            .next()
            .ok_or_else(|| Error::MalformedMember("member has an empty name".to_string()))?;
        let kind = Kind::from_tag(tag).ok_or_else(|| Error::UnrecognizedKindTag {
            name: raw_name.to_string(),
            tag,
        })?;
        if chars.next() != Some(':') || chars.as_str().is_empty() {
            return Err(Error::MalformedMember(format!(
                "`{}` is not of the form `<kind>:<name>`",
                raw_name
            )));
        }
        Ok(Self {
            raw_name: raw_name.to_string(),
            kind,
            sections,
        })
    }

    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn sections(&self) -> &[DocTag] {
        &self.sections
    }

    /// The raw name without its kind prefix, e.g. `Foo.Bar.Baz(System.Int32)`.
    pub fn long_name(&self) -> &str {
        // kind tags are ASCII, so the prefix is always two bytes long
        &self.raw_name[2..]
    }

    /// Text of the explicit `name` tag, if there is a non empty one.
    pub fn name_tag(&self) -> Option<&str> {
        self.sections.iter().find_map(|tag| match tag {
            DocTag::Name(name) if !name.is_empty() => Some(name.as_str()),
            _ => None,
        })
    }

    /// The explicit short name or the long name.
    pub fn display_name(&self) -> &str {
        self.name_tag().unwrap_or(self.long_name())
    }

    /// Last segment of the qualified name, keeping the parameter list, e.g. `Baz(System.Int32)`.
    ///
    /// Constructors (`#ctor`, `#cctor`) are named after their containing type.
    pub fn short_name(&self) -> String {
        let long_name = self.long_name();
        let (qualified, params) = long_name.split_at(long_name.find('(').unwrap_or(long_name.len()));
        let mut segments = qualified.rsplit(['.', '+']);
        let name = segments.next().unwrap_or_default();
        if name.starts_with('#') {
            if let Some(type_name) = segments.next().filter(|name| !name.is_empty()) {
                return format!("{}{}", type_name, params);
            }
        }
        format!("{}{}", name, params)
    }
}

// -------------------------------------------------------------------------------------------------

/// All members of a documentation export, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentationSet {
    /// Name of the documented assembly, when the export names one.
    pub assembly: Option<String>,
    pub members: Vec<Member>,
}

// -------------------------------------------------------------------------------------------------

static LINE_INDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]+").expect("invalid line indent regex"));

fn normalize_text(text: &str) -> String {
    LINE_INDENT.replace_all(text.trim(), "").into_owned()
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn indent_of(line: &str) -> usize {
    line.bytes()
        .take_while(|b| *b == b' ' || *b == b'\t')
        .count()
}

// dedent code, so relative indentation survives
fn normalize_code(text: &str) -> String {
    let lines = text
        .lines()
        .skip_while(|line| is_blank(line))
        .collect::<Vec<_>>();
    let indent = lines
        .iter()
        .filter(|line| !is_blank(line))
        .map(|line| indent_of(line))
        .min()
        .unwrap_or(0);
    lines
        .iter()
        .map(|line| if is_blank(line) { "" } else { &line[indent..] })
        .join("\n")
        .trim_end()
        .to_string()
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_table() {
        assert_eq!(Kind::from_tag('T'), Some(Kind::Class));
        assert_eq!(Kind::from_tag('M'), Some(Kind::Method));
        assert_eq!(Kind::from_tag('P').map(|k| k.label()), Some("property"));
        assert_eq!(Kind::from_tag('!'), None);
        assert_eq!(Kind::from_tag('t'), None);
        assert!(Kind::Class.is_class());
        assert!(!Kind::Method.is_class());
    }

    #[test]
    fn member_names() {
        let member = Member::new("M:Foo.Bar.Baz(System.Int32)", vec![]).unwrap();
        assert_eq!(member.kind(), Kind::Method);
        assert_eq!(member.long_name(), "Foo.Bar.Baz(System.Int32)");
        assert_eq!(member.display_name(), "Foo.Bar.Baz(System.Int32)");
        assert_eq!(member.short_name(), "Baz(System.Int32)");

        let member = Member::new("T:Foo.Bar", vec![DocTag::Name("Bar".to_string())]).unwrap();
        assert_eq!(member.display_name(), "Bar");
        assert_eq!(member.short_name(), "Bar");

        let member = Member::new("T:Global", vec![]).unwrap();
        assert_eq!(member.short_name(), "Global");

        let member = Member::new("M:Foo.Bar.#ctor(System.Double)", vec![]).unwrap();
        assert_eq!(member.short_name(), "Bar(System.Double)");

        let member = Member::new("M:Foo.Registry`1.#cctor", vec![]).unwrap();
        assert_eq!(member.short_name(), "Registry`1");

        let member = Member::new("M:#ctor", vec![]).unwrap();
        assert_eq!(member.short_name(), "#ctor");
    }

    #[test]
    fn empty_name_tag_falls_back_to_long_name() {
        let member = Member::new(
            "T:Foo.Bar",
            vec![
                DocTag::from_parts("name", None, "  "),
                DocTag::Name("Later".to_string()),
            ],
        )
        .unwrap();
        assert_eq!(member.name_tag(), Some("Later"));

        let member = Member::new("T:Foo.Bar", vec![DocTag::from_parts("name", None, "")]).unwrap();
        assert_eq!(member.name_tag(), None);
        assert_eq!(member.display_name(), "Foo.Bar");
    }

    #[test]
    fn invalid_member_names() {
        assert!(matches!(
            Member::new("X:Foo", vec![]),
            Err(Error::UnrecognizedKindTag { tag: 'X', .. })
        ));
        assert!(matches!(
            Member::new("!:Broken", vec![]),
            Err(Error::UnrecognizedKindTag { tag: '!', .. })
        ));
        assert!(matches!(
            Member::new("", vec![]),
            Err(Error::MalformedMember(_))
        ));
        assert!(matches!(
            Member::new("TFoo", vec![]),
            Err(Error::MalformedMember(_))
        ));
        assert!(matches!(
            Member::new("T:", vec![]),
            Err(Error::MalformedMember(_))
        ));
    }

    #[test]
    fn tags_from_parts() {
        assert_eq!(
            DocTag::from_parts("param", Some("x"), " the input "),
            DocTag::Param {
                name: "x".to_string(),
                text: "the input".to_string()
            }
        );
        // two-slot tags need their attribute
        assert_eq!(
            DocTag::from_parts("param", None, "orphan"),
            DocTag::Other {
                tag: "param".to_string(),
                text: "orphan".to_string()
            }
        );
        // single-slot tags ignore attributes
        assert_eq!(
            DocTag::from_parts("summary", Some("ignored"), "Does X."),
            DocTag::Summary("Does X.".to_string())
        );
        assert_eq!(
            DocTag::from_parts("inheritdoc", None, ""),
            DocTag::Other {
                tag: "inheritdoc".to_string(),
                text: String::new()
            }
        );
        assert!(DocTag::from_parts("returns", None, "  \n ").is_empty());
        assert!(!DocTag::from_parts("seealso", Some("T:Foo"), "").is_empty());
    }

    #[test]
    fn text_normalization() {
        assert_eq!(
            normalize_text("\n            First line\n            second line.\n        "),
            "First line\nsecond line."
        );
        assert_eq!(
            normalize_code("\n    if (x)\n    {\n        y();\n    }\n  "),
            "if (x)\n{\n    y();\n}"
        );
        assert_eq!(normalize_code("  var x = 1;  "), "var x = 1;");
        assert_eq!(normalize_code(""), "");
    }
}
