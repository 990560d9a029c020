use std::path::Path;

use tracing::{debug, info, warn};

use crate::{
    error::Error,
    parser::{
        types::{DocumentationSet, Member},
        xml::XmlDoc,
    },
};

// -------------------------------------------------------------------------------------------------

/// A class and the non-class members which follow it in the export.
///
/// Members which appear before the first class form a group without a class.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Group {
    pub class: Option<Member>,
    pub members: Vec<Member>,
}

impl Group {
    /// The class, followed by its members.
    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.class.iter().chain(self.members.iter())
    }
}

// -------------------------------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Library {
    /// Name of the documented assembly, if any.
    pub title: Option<String>,
    pub groups: Vec<Group>,
}

impl Library {
    /// Load a library from the given XML documentation export.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        info!("Parsing documentation: '{}'", path.to_string_lossy());
        let set = XmlDoc::get(path)?;
        Ok(Self::from_set(set))
    }

    /// Group members of the given set into classes, preserving the source order.
    pub fn from_set(set: DocumentationSet) -> Self {
        let mut groups: Vec<Group> = vec![];
        for member in set.members {
            if member.sections().iter().all(|tag| tag.is_empty()) {
                warn!("member '{}' has no documentation", member.raw_name());
            }
            debug!(
                "{} '{}' with {} tags",
                member.kind().label(),
                member.long_name(),
                member.sections().len()
            );
            if member.kind().is_class() {
                groups.push(Group {
                    class: Some(member),
                    members: vec![],
                });
            } else if let Some(group) = groups.last_mut() {
                group.members.push(member);
            } else {
                groups.push(Group {
                    class: None,
                    members: vec![member],
                });
            }
        }
        Self {
            title: set.assembly,
            groups,
        }
    }

    /// All members in source order.
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.groups.iter().flat_map(Group::iter)
    }
}

// -------------------------------------------------------------------------------------------------
