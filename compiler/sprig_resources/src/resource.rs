//! Resource references as they appear in class metadata.

use rustc_hash::FxHashSet;
use sprig_ir::{AbsPath, NodeId};

/// One reference to a template, style sheet, or host-binding source.
///
/// A resource with no `path` is inline: its content sits in the class
/// metadata itself. `node` points at the expression that produced the
/// reference and is only carried through for diagnostics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Resource {
    pub path: Option<AbsPath>,
    pub node: NodeId,
}

impl Resource {
    /// Resource embedded in the class metadata.
    #[inline]
    pub const fn inline(node: NodeId) -> Self {
        Resource { path: None, node }
    }

    /// Resource loaded from a separate file.
    #[inline]
    pub const fn external(path: AbsPath, node: NodeId) -> Self {
        Resource {
            path: Some(path),
            node,
        }
    }

    /// A resource is external iff it has a path.
    #[inline]
    pub const fn is_external(&self) -> bool {
        self.path.is_some()
    }

    /// Narrow to an `ExternalResource`, or `None` if inline.
    #[inline]
    pub fn as_external(&self) -> Option<ExternalResource> {
        self.path.map(|path| ExternalResource {
            path,
            node: self.node,
        })
    }
}

/// A resource known to live in its own file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ExternalResource {
    path: AbsPath,
    node: NodeId,
}

impl ExternalResource {
    #[inline]
    pub const fn new(path: AbsPath, node: NodeId) -> Self {
        ExternalResource { path, node }
    }

    #[inline]
    pub const fn path(&self) -> AbsPath {
        self.path
    }

    #[inline]
    pub const fn node(&self) -> NodeId {
        self.node
    }
}

impl From<ExternalResource> for Resource {
    fn from(resource: ExternalResource) -> Self {
        Resource::external(resource.path, resource.node)
    }
}

/// Inline and external resources of one directive.
///
/// Components carry a template; plain directives leave it `None`. A `None`
/// slot means "nothing to register", which is different from an empty set
/// for host bindings: an empty set still replaces what was there before.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectiveResources {
    pub template: Option<Resource>,
    pub styles: Option<FxHashSet<Resource>>,
    pub host_bindings: Option<FxHashSet<Resource>>,
}

impl DirectiveResources {
    /// Resources of a component with the given template.
    pub fn component(template: Resource) -> Self {
        DirectiveResources {
            template: Some(template),
            ..Self::default()
        }
    }

    /// Resources of a template-less directive.
    pub fn directive() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_styles(mut self, styles: impl IntoIterator<Item = Resource>) -> Self {
        self.styles = Some(styles.into_iter().collect());
        self
    }

    #[must_use]
    pub fn with_host_bindings(mut self, bindings: impl IntoIterator<Item = Resource>) -> Self {
        self.host_bindings = Some(bindings.into_iter().collect());
        self
    }
}
