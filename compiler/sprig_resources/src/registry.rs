//! Cross-reference between directives and the resource files they use.
//!
//! Produced during analysis and consumed mainly by external tooling, which
//! cannot work out "which components use this file" without compiler help.
//!
//! # Design
//!
//! - Forward indices: directive -> template, styles, host bindings
//! - Reverse indices: external path -> directives (templates and styles)
//! - Reverse entries are only added, never removed. A directive whose
//!   template moves to another path stays listed under the old one for the
//!   rest of the run.

use rustc_hash::{FxHashMap, FxHashSet};
use sprig_ir::{AbsPath, DeclId};

use crate::multimap::{MultiMap, SetView};
use crate::resource::{DirectiveResources, Resource};

/// Registry of template, style, and host-binding resources per directive.
///
/// One registry per analysis run. Registration and lookup never fail; an
/// unknown directive or path simply has nothing registered.
#[derive(Clone, Debug, Default)]
pub struct ResourceRegistry {
    /// Directive -> its current template (last registration wins).
    templates: FxHashMap<DeclId, Resource>,

    /// Template path -> components that ever used it.
    template_users: MultiMap<AbsPath, DeclId>,

    /// Directive -> every style registered for it (accumulates).
    styles: MultiMap<DeclId, Resource>,

    /// Style path -> directives that ever used it.
    style_users: MultiMap<AbsPath, DeclId>,

    /// Directive -> its current host-binding set (last registration wins).
    host_bindings: FxHashMap<DeclId, FxHashSet<Resource>>,
}

impl ResourceRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the resources of `directive`.
    ///
    /// - a template replaces any previous template
    /// - styles are added to those already registered
    /// - host bindings replace any previous host-binding set
    ///
    /// `None` slots leave the corresponding entry untouched.
    #[tracing::instrument(level = "trace", skip_all, fields(directive = ?directive))]
    pub fn register_resources(&mut self, resources: DirectiveResources, directive: DeclId) {
        let DirectiveResources {
            template,
            styles,
            host_bindings,
        } = resources;

        if let Some(template) = template {
            self.register_template(template, directive);
        }
        if let Some(styles) = styles {
            for style in styles {
                self.register_style(style, directive);
            }
        }
        if let Some(host_bindings) = host_bindings {
            self.host_bindings.insert(directive, host_bindings);
        }
    }

    fn register_template(&mut self, template: Resource, component: DeclId) {
        index_external(&mut self.template_users, &template, component);
        if let Some(previous) = self.templates.insert(component, template) {
            if previous.path != template.path {
                tracing::debug!(
                    ?component,
                    old = ?previous.path,
                    new = ?template.path,
                    "template replaced; old path keeps its reverse entry"
                );
            }
        }
    }

    fn register_style(&mut self, style: Resource, directive: DeclId) {
        index_external(&mut self.style_users, &style, directive);
        self.styles.insert(directive, style);
    }

    // === Lookup by path ===

    /// Components whose template was ever registered at `path`.
    pub fn components_with_template(&self, path: AbsPath) -> SetView<'_, DeclId> {
        self.template_users.get(&path)
    }

    /// Directives with at least one style ever registered at `path`.
    pub fn components_with_style(&self, path: AbsPath) -> SetView<'_, DeclId> {
        self.style_users.get(&path)
    }

    // === Lookup by directive ===

    /// The most recently registered template of `component`.
    #[inline]
    pub fn template(&self, component: DeclId) -> Option<&Resource> {
        self.templates.get(&component)
    }

    /// All styles registered for `directive` so far.
    pub fn styles(&self, directive: DeclId) -> SetView<'_, Resource> {
        self.styles.get(&directive)
    }

    /// The most recently registered host-binding set of `directive`.
    #[inline]
    pub fn host_bindings(&self, directive: DeclId) -> Option<&FxHashSet<Resource>> {
        self.host_bindings.get(&directive)
    }

    // === Iteration ===

    /// Every path that has been indexed as an external template.
    pub fn template_paths(&self) -> impl Iterator<Item = AbsPath> + '_ {
        self.template_users.keys().copied()
    }

    /// Every path that has been indexed as an external style.
    pub fn style_paths(&self) -> impl Iterator<Item = AbsPath> + '_ {
        self.style_users.keys().copied()
    }
}

/// Index `directive` under the resource's path if it has one.
///
/// Both template and style registration funnel through here so that every
/// external resource held in a forward index is also reachable from its path.
fn index_external(users: &mut MultiMap<AbsPath, DeclId>, resource: &Resource, directive: DeclId) {
    let Some(path) = resource.path else {
        return;
    };
    if users.insert(path, directive) {
        tracing::trace!(?path, ?directive, "indexed external resource");
    }
}

#[cfg(test)]
mod tests;
