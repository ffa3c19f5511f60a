use super::*;
use pretty_assertions::assert_eq;
use sprig_ir::{NodeId, PathInterner};

fn node(n: u32) -> NodeId {
    NodeId::new(n)
}

fn decl(n: u32) -> DeclId {
    DeclId::new(n)
}

fn sorted(view: SetView<'_, DeclId>) -> Vec<DeclId> {
    let mut decls: Vec<DeclId> = view.iter().copied().collect();
    decls.sort();
    decls
}

#[test]
fn unregistered_directive_has_nothing() {
    let registry = ResourceRegistry::new();
    let cmp = decl(0);

    assert_eq!(registry.template(cmp), None);
    assert!(registry.styles(cmp).is_empty());
    assert_eq!(registry.host_bindings(cmp), None);
}

#[test]
fn unused_path_has_no_components() {
    let paths = PathInterner::new();
    let mut registry = ResourceRegistry::new();
    let used = paths.intern("/app/used.html");
    let unused = paths.intern("/app/unused.html");

    registry.register_resources(
        DirectiveResources::component(Resource::external(used, node(0))),
        decl(0),
    );

    assert!(registry.components_with_template(unused).is_empty());
    assert!(registry.components_with_style(unused).is_empty());
    // A template path is not a style path
    assert!(registry.components_with_style(used).is_empty());
}

#[test]
fn external_template_is_indexed_both_ways() {
    let paths = PathInterner::new();
    let mut registry = ResourceRegistry::new();
    let html = paths.intern("/app/cmp.html");
    let template = Resource::external(html, node(1));
    let cmp = decl(1);

    registry.register_resources(DirectiveResources::component(template), cmp);

    assert_eq!(registry.template(cmp), Some(&template));
    assert!(registry.components_with_template(html).contains(&cmp));
    assert_eq!(registry.template_paths().collect::<Vec<_>>(), vec![html]);
}

#[test]
fn inline_template_is_never_path_indexed() {
    let mut registry = ResourceRegistry::new();
    let template = Resource::inline(node(1));
    let cmp = decl(1);

    registry.register_resources(DirectiveResources::component(template), cmp);

    assert_eq!(registry.template(cmp), Some(&template));
    assert_eq!(registry.template_paths().count(), 0);
    assert_eq!(registry.style_paths().count(), 0);
}

#[test]
fn styles_accumulate_across_registrations() {
    let paths = PathInterner::new();
    let mut registry = ResourceRegistry::new();
    let cmp = decl(2);
    let s1 = Resource::external(paths.intern("/app/a.css"), node(1));
    let s2 = Resource::inline(node(2));
    let s3 = Resource::external(paths.intern("/app/b.css"), node(3));

    registry.register_resources(DirectiveResources::directive().with_styles([s1, s2]), cmp);
    registry.register_resources(DirectiveResources::directive().with_styles([s3]), cmp);

    let expected: FxHashSet<Resource> = [s1, s2, s3].into_iter().collect();
    assert_eq!(registry.styles(cmp).to_set(), expected);
}

#[test]
fn template_is_overwritten_but_old_path_keeps_entry() {
    let paths = PathInterner::new();
    let mut registry = ResourceRegistry::new();
    let old_html = paths.intern("/app/old.html");
    let new_html = paths.intern("/app/new.html");
    let r1 = Resource::external(old_html, node(1));
    let r2 = Resource::external(new_html, node(2));
    let cmp = decl(3);

    registry.register_resources(DirectiveResources::component(r1), cmp);
    registry.register_resources(DirectiveResources::component(r2), cmp);

    assert_eq!(registry.template(cmp), Some(&r2));
    assert!(registry.components_with_template(new_html).contains(&cmp));
    assert!(registry.components_with_template(old_html).contains(&cmp));
}

#[test]
fn host_bindings_are_replaced() {
    let mut registry = ResourceRegistry::new();
    let dir = decl(4);
    let h1 = Resource::inline(node(1));
    let h2 = Resource::inline(node(2));

    registry.register_resources(DirectiveResources::directive().with_host_bindings([h1]), dir);
    registry.register_resources(DirectiveResources::directive().with_host_bindings([h2]), dir);

    let expected: FxHashSet<Resource> = [h2].into_iter().collect();
    assert_eq!(registry.host_bindings(dir), Some(&expected));
}

#[test]
fn absent_slots_leave_entries_untouched() {
    let mut registry = ResourceRegistry::new();
    let dir = decl(5);
    let template = Resource::inline(node(1));
    let binding = Resource::inline(node(2));

    registry.register_resources(
        DirectiveResources::component(template).with_host_bindings([binding]),
        dir,
    );
    registry.register_resources(DirectiveResources::directive(), dir);

    assert_eq!(registry.template(dir), Some(&template));
    assert_eq!(registry.host_bindings(dir).map(FxHashSet::len), Some(1));
}

#[test]
fn empty_host_binding_set_still_replaces() {
    let mut registry = ResourceRegistry::new();
    let dir = decl(6);

    registry.register_resources(
        DirectiveResources::directive().with_host_bindings([Resource::inline(node(1))]),
        dir,
    );
    registry.register_resources(
        DirectiveResources::directive().with_host_bindings(std::iter::empty()),
        dir,
    );

    assert_eq!(registry.host_bindings(dir).map(FxHashSet::len), Some(0));
}

#[test]
fn shared_style_path_lists_every_user() {
    let paths = PathInterner::new();
    let mut registry = ResourceRegistry::new();
    let theme = paths.intern("/app/theme.css");
    let c1 = decl(7);
    let c2 = decl(8);

    registry.register_resources(
        DirectiveResources::directive().with_styles([Resource::external(theme, node(1))]),
        c1,
    );
    registry.register_resources(
        DirectiveResources::directive().with_styles([Resource::external(theme, node(2))]),
        c2,
    );

    assert_eq!(sorted(registry.components_with_style(theme)), vec![c1, c2]);
    assert_eq!(registry.style_paths().collect::<Vec<_>>(), vec![theme]);
}

#[test]
fn same_path_as_template_and_style_is_indexed_separately() {
    let paths = PathInterner::new();
    let mut registry = ResourceRegistry::new();
    let file = paths.intern("/app/shared.txt");
    let cmp = decl(9);
    let dir = decl(10);

    registry.register_resources(
        DirectiveResources::component(Resource::external(file, node(1))),
        cmp,
    );
    registry.register_resources(
        DirectiveResources::directive().with_styles([Resource::external(file, node(2))]),
        dir,
    );

    assert_eq!(sorted(registry.components_with_template(file)), vec![cmp]);
    assert_eq!(sorted(registry.components_with_style(file)), vec![dir]);
}

#[test]
fn fresh_registry_starts_empty() {
    let paths = PathInterner::new();
    let html = paths.intern("/app/cmp.html");
    let cmp = decl(11);

    let mut first_run = ResourceRegistry::new();
    first_run.register_resources(
        DirectiveResources::component(Resource::external(html, node(1))),
        cmp,
    );

    let second_run = ResourceRegistry::new();
    assert!(second_run.components_with_template(html).is_empty());
    assert_eq!(second_run.template(cmp), None);
}
