//! State method and update-command generation.
//!
//! Five synthesizers, each a pure function of the model:
//! - [`generate_has_state`]: the state presence marker
//! - [`generate_transfer_state`]: copying state into a new component generation
//! - [`generate_on_state_update_methods`]: sync/async update entry points
//! - [`generate_state_update_classes`]: update-command types and their constructors
//! - [`generate_lazy_state_update_methods`]: lazy single-field updaters
//!
//! The model must have passed [`SpecModel::validate`].

use stately_model::{member_name, MethodParam, SpecModel, StateField, UpdateStateMethod};

use crate::artifact::{ArtifactSet, Placement};
use crate::emit::RustFile;
use crate::naming::{
    create_state_update_fn_name, entry_point_name, lazy_update_fn_name, state_update_type_name,
    LAZY_UPDATE_VALUE_PARAM, SPEC_FIELD, STATE_CONTAINER_FIELD,
};
use crate::paths::{RuntimePaths, ARC, BOX, CLONE, SEND, SOME};

/// Emits `has_state` returning `true` when the model declares state and asks
/// for the marker. Otherwise nothing; the runtime default answers `false`.
pub fn generate_has_state(model: &SpecModel) -> ArtifactSet {
    let mut artifacts = ArtifactSet::new();

    if model.generate_has_state && model.has_state() {
        let mut f = RustFile::fragment(1);
        f.open("fn has_state(&self) -> bool");
        f.line("true");
        f.close();
        artifacts.push_method("has_state", Placement::ComponentState, f.finish());
    }

    artifacts
}

/// Emits `transfer_state`, copying every state field from the previous
/// generation's container into this component's container, in declaration
/// order.
pub fn generate_transfer_state(model: &SpecModel) -> ArtifactSet {
    let mut artifacts = ArtifactSet::new();
    if !model.has_state() {
        return artifacts;
    }

    let paths = RuntimePaths::new(model);
    let container = model.state_container_name();

    let mut f = RustFile::fragment(1);
    f.line("fn transfer_state(");
    f.indent();
    f.line("&mut self,");
    f.line(&format!("_context: &{},", paths.context));
    f.line(&format!(
        "prev_state_container: &dyn {},",
        paths.state_container
    ));
    f.dedent();
    f.open(&format!(") -> {}", paths.update_result()));
    f.line(&format!(
        "let prev_state_container = {}::<{container}>(prev_state_container)?;",
        paths.item("downcast_container")
    ));
    for state_value in &model.state_values {
        f.line(&format!(
            "self.{STATE_CONTAINER_FIELD}.{name} = {CLONE}(&prev_state_container.{name});",
            name = state_value.name
        ));
    }
    f.line("Ok(())");
    f.close();

    artifacts.push_method("transfer_state", Placement::ComponentState, f.finish());
    artifacts
}

/// Emits, for every update-state method, the synchronous entry point and
/// its `_async` twin. Stateless models get none: there is no state to update.
pub fn generate_on_state_update_methods(model: &SpecModel) -> ArtifactSet {
    let mut artifacts = ArtifactSet::new();
    if !model.has_state() {
        return artifacts;
    }
    for method in &model.update_state_methods {
        artifacts.extend(generate_on_state_update_method(model, method, false));
        artifacts.extend(generate_on_state_update_method(model, method, true));
    }
    artifacts
}

/// Emits one entry point. It resolves the context's component scope
/// (returning silently when detached), builds the update command from the
/// captured arguments only, and dispatches it.
pub fn generate_on_state_update_method(
    model: &SpecModel,
    method: &UpdateStateMethod,
    is_async: bool,
) -> ArtifactSet {
    let paths = RuntimePaths::new(model);
    let name = entry_point_name(&method.name, is_async);

    let mut params = vec![format!("c: &{}", paths.context)];
    params.extend(
        method
            .captured_params()
            .map(|p| format!("{}: {}", p.name(), p.ty())),
    );
    let args: Vec<&str> = method.captured_params().map(MethodParam::name).collect();

    let mut f = RustFile::fragment(1);
    f.doc_comment(&format!(
        "Requests `{}::{}` through the {} queue.",
        model.name,
        method.name,
        if is_async { "asynchronous" } else { "synchronous" }
    ));
    f.doc_comment("");
    f.doc_comment("Does nothing when `c` is no longer attached to a component.");
    f.open(&format!(
        "pub fn {name}{}({})",
        generic_params(method),
        params.join(", ")
    ));
    write_scope_resolution(&mut f, model, &paths, "component");
    f.line(&format!(
        "let state_update = component.{}({});",
        create_state_update_fn_name(&method.name),
        args.join(", ")
    ));
    let dispatch = if is_async {
        "update_state_async"
    } else {
        "update_state"
    };
    f.line(&format!("c.{dispatch}({BOX}::new(state_update));"));
    f.close();

    let mut artifacts = ArtifactSet::new();
    artifacts.push_method(name, Placement::Inherent, f.finish());
    artifacts
}

/// Writes the `let ... else { return; }` resolving the scoped component.
fn write_scope_resolution(f: &mut RustFile, model: &SpecModel, paths: &RuntimePaths, binding: &str) {
    f.open(&format!(
        "let {SOME}({binding}) = c.component_scope().and_then({}::<{}>) else",
        paths.item("downcast_component"),
        model.component_name
    ));
    f.line("return;");
    f.close_with("};");
}

/// Emits, for every update-state method, its update-command type and the
/// component method constructing it. Stateless models get none.
pub fn generate_state_update_classes(model: &SpecModel) -> ArtifactSet {
    let mut artifacts = ArtifactSet::new();
    if !model.has_state() {
        return artifacts;
    }
    for method in &model.update_state_methods {
        artifacts.extend(generate_state_update_class(model, method));
    }
    artifacts
}

/// Emits one update-command type.
///
/// The command stores every captured argument in an `m_`-prefixed field.
/// Its `update_state` seeds one state-value box per state slot from the
/// container current at apply time, calls the spec method with arguments in
/// their declared order, then writes each box into the new component's
/// container.
pub fn generate_state_update_class(model: &SpecModel, method: &UpdateStateMethod) -> ArtifactSet {
    let paths = RuntimePaths::new(model);
    let type_name = state_update_type_name(&method.name);
    let generics = generic_params(method);
    let type_args = generic_args(method);
    let spec_handle = format!("{ARC}<{}>", model.name);

    // Fields and constructor parameters: the spec handle first (when
    // injected), then captured params in declaration order.
    let mut fields: Vec<(String, String, String)> = Vec::new();
    if model.injected_dependencies {
        fields.push((SPEC_FIELD.to_string(), SPEC_FIELD.to_string(), spec_handle));
    }
    for param in method.captured_params() {
        fields.push((
            member_name(param.name()),
            param.name().to_string(),
            param.ty().to_string(),
        ));
    }

    let mut f = RustFile::fragment(0);
    f.doc_comment(&format!(
        "Deferred call to `{}::{}`, replayed against the state current at apply time.",
        model.name, method.name
    ));
    if fields.is_empty() {
        f.line(&format!("struct {type_name};"));
    } else {
        f.open(&format!("struct {type_name}{generics}"));
        for (member, _, ty) in &fields {
            f.line(&format!("{member}: {ty},"));
        }
        f.close();
    }
    f.blank();

    // Constructor
    let ctor_params: Vec<String> = fields
        .iter()
        .map(|(_, param, ty)| format!("{param}: {ty}"))
        .collect();
    f.open(&format!("impl{generics} {type_name}{type_args}"));
    f.open(&format!("fn new({}) -> Self", ctor_params.join(", ")));
    if fields.is_empty() {
        f.line("Self");
    } else {
        let inits: Vec<String> = fields
            .iter()
            .map(|(member, param, _)| {
                if member == param {
                    member.clone()
                } else {
                    format!("{member}: {param}")
                }
            })
            .collect();
        f.line(&format!("Self {{ {} }}", inits.join(", ")));
    }
    f.close();
    f.close();
    f.blank();

    write_update_state_impl(
        &mut f,
        model,
        method,
        &paths,
        &format!("{type_name}{type_args}"),
        !fields.is_empty(),
    );

    let mut artifacts = ArtifactSet::new();
    artifacts.extend(generate_create_state_update_method(model, method));
    artifacts.push_type(type_name, f.finish());
    artifacts
}

fn write_update_state_impl(
    f: &mut RustFile,
    model: &SpecModel,
    method: &UpdateStateMethod,
    paths: &RuntimePaths,
    type_name: &str,
    has_fields: bool,
) {
    let has_slots = method.state_slots().next().is_some();
    let prefix = if has_slots { "" } else { "_" };

    f.open(&format!(
        "impl{} {} for {type_name}",
        generic_params(method),
        paths.update_state
    ));
    f.line("fn update_state(");
    f.indent();
    f.line(&format!("self: {BOX}<Self>,"));
    f.line(&format!(
        "{prefix}state_container: &dyn {},",
        paths.state_container
    ));
    f.line(&format!("{prefix}new_component: &mut dyn {},", paths.component));
    f.dedent();
    f.open(&format!(") -> {}", paths.update_result()));

    if has_fields {
        f.line("let this = *self;");
    }
    if has_slots {
        f.line(&format!(
            "let state_container = {}::<{}>(state_container)?;",
            paths.item("downcast_container"),
            model.state_container_name()
        ));
        f.line(&format!(
            "let new_component = {}::<{}>(new_component)?;",
            paths.item("downcast_component_mut"),
            model.component_name
        ));
    }

    // First fold: allocate and seed a box per state slot.
    for slot in method.state_slots() {
        write_seeded_box(f, paths, slot.name(), slot.ty(), &format!(
            "{CLONE}(&state_container.{})",
            slot.name()
        ));
    }

    // Second fold: the call, in the method's declared parameter order.
    let args: Vec<String> = method
        .params
        .iter()
        .map(|param| match param {
            MethodParam::Captured { name, .. } => format!("this.{}", member_name(name)),
            MethodParam::StateSlot { name, .. } => format!("&mut {name}"),
        })
        .collect();
    let receiver = if model.injected_dependencies {
        format!("this.{SPEC_FIELD}.")
    } else {
        format!("{}::", model.name)
    };
    f.line(&format!("{receiver}{}({});", method.name, args.join(", ")));

    for slot in method.state_slots() {
        write_box_store(f, slot.name());
    }

    f.line("Ok(())");
    f.close();
    f.close();
}

/// Declares `let mut <name>: StateValue<ty>` and seeds it with `seed`.
fn write_seeded_box(f: &mut RustFile, paths: &RuntimePaths, name: &str, ty: &str, seed: &str) {
    f.line(&format!(
        "let mut {name}: {} = {}::new();",
        paths.state_value(ty),
        paths.item("StateValue")
    ));
    f.line(&format!("{name}.set({seed});"));
}

/// Writes the box's value, if still set, into the new component's container.
fn write_box_store(f: &mut RustFile, name: &str) {
    f.open(&format!("if let {SOME}(value) = {name}.into_inner()"));
    f.line(&format!(
        "new_component.{STATE_CONTAINER_FIELD}.{name} = value;"
    ));
    f.close();
}

/// Emits the component method through which entry points construct an
/// update command. Instance-scoped commands receive the component's spec.
pub fn generate_create_state_update_method(
    model: &SpecModel,
    method: &UpdateStateMethod,
) -> ArtifactSet {
    let type_name = state_update_type_name(&method.name);
    let name = create_state_update_fn_name(&method.name);

    let mut params = vec!["&self".to_string()];
    params.extend(
        method
            .captured_params()
            .map(|p| format!("{}: {}", p.name(), p.ty())),
    );
    let mut args: Vec<String> = Vec::new();
    if model.injected_dependencies {
        args.push(format!("{ARC}::clone(&self.{SPEC_FIELD})"));
    }
    args.extend(method.captured_params().map(|p| p.name().to_string()));

    let mut f = RustFile::fragment(1);
    f.open(&format!(
        "fn {name}{}({}) -> {type_name}{}",
        generic_params(method),
        params.join(", "),
        generic_args(method)
    ));
    f.line(&format!("{type_name}::new({})", args.join(", ")));
    f.close();

    let mut artifacts = ArtifactSet::new();
    artifacts.push_method(name, Placement::Inherent, f.finish());
    artifacts
}

/// `<T: Bounds + Send + 'static, ..>` declaring the method's type
/// parameters, or nothing for a non-generic method.
fn generic_params(method: &UpdateStateMethod) -> String {
    if method.type_params.is_empty() {
        return String::new();
    }
    let params: Vec<String> = method
        .type_params
        .iter()
        .map(|p| {
            let bounds = p.bounds.trim();
            if bounds.is_empty() {
                format!("{}: {SEND} + 'static", p.name)
            } else {
                format!("{}: {bounds} + {SEND} + 'static", p.name)
            }
        })
        .collect();
    format!("<{}>", params.join(", "))
}

/// `<T, ..>` applying the method's type parameters, or nothing.
fn generic_args(method: &UpdateStateMethod) -> String {
    if method.type_params.is_empty() {
        return String::new();
    }
    let names: Vec<&str> = method.type_params.iter().map(|p| p.name.as_str()).collect();
    format!("<{}>", names.join(", "))
}

/// Emits a lazy entry point for every lazily updatable state field.
pub fn generate_lazy_state_update_methods(model: &SpecModel) -> ArtifactSet {
    model
        .lazy_state_values()
        .map(|state_value| generate_lazy_state_update_method(model, state_value))
        .collect()
}

/// Emits `lazy_update_<field>`: the supplied value is boxed at request time
/// and written straight into the new component's container. The old
/// container is never read and no spec method runs.
pub fn generate_lazy_state_update_method(model: &SpecModel, state_value: &StateField) -> ArtifactSet {
    let paths = RuntimePaths::new(model);
    let name = lazy_update_fn_name(&state_value.name);
    let field = &state_value.name;

    let mut f = RustFile::fragment(1);
    f.doc_comment(&format!(
        "Overwrites `{field}` through the lazy queue without running any update method."
    ));
    f.open(&format!(
        "pub fn {name}(c: &{}, {LAZY_UPDATE_VALUE_PARAM}: {})",
        paths.context, state_value.ty
    ));
    f.open(&format!(
        "if c.component_scope().and_then({}::<{}>).is_none()",
        paths.item("downcast_component"),
        model.component_name
    ));
    f.line("return;");
    f.close();
    write_seeded_box(&mut f, &paths, field, &state_value.ty, LAZY_UPDATE_VALUE_PARAM);
    f.line(&format!("let state_update = {}::new(", paths.item("LazyStateUpdate")));
    f.indent();
    f.open(&format!(
        "move |_state_container: &dyn {}, new_component: &mut dyn {}|",
        paths.state_container, paths.component
    ));
    f.line(&format!(
        "let new_component = {}::<{}>(new_component)?;",
        paths.item("downcast_component_mut"),
        model.component_name
    ));
    write_box_store(&mut f, field);
    f.line("Ok(())");
    f.close_with("},");
    f.dedent();
    f.line(");");
    f.line(&format!("c.update_state_lazy({BOX}::new(state_update));"));
    f.close();

    let mut artifacts = ArtifactSet::new();
    artifacts.push_method(name, Placement::Inherent, f.finish());
    artifacts
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use stately_model::TypeParam;

    use super::*;

    fn counter() -> SpecModel {
        SpecModel::new("Counter")
            .with_state(StateField::new("count", "i32"))
            .with_update_method(UpdateStateMethod::new(
                "increment",
                vec![
                    MethodParam::captured("delta", "i32"),
                    MethodParam::state_slot("count", "i32"),
                ],
            ))
    }

    #[test]
    fn stateless_model_generates_nothing() {
        let model = SpecModel::new("Plain").with_update_method(UpdateStateMethod::new(
            "ping",
            vec![MethodParam::captured("n", "u32")],
        ));
        assert!(generate_has_state(&model).is_empty());
        assert!(generate_transfer_state(&model).is_empty());
        assert!(generate_state_update_classes(&model).is_empty());
        assert!(generate_on_state_update_methods(&model).is_empty());
        assert!(generate_lazy_state_update_methods(&model).is_empty());
    }

    #[test]
    fn has_state_requires_request_and_state() {
        let artifacts = generate_has_state(&counter());
        assert_eq!(
            artifacts.method("has_state").map(|m| m.source.as_str()),
            Some("    fn has_state(&self) -> bool {\n        true\n    }\n")
        );

        let mut unrequested = counter();
        unrequested.generate_has_state = false;
        assert!(generate_has_state(&unrequested).is_empty());
    }

    #[test]
    fn transfer_copies_each_field_in_order() {
        let model = counter()
            .with_state(StateField::new("label", "String"))
            .with_state(StateField::new("items", "Vec<u32>"));
        let artifacts = generate_transfer_state(&model);
        let source = &artifacts.method("transfer_state").unwrap().source;

        assert!(source.contains(
            "let prev_state_container = ::stately_runtime::downcast_container::<CounterStateContainer>(prev_state_container)?;"
        ));
        let copies: Vec<&str> = source
            .lines()
            .map(str::trim)
            .filter(|l| l.starts_with("self.state_container."))
            .collect();
        assert_eq!(
            copies,
            [
                "self.state_container.count = ::core::clone::Clone::clone(&prev_state_container.count);",
                "self.state_container.label = ::core::clone::Clone::clone(&prev_state_container.label);",
                "self.state_container.items = ::core::clone::Clone::clone(&prev_state_container.items);",
            ]
        );
    }

    #[test]
    fn entry_points_forward_only_captured_params() {
        let artifacts = generate_on_state_update_methods(&counter());
        assert_eq!(
            artifacts.method_names(Placement::Inherent),
            ["increment", "increment_async"]
        );

        let sync = &artifacts.method("increment").unwrap().source;
        assert!(sync.contains(
            "pub fn increment(c: &::stately_runtime::ComponentContext, delta: i32) {"
        ));
        assert!(sync.contains(
            "let ::core::option::Option::Some(component) = c.component_scope().and_then(::stately_runtime::downcast_component::<Counter>) else {"
        ));
        assert!(sync.contains("return;"));
        assert!(sync.contains("let state_update = component.create_increment_state_update(delta);"));
        assert!(sync.contains("c.update_state(::std::boxed::Box::new(state_update));"));

        let async_ = &artifacts.method("increment_async").unwrap().source;
        assert!(async_.contains("pub fn increment_async("));
        assert!(async_.contains("c.update_state_async(::std::boxed::Box::new(state_update));"));
    }

    #[test]
    fn counter_command_shape() {
        let artifacts = generate_state_update_classes(&counter());
        assert_eq!(artifacts.type_names(), ["IncrementStateUpdate"]);
        assert_eq!(
            artifacts.method_names(Placement::Inherent),
            ["create_increment_state_update"]
        );

        let source = &artifacts.type_("IncrementStateUpdate").unwrap().source;
        for expected in [
            "struct IncrementStateUpdate {\n    m_delta: i32,\n}",
            "fn new(delta: i32) -> Self {\n        Self { m_delta: delta }",
            "impl ::stately_runtime::StateUpdate for IncrementStateUpdate {",
            "let this = *self;",
            "let mut count: ::stately_runtime::StateValue<i32> = ::stately_runtime::StateValue::new();",
            "count.set(::core::clone::Clone::clone(&state_container.count));",
            "CounterSpec::increment(this.m_delta, &mut count);",
            "new_component.state_container.count = value;",
        ] {
            assert!(source.contains(expected), "missing `{expected}` in:\n{source}");
        }

        let create = &artifacts.method("create_increment_state_update").unwrap().source;
        assert!(create.contains(
            "fn create_increment_state_update(&self, delta: i32) -> IncrementStateUpdate {"
        ));
        assert!(create.contains("IncrementStateUpdate::new(delta)"));
    }

    #[test]
    fn call_keeps_declared_order_across_kinds() {
        let model = SpecModel::new("Title")
            .with_state(StateField::new("title", "String"))
            .with_update_method(UpdateStateMethod::new(
                "wrap",
                vec![
                    MethodParam::captured("prefix", "String"),
                    MethodParam::state_slot("title", "String"),
                    MethodParam::captured("suffix", "String"),
                ],
            ));
        let artifacts = generate_state_update_classes(&model);
        let source = &artifacts.type_("WrapStateUpdate").unwrap().source;
        assert!(source.contains("TitleSpec::wrap(this.m_prefix, &mut title, this.m_suffix);"));
        assert!(source.contains("fn new(prefix: String, suffix: String) -> Self"));

        let entry = generate_on_state_update_method(&model, &model.update_state_methods[0], false);
        let entry = &entry.method("wrap").unwrap().source;
        assert!(entry.contains("prefix: String, suffix: String)"));
        assert!(entry.contains("create_wrap_state_update(prefix, suffix)"));
    }

    #[test]
    fn slotless_and_argless_commands_compile_clean() {
        let model = SpecModel::new("Pinger")
            .with_state(StateField::new("pings", "u64"))
            .with_update_method(UpdateStateMethod::new("ping", Vec::new()));
        let artifacts = generate_state_update_classes(&model);
        let source = &artifacts.type_("PingStateUpdate").unwrap().source;
        assert!(source.contains("struct PingStateUpdate;"));
        assert!(source.contains("fn new() -> Self {\n        Self\n"));
        assert!(source.contains("_state_container: &dyn ::stately_runtime::StateContainer,"));
        assert!(source.contains("_new_component: &mut dyn ::stately_runtime::Component,"));
        assert!(!source.contains("let this"));
        assert!(source.contains("PingerSpec::ping();"));
    }

    #[test]
    fn injected_dependencies_make_commands_instance_scoped() {
        let mut model = counter();
        model.injected_dependencies = true;
        let artifacts = generate_state_update_classes(&model);
        let source = &artifacts.type_("IncrementStateUpdate").unwrap().source;
        assert!(source.contains("spec: ::std::sync::Arc<CounterSpec>,\n    m_delta: i32,"));
        assert!(source.contains(
            "fn new(spec: ::std::sync::Arc<CounterSpec>, delta: i32) -> Self {\n        Self { spec, m_delta: delta }"
        ));
        assert!(source.contains("this.spec.increment(this.m_delta, &mut count);"));

        let create = &artifacts.method("create_increment_state_update").unwrap().source;
        assert!(create.contains(
            "IncrementStateUpdate::new(::std::sync::Arc::clone(&self.spec), delta)"
        ));
    }

    #[test]
    fn lazy_updater_never_reads_old_state() {
        let model = SpecModel::new("Label")
            .with_state(StateField::new("label", "String").lazy())
            .with_state(StateField::new("count", "i32"));
        let artifacts = generate_lazy_state_update_methods(&model);
        assert_eq!(
            artifacts.method_names(Placement::Inherent),
            ["lazy_update_label"]
        );

        let source = &artifacts.method("lazy_update_label").unwrap().source;
        for expected in [
            "pub fn lazy_update_label(c: &::stately_runtime::ComponentContext, lazy_update_value: String) {",
            "if c.component_scope().and_then(::stately_runtime::downcast_component::<Label>).is_none() {",
            "label.set(lazy_update_value);",
            "let state_update = ::stately_runtime::LazyStateUpdate::new(",
            "move |_state_container: &dyn ::stately_runtime::StateContainer, new_component: &mut dyn ::stately_runtime::Component| {",
            "new_component.state_container.label = value;",
            "c.update_state_lazy(::std::boxed::Box::new(state_update));",
        ] {
            assert!(source.contains(expected), "missing `{expected}` in:\n{source}");
        }
        assert!(!source.contains("LabelSpec"));
        assert!(!source.contains("_state_container."));
    }

    #[test]
    fn type_params_reach_entry_points_and_commands() {
        let model = SpecModel::new("Title")
            .with_state(StateField::new("title", "String"))
            .with_update_method(
                UpdateStateMethod::new(
                    "push_display",
                    vec![
                        MethodParam::captured("value", "T"),
                        MethodParam::state_slot("title", "String"),
                    ],
                )
                .with_type_param(TypeParam::new("T", "::std::fmt::Display")),
            );
        let bounds = "<T: ::std::fmt::Display + ::core::marker::Send + 'static>";

        let entry = generate_on_state_update_methods(&model);
        assert!(entry.method("push_display").unwrap().source.contains(&format!(
            "pub fn push_display{bounds}(c: &::stately_runtime::ComponentContext, value: T) {{"
        )));
        assert!(entry
            .method("push_display_async")
            .unwrap()
            .source
            .contains(&format!("pub fn push_display_async{bounds}(")));

        let classes = generate_state_update_classes(&model);
        let create = &classes.method("create_push_display_state_update").unwrap().source;
        assert!(create.contains(&format!(
            "fn create_push_display_state_update{bounds}(&self, value: T) -> PushDisplayStateUpdate<T> {{"
        )));
        let source = &classes.type_("PushDisplayStateUpdate").unwrap().source;
        for expected in [
            format!("struct PushDisplayStateUpdate{bounds} {{\n    m_value: T,\n}}"),
            format!("impl{bounds} PushDisplayStateUpdate<T> {{"),
            format!("impl{bounds} ::stately_runtime::StateUpdate for PushDisplayStateUpdate<T> {{"),
            "TitleSpec::push_display(this.m_value, &mut title);".to_string(),
        ] {
            assert!(source.contains(&expected), "missing `{expected}` in:\n{source}");
        }
    }

    #[test]
    fn custom_type_handles_are_respected() {
        let mut model = counter();
        model.types.context = "crate::ui::Ctx".to_string();
        model.types.runtime = "crate::rt".to_string();
        let artifacts = generate_on_state_update_methods(&model);
        let sync = &artifacts.method("increment").unwrap().source;
        assert!(sync.contains("pub fn increment(c: &crate::ui::Ctx, delta: i32)"));
        assert!(sync.contains("crate::rt::downcast_component::<Counter>"));
    }
}
