//! Loads a spec model from JSON, validates it and prints its shape.
//!
//! Run with: `cargo run --example dump_model -p stately-model -- <spec.json>`

fn main() {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: dump_model <spec.json>");
        std::process::exit(2);
    };

    let model = match stately_model::SpecModel::from_path(std::path::Path::new(&path)) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("{path}: {e}");
            std::process::exit(1);
        }
    };

    println!("{} (spec {})", model.component_name, model.name);
    println!("  State fields:    {}", model.state_values.len());
    for field in &model.state_values {
        let lazy = if field.can_update_lazily { "  [lazy]" } else { "" };
        println!("    {:16} {}{}", field.name, field.ty, lazy);
    }
    println!("  Update methods:  {}", model.update_state_methods.len());
    for method in &model.update_state_methods {
        let params: Vec<String> = method
            .params
            .iter()
            .map(|p| match p {
                stately_model::MethodParam::Captured { name, ty } => format!("{name}: {ty}"),
                stately_model::MethodParam::StateSlot { name, ty } => {
                    format!("{name}: &mut StateValue<{ty}>")
                }
            })
            .collect();
        println!("    {}({})", method.name, params.join(", "));
    }

    match model.validate() {
        Ok(()) => println!("Model is valid."),
        Err(errors) => {
            eprintln!("{errors}");
            std::process::exit(1);
        }
    }
}
