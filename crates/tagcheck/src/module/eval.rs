//! Static evaluation context for a module.
//!
//! Tag maps are usually built from variables and locals (`merge(local.common_tags, {...})`),
//! so the context resolves what can be known without a plan: variable defaults, locals that
//! depend only on those, and `merge`. Everything else stays unknown and fails evaluation.

use hcl::eval::{Context, Evaluate, FuncArgs, FuncDef, ParamType};
use hcl::{Body, Expression, Map, Value};
use tracing::debug;

pub fn module_context<'a>(
    bodies: impl IntoIterator<Item = &'a Body> + Clone,
) -> Context<'static> {
    let mut ctx = Context::new();
    ctx.declare_func(
        "merge",
        FuncDef::builder()
            .variadic_param(ParamType::Any)
            .build(merge),
    );

    let variables = variable_defaults(bodies.clone(), &ctx);
    ctx.declare_var("var", Value::Object(variables));

    let locals = resolve_locals(bodies, &mut ctx);
    ctx.declare_var("local", Value::Object(locals));

    ctx
}

fn variable_defaults<'a>(
    bodies: impl IntoIterator<Item = &'a Body>,
    ctx: &Context,
) -> Map<String, Value> {
    let mut variables = Map::new();

    for block in bodies.into_iter().flat_map(Body::blocks) {
        if block.identifier() != "variable" {
            continue;
        }
        let Some(name) = block.labels().first().map(|l| l.as_str().to_string()) else {
            continue;
        };
        let Some(default) = block
            .body()
            .attributes()
            .find(|a| a.key() == "default")
            .map(hcl::Attribute::expr)
        else {
            debug!(variable = %name, "variable has no default");
            continue;
        };

        match default.evaluate(ctx) {
            Ok(value) => {
                variables.insert(name, value);
            }
            Err(err) => debug!(variable = %name, error = %err, "variable default not evaluable"),
        }
    }

    variables
}

/// Locals may refer to each other in any order; keep evaluating until a pass makes no
/// progress.
fn resolve_locals<'a>(
    bodies: impl IntoIterator<Item = &'a Body>,
    ctx: &mut Context,
) -> Map<String, Value> {
    let mut pending: Vec<(&str, &Expression)> = bodies
        .into_iter()
        .flat_map(Body::blocks)
        .filter(|block| block.identifier() == "locals")
        .flat_map(|block| block.body().attributes())
        .map(|attr| (attr.key(), attr.expr()))
        .collect();
    let mut locals = Map::new();

    loop {
        ctx.declare_var("local", Value::Object(locals.clone()));
        let before = pending.len();
        let scope: &Context = ctx;
        pending.retain(|(name, expr)| match expr.evaluate(scope) {
            Ok(value) => {
                locals.insert((*name).to_string(), value);
                false
            }
            Err(_) => true,
        });
        if pending.is_empty() || pending.len() == before {
            break;
        }
    }

    for (name, _) in &pending {
        debug!(local = %name, "local not evaluable");
    }
    locals
}

fn merge(args: FuncArgs) -> Result<Value, String> {
    let mut merged = Map::new();
    for arg in args.iter() {
        match arg {
            Value::Null => {}
            Value::Object(entries) => {
                merged.extend(entries.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
            _ => return Err("merge arguments must be objects".to_string()),
        }
    }
    Ok(Value::Object(merged))
}
