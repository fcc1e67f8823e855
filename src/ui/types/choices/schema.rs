use anyhow::{Context, Result, anyhow, bail};
use schemars::{Schema, schema_for};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Number,
    Boolean,
    /// One of a closed set of strings, listed in [`FieldSpec::options`].
    Choice,
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub required: bool,
    pub kind: FieldKind,
    pub default: Option<Value>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub options: Vec<String>,
}

// Return the whole tagged-enum schema for T
pub fn schema_for<T: schemars::JsonSchema>() -> Schema {
    schema_for!(T)
}

pub fn specs_for_kind(root: &Schema, kind_key: &str) -> Result<Vec<FieldSpec>> {
    let root_obj = root.as_object().context("root schema is not an object")?;

    let alts = root_obj
        .get("oneOf")
        .or_else(|| root_obj.get("anyOf"))
        .and_then(|v| v.as_array())
        .context("missing oneOf/anyOf")?;

    for branch in alts {
        let bobj = branch.as_object().context("branch is not object")?;
        let props = match bobj.get("properties").and_then(|v| v.as_object()) {
            Some(p) => p,
            None => continue,
        };

        if !discriminant_matches(props, kind_key) {
            continue;
        }

        let Some(params_obj) = props.get("params").and_then(|v| v.as_object()) else {
            return Ok(vec![]);
        };
        let Some(params_obj) = resolve_ref_obj(root_obj, params_obj) else {
            return Ok(vec![]);
        };
        let Some(params_props) = params_obj.get("properties").and_then(|v| v.as_object()) else {
            return Ok(vec![]);
        };

        let required: Vec<String> = params_obj
            .get("required")
            .and_then(|v| v.as_array())
            .map(|a| {
                a.iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        let mut out = Vec::new();
        for (name, field_schema) in params_props {
            let field_obj = field_schema
                .as_object()
                .context("field schema not object")?;

            // annotations may sit next to the $ref, the shape lives behind it
            let target = single_all_of(field_obj).unwrap_or(field_obj);
            let shape = resolve_ref_obj(root_obj, target)
                .ok_or_else(|| anyhow!("failed to resolve field $ref for '{name}'"))?;
            let annotation = |key: &str| field_obj.get(key).or_else(|| shape.get(key));

            let title = annotation("title")
                .and_then(|v| v.as_str())
                .unwrap_or(name)
                .to_string();

            let description = annotation("description")
                .and_then(|v| v.as_str())
                .map(str::to_string);

            let default = annotation("default").cloned();

            let options = enum_options(shape);
            let kind = if options.is_empty() {
                let Some(kind) = detect_field_kind(shape.get("type")) else {
                    continue;
                };
                kind
            } else {
                FieldKind::Choice
            };

            let min = shape
                .get("minimum")
                .or_else(|| shape.get("exclusiveMinimum"))
                .and_then(|v| v.as_f64());

            let max = shape
                .get("maximum")
                .or_else(|| shape.get("exclusiveMaximum"))
                .and_then(|v| v.as_f64());

            out.push(FieldSpec {
                name: name.clone(),
                title,
                description,
                required: required.iter().any(|r| r == name),
                kind,
                default,
                min,
                max,
                options,
            });
        }

        return Ok(out);
    }

    bail!("no branch found for type={kind_key}");
}

fn discriminant_matches(props: &Map<String, Value>, kind_key: &str) -> bool {
    let Some(tval) = props.get("type") else {
        return false;
    };
    let Some(tobj) = tval.as_object() else {
        return false;
    };

    if tobj.get("const").and_then(|v| v.as_str()) == Some(kind_key) {
        return true;
    }
    if let Some(arr) = tobj.get("enum").and_then(|v| v.as_array()) {
        if arr.len() == 1 && arr[0].as_str() == Some(kind_key) {
            return true;
        }
    }
    false
}

fn single_all_of(obj: &Map<String, Value>) -> Option<&Map<String, Value>> {
    match obj.get("allOf").and_then(|v| v.as_array()).map(Vec::as_slice) {
        Some([only]) => only.as_object(),
        _ => None,
    }
}

/// String values of a unit-variant enum, either as `enum` or as `oneOf` consts.
fn enum_options(obj: &Map<String, Value>) -> Vec<String> {
    if let Some(arr) = obj.get("enum").and_then(|v| v.as_array()) {
        return arr
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect();
    }
    obj.get("oneOf")
        .and_then(|v| v.as_array())
        .map(|alts| {
            alts.iter()
                .filter_map(|alt| alt.get("const").and_then(|c| c.as_str()))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Resolve a local $ref like "#/$defs/LinearGeneratorParameters" against the root object.
/// Returns the referenced object map, or None if it can't be resolved.
fn resolve_ref_obj<'a>(
    root_obj: &'a Map<String, Value>,
    obj: &'a Map<String, Value>,
) -> Option<&'a Map<String, Value>> {
    match obj.get("$ref") {
        Some(Value::String(r)) => {
            let path = r.strip_prefix("#/")?;
            let mut cur: &Map<String, Value> = root_obj;
            for raw_seg in path.split('/') {
                // JSON Pointer unescape (~1 => /, ~0 => ~)
                let seg = raw_seg.replace("~1", "/").replace("~0", "~");
                cur = cur.get(&seg)?.as_object()?;
            }
            Some(cur)
        }
        _ => Some(obj),
    }
}

fn detect_field_kind(ty: Option<&Value>) -> Option<FieldKind> {
    match ty {
        Some(Value::String(s)) => primitive_kind(s),
        Some(Value::Array(arr)) => {
            // handle unions like ["null","number"] for Option<T>
            arr.iter().filter_map(|v| v.as_str()).find_map(primitive_kind)
        }
        _ => None,
    }
}

fn primitive_kind(s: &str) -> Option<FieldKind> {
    match s {
        "string" => Some(FieldKind::String),
        "integer" => Some(FieldKind::Integer),
        "number" => Some(FieldKind::Number),
        "boolean" => Some(FieldKind::Boolean),
        _ => None,
    }
}
