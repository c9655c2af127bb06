//! Default value literals
//!
//! Optional parameters must repeat their default in the wrapper signature, so
//! each [`DefaultValue`] is rendered back into source text the way
//! `var_export` would print it.

use crate::ir::{ArrayKey, ClassInfo, DefaultValue, ParamInfo};

/// Render the default literal of an optional parameter.
///
/// Returns `None` for required parameters.
pub fn default_literal(param: &ParamInfo, declaring: &ClassInfo) -> Option<String> {
    let default = param.default.as_ref()?;
    Some(match default {
        DefaultValue::Unavailable => fallback_literal(param).to_string(),
        value => encode_value(value, declaring),
    })
}

/// Literal for an optional parameter whose default cannot be read, inferred
/// from its declared type
fn fallback_literal(param: &ParamInfo) -> &'static str {
    let named = match param.ty.as_named() {
        Some(named) if !param.ty.allows_null() && named.builtin => named,
        _ => return "null",
    };

    match named.name.to_ascii_lowercase().as_str() {
        "string" => "''",
        "array" => "[]",
        "bool" | "boolean" => "false",
        "int" | "integer" | "float" | "double" | "number" => "0",
        _ => "null",
    }
}

/// Qualify a constant reference so it resolves from the generated namespace
fn constant_literal(name: &str, declaring: &ClassInfo) -> String {
    match name.split_once("::") {
        Some((class, constant)) if class == "self" || class == "static" => {
            format!("\\{}::{}", declaring.name, constant)
        }
        Some((class, constant)) if class == "parent" => match declaring.parent {
            Some(ref parent) => format!("\\{}::{}", parent, constant),
            None => name.to_string(),
        },
        Some(_) if !name.starts_with('\\') => format!("\\{}", name),
        _ => name.to_string(),
    }
}

/// Encode a value; constants at any depth are qualified against `declaring`
fn encode_value(value: &DefaultValue, declaring: &ClassInfo) -> String {
    match value {
        DefaultValue::Null => "NULL".to_string(),
        DefaultValue::Bool(b) => b.to_string(),
        DefaultValue::Int(i) => i.to_string(),
        DefaultValue::Float(f) => encode_float(*f),
        DefaultValue::String(s) => encode_string(s),
        DefaultValue::Array(entries) => encode_array(entries, declaring),
        DefaultValue::Constant(name) => constant_literal(name, declaring),
        DefaultValue::Unavailable => "null".to_string(),
    }
}

fn encode_float(f: f64) -> String {
    if f.is_nan() {
        "NAN".to_string()
    } else if f.is_infinite() {
        let inf = if f > 0.0 { "INF" } else { "-INF" };
        inf.to_string()
    } else {
        // Debug keeps a trailing `.0` on integral values
        format!("{:?}", f)
    }
}

fn encode_string(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

fn encode_key(key: &ArrayKey) -> String {
    match key {
        ArrayKey::Int(i) => i.to_string(),
        ArrayKey::String(s) => encode_string(s),
    }
}

fn encode_array(entries: &[(ArrayKey, DefaultValue)], declaring: &ClassInfo) -> String {
    let sequential = entries
        .iter()
        .enumerate()
        .all(|(i, (key, _))| *key == ArrayKey::Int(i as i64));

    let items: Vec<String> = entries
        .iter()
        .map(|(key, value)| {
            if sequential {
                encode_value(value, declaring)
            } else {
                format!("{} => {}", encode_key(key), encode_value(value, declaring))
            }
        })
        .collect();

    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::TypeDescriptor;

    fn render(param: ParamInfo) -> Option<String> {
        default_literal(&param, &ClassInfo::new("Codeception\\Module\\WebDriver"))
    }

    fn optional(default: DefaultValue) -> ParamInfo {
        ParamInfo::new("value").with_default(default)
    }

    #[test]
    fn test_required_has_no_literal() {
        assert_eq!(render(ParamInfo::new("selector")), None);
    }

    #[test]
    fn test_scalars() {
        assert_eq!(render(optional(DefaultValue::Null)).unwrap(), "NULL");
        assert_eq!(render(optional(DefaultValue::Bool(false))).unwrap(), "false");
        assert_eq!(render(optional(DefaultValue::Int(-5))).unwrap(), "-5");
        assert_eq!(render(optional(DefaultValue::Float(1.0))).unwrap(), "1.0");
        assert_eq!(render(optional(DefaultValue::Float(0.25))).unwrap(), "0.25");
        assert_eq!(
            render(optional(DefaultValue::string("it's a \\path"))).unwrap(),
            "'it\\'s a \\\\path'"
        );
    }

    #[test]
    fn test_arrays() {
        assert_eq!(render(optional(DefaultValue::list(vec![]))).unwrap(), "[]");
        assert_eq!(
            render(optional(DefaultValue::list(vec![
                DefaultValue::Int(1),
                DefaultValue::string("a"),
            ])))
            .unwrap(),
            "[1, 'a']"
        );
        assert_eq!(
            render(optional(DefaultValue::Array(vec![
                (ArrayKey::String("json".into()), DefaultValue::Bool(true)),
                (ArrayKey::Int(3), DefaultValue::Null),
            ])))
            .unwrap(),
            "['json' => true, 3 => NULL]"
        );
    }

    #[test]
    fn test_constants() {
        assert_eq!(
            render(optional(DefaultValue::Constant("self::DEFAULT_TIMEOUT".into()))).unwrap(),
            "\\Codeception\\Module\\WebDriver::DEFAULT_TIMEOUT"
        );
        assert_eq!(
            render(optional(DefaultValue::Constant("Facebook\\WebDriver\\WebDriverKeys::ENTER".into())))
                .unwrap(),
            "\\Facebook\\WebDriver\\WebDriverKeys::ENTER"
        );
        assert_eq!(
            render(optional(DefaultValue::Constant("PHP_EOL".into()))).unwrap(),
            "PHP_EOL"
        );
    }

    #[test]
    fn test_constants_inside_arrays() {
        assert_eq!(
            render(optional(DefaultValue::list(vec![DefaultValue::Constant(
                "self::FOO".into()
            )])))
            .unwrap(),
            "[\\Codeception\\Module\\WebDriver::FOO]"
        );
        assert_eq!(
            render(optional(DefaultValue::Array(vec![(
                ArrayKey::String("k".into()),
                DefaultValue::list(vec![DefaultValue::Constant("Other\\C::X".into())]),
            )])))
            .unwrap(),
            "['k' => [\\Other\\C::X]]"
        );
    }

    #[test]
    fn test_parent_constant_uses_superclass() {
        let declaring = ClassInfo::new("Codeception\\Module\\WebDriver").extends("Codeception\\Module");
        let param = optional(DefaultValue::Constant("parent::LIMIT".into()));
        assert_eq!(
            default_literal(&param, &declaring).unwrap(),
            "\\Codeception\\Module::LIMIT"
        );
    }

    #[test]
    fn test_unavailable_default_falls_back_on_type() {
        let unavailable = |ty: TypeDescriptor| {
            render(
                ParamInfo::typed("value", ty).with_default(DefaultValue::Unavailable),
            )
            .unwrap()
        };

        assert_eq!(unavailable(TypeDescriptor::None), "null");
        assert_eq!(unavailable(TypeDescriptor::builtin("string")), "''");
        assert_eq!(unavailable(TypeDescriptor::builtin("array")), "[]");
        assert_eq!(unavailable(TypeDescriptor::builtin("bool")), "false");
        assert_eq!(unavailable(TypeDescriptor::builtin("int")), "0");
        assert_eq!(unavailable(TypeDescriptor::builtin("int").nullable()), "null");
        assert_eq!(unavailable(TypeDescriptor::class("DateTime")), "null");
    }
}
