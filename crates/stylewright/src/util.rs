//! Internal helpers shared by the theme and configuration loaders.

use serde_json::{Map, Value as Json};
use serde_yaml::Value as Yaml;

/// Converts a YAML document into the JSON value model.
///
/// Mapping order is preserved. Scalar keys (numbers, booleans) are turned
/// into their textual form so `gray: { 100: "#f3f4f6" }` works unquoted;
/// composite or null keys are rejected. Tags are dropped.
pub(crate) fn yaml_to_json(value: Yaml) -> Result<Json, String> {
    Ok(match value {
        Yaml::Null => Json::Null,
        Yaml::Bool(b) => Json::Bool(b),
        Yaml::Number(n) => number_to_json(&n),
        Yaml::String(s) => Json::String(s),
        Yaml::Sequence(items) => Json::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut map = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                let key = match key {
                    Yaml::String(s) => s,
                    Yaml::Number(n) => n.to_string(),
                    Yaml::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported mapping key: {:?}", other)),
                };
                map.insert(key, yaml_to_json(value)?);
            }
            Json::Object(map)
        }
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}

fn number_to_json(n: &serde_yaml::Number) -> Json {
    if let Some(i) = n.as_i64() {
        Json::from(i)
    } else if let Some(u) = n.as_u64() {
        Json::from(u)
    } else {
        n.as_f64()
            .and_then(serde_json::Number::from_f64)
            .map(Json::Number)
            // NaN and infinities have no JSON number form
            .unwrap_or_else(|| Json::String(n.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn convert(yaml: &str) -> Json {
        yaml_to_json(serde_yaml::from_str(yaml).unwrap()).unwrap()
    }

    #[test]
    fn test_numeric_keys_become_strings() {
        let value = convert("gray:\n  100: '#f3f4f6'\n  0.5: half\n");
        assert_eq!(value, json!({ "gray": { "100": "#f3f4f6", "0.5": "half" } }));
    }

    #[test]
    fn test_mapping_order_preserved() {
        let value = convert("z: 1\na: 2\nm: 3\n");
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_null_and_sequences_kept() {
        let value = convert("a: ~\nb: [1, two]\n");
        assert_eq!(value, json!({ "a": null, "b": [1, "two"] }));
    }

    #[test]
    fn test_sequence_key_rejected() {
        let yaml: Yaml = serde_yaml::from_str("? [a, b]\n: c\n").unwrap();
        assert!(yaml_to_json(yaml).is_err());
    }
}
