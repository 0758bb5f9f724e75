//! YAML rendering for reports.

use anyhow::{Context, Result};
use serde::Serialize;
use yaml_rust_davvid::YamlEmitter;

/// Serializes a value to a YAML document with multi-line strings kept literal.
pub fn to_yaml<T: Serialize>(data: &T) -> Result<String> {
    // serde_yaml builds the value tree, yaml-rust emits it
    let serde_value = serde_yaml::to_value(data).context("Failed to serialize to serde value")?;
    let yaml_value = convert(&serde_value);

    let mut output = String::new();
    let mut emitter = YamlEmitter::new(&mut output);
    emitter.multiline_strings(true);
    emitter.dump(&yaml_value).context("Failed to emit YAML")?;

    Ok(output)
}

fn convert(value: &serde_yaml::Value) -> yaml_rust_davvid::Yaml {
    use yaml_rust_davvid::Yaml;

    match value {
        serde_yaml::Value::Null => Yaml::Null,
        serde_yaml::Value::Bool(b) => Yaml::Boolean(*b),
        serde_yaml::Value::Number(n) => n.as_i64().map_or_else(
            || {
                n.as_f64()
                    .map_or_else(|| Yaml::String(n.to_string()), |f| Yaml::Real(f.to_string()))
            },
            Yaml::Integer,
        ),
        serde_yaml::Value::String(s) => Yaml::String(s.clone()),
        serde_yaml::Value::Sequence(seq) => Yaml::Array(seq.iter().map(convert).collect()),
        serde_yaml::Value::Mapping(map) => {
            let mut hash = yaml_rust_davvid::yaml::Hash::new();
            for (k, v) in map {
                hash.insert(convert(k), convert(v));
            }
            Yaml::Hash(hash)
        }
        serde_yaml::Value::Tagged(tagged) => convert(&tagged.value),
    }
}
