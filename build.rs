use std::fs;

use toml::Value;

/// Every key of the default config and the check its value must pass.
const FIELDS: [(&str, &str, fn(&Value) -> bool); 6] = [
    ("header", "join_separator", Value::is_str),
    ("code", "indent", |v| v.as_integer().is_some_and(|n| n >= 0)),
    ("transforms", "strikethrough", Value::is_bool),
    ("transforms", "lists", Value::is_bool),
    ("transforms", "code_blocks", Value::is_bool),
    ("transforms", "images", Value::is_bool),
];

fn main() {
    // The default config is embedded with include_str!, so reject a broken one here
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");
    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    for (section, key, valid) in FIELDS {
        let value = table.get(section).and_then(|s| s.get(key));
        if !value.is_some_and(valid) {
            panic!("default_config.toml: {}.{} is missing or has the wrong type", section, key);
        }
    }
}
