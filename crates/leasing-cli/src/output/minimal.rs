use serde_json::Value;

/// Print just the key answer value from the output.
///
/// Looks for the headline figure of each command in priority order, then
/// falls back to the first field of the result object.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    // Results panel: the last row is the total
    if let Some(Value::Array(rows)) = result_obj.get("rows") {
        if let Some(row) = rows.last() {
            println!("{}", row.get("value").map(format_minimal).unwrap_or_default());
            return;
        }
    }

    let priority_keys = ["total_net_investment", "formatted", "value"];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(result_obj));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
