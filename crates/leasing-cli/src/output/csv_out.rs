use serde_json::Value;
use std::io::{self, Write};

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    if let Err(e) = write_csv(&mut wtr, value) {
        tracing::error!(error = %e, "failed to write CSV output");
        eprintln!("CSV write error: {}", e);
    }
}

/// Envelope results and flat objects become `field,value` pairs; the
/// results panel becomes one line per row.
fn write_csv<W: Write>(wtr: &mut csv::Writer<W>, value: &Value) -> csv::Result<()> {
    match value {
        Value::Object(map) => {
            if let Some(Value::Object(result)) = map.get("result") {
                write_pairs(wtr, result)?;
            } else if let Some(Value::Array(rows)) = map.get("rows") {
                write_rows(wtr, rows)?;
            } else {
                write_pairs(wtr, map)?;
            }
        }
        _ => wtr.write_record([format_csv_value(value)])?,
    }
    wtr.flush()?;
    Ok(())
}

fn write_pairs<W: Write>(
    wtr: &mut csv::Writer<W>,
    map: &serde_json::Map<String, Value>,
) -> csv::Result<()> {
    wtr.write_record(["field", "value"])?;
    for (key, val) in map {
        wtr.write_record([key.as_str(), &format_csv_value(val)])?;
    }
    Ok(())
}

fn write_rows<W: Write>(wtr: &mut csv::Writer<W>, rows: &[Value]) -> csv::Result<()> {
    let Some(Value::Object(first)) = rows.first() else {
        return Ok(());
    };
    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    wtr.write_record(&headers)?;

    for row in rows {
        let cells: Vec<String> = headers
            .iter()
            .map(|h| row.get(*h).map(format_csv_value).unwrap_or_default())
            .collect();
        wtr.write_record(&cells)?;
    }
    Ok(())
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    fn render(value: &Value) -> String {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        write_csv(&mut wtr, value).unwrap();
        String::from_utf8(wtr.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_envelope_result_as_pairs() {
        let out = render(&json!({ "result": { "rent_installment": 10.5 }, "warnings": [] }));
        assert_eq!(out, "field,value\nrent_installment,10.5\n");
    }

    #[test]
    fn test_panel_rows() {
        let out = render(&json!({
            "rows": [{ "key": "term", "label": "Prazo", "value": "60 meses" }],
            "disclaimer": "x"
        }));
        assert_eq!(out, "key,label,value\nterm,Prazo,60 meses\n");
    }

    #[test]
    fn test_write_failure_is_reported() {
        let mut wtr = csv::Writer::from_writer(ClosedPipe);
        let result = write_csv(&mut wtr, &json!({ "value": 1.0 }));
        assert!(result.is_err());
    }
}
