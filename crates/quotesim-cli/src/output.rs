use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(report: &Value, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => render_table(report),
    }

    Ok(())
}

fn render_table(report: &Value) {
    let Value::Object(fields) = report else {
        println!("{report}");
        return;
    };

    for (key, value) in fields {
        match value {
            Value::Array(rows) => {
                println!("{key}:");
                for row in rows {
                    println!("  {}", render_row(row));
                }
            }
            scalar => println!("{key:<20}: {}", render_scalar(scalar)),
        }
    }
}

fn render_row(row: &Value) -> String {
    match row {
        Value::Object(fields) => fields
            .iter()
            .map(|(key, value)| format!("{key}={}", render_scalar(value)))
            .collect::<Vec<_>>()
            .join("  "),
        other => render_scalar(other),
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
