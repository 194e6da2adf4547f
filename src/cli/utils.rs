use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::database::Note;

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let (Some(Value::Object(extra)), Some(obj)) = (data, response.as_object_mut()) {
                obj.extend(extra);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output an empty collection in the appropriate format
pub fn output_empty_collection(
    output_format: &OutputFormat,
    collection_name: &str,
    message: &str,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({
                collection_name: []
            }))?);
        }
        OutputFormat::Text => {
            println!("{}", message);
        }
    }
    Ok(())
}

/// Output a single note
pub fn output_note(output_format: &OutputFormat, message: &str, note: &Note) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(note)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
            print_note(note);
        }
    }
    Ok(())
}

/// Output a list of notes
pub fn output_notes(output_format: &OutputFormat, notes: &[Note]) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({ "notes": notes }))?);
        }
        OutputFormat::Text => {
            for (i, note) in notes.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_note(note);
            }
        }
    }
    Ok(())
}

fn print_note(note: &Note) {
    println!("ID: {}", note.id);
    println!("Title: {} [{}]", note.title, note.tag);
    println!("Date: {}", note.date.format("%Y-%m-%d %H:%M"));
    println!("{}", note.description);
}
