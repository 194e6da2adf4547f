use clap::Subcommand;
use serde_json::{json, Map, Value};

use crate::cli::client::NotesClient;
use crate::cli::utils::{output_empty_collection, output_note, output_notes, output_success};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum NoteCommands {
    #[command(about = "List all of your notes")]
    List,

    #[command(about = "Create a note")]
    Add {
        #[arg(help = "Title (at least 3 characters)")]
        title: String,
        #[arg(help = "Description (at least 5 characters)")]
        description: String,
        #[arg(long, help = "Tag (defaults to General)")]
        tag: Option<String>,
    },

    #[command(about = "Update fields of a note; omitted fields are kept")]
    Update {
        #[arg(help = "Note ID")]
        id: String,
        #[arg(long, help = "New title")]
        title: Option<String>,
        #[arg(long, help = "New description")]
        description: Option<String>,
        #[arg(long, help = "New tag")]
        tag: Option<String>,
    },

    #[command(about = "Delete a note")]
    Delete {
        #[arg(help = "Note ID")]
        id: String,
    },
}

pub async fn handle(
    cmd: NoteCommands,
    client: &NotesClient,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    match cmd {
        NoteCommands::List => {
            let notes = client.list().await?;
            if notes.is_empty() {
                return output_empty_collection(&output_format, "notes", "No notes yet");
            }
            output_notes(&output_format, &notes)
        }
        NoteCommands::Add { title, description, tag } => {
            let note = client.add(&title, &description, tag.as_deref()).await?;
            output_note(&output_format, "Note created", &note)
        }
        NoteCommands::Update { id, title, description, tag } => {
            let note = client.update(&id, update_body(title, description, tag)).await?;
            output_note(&output_format, "Note updated", &note)
        }
        NoteCommands::Delete { id } => {
            client.delete(&id).await?;
            output_success(
                &output_format,
                &format!("Note {} deleted", id),
                Some(json!({ "id": id })),
            )
        }
    }
}

/// Only the flags the user passed end up in the request body
fn update_body(title: Option<String>, description: Option<String>, tag: Option<String>) -> Value {
    let mut body = Map::new();
    for (key, value) in [("title", title), ("description", description), ("tag", tag)] {
        if let Some(value) = value {
            body.insert(key.to_string(), Value::String(value));
        }
    }
    Value::Object(body)
}
