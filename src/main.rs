use anyhow::Result;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use docomment_engine::{BufferEditor, Outcome, process_edit};

fn main() -> Result<()> {
    // Load environment variables from .env file, if present.
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let language =
        std::env::var("DOCOMMENT_LANGUAGE").unwrap_or_else(|_| "csharp".to_string());

    let source = "namespace Demo\n{\n    \n    public class Greeter\n    {\n    }\n}\n";
    let mut editor = BufferEditor::new(source, &language);
    // Park the caret on the blank line above the class declaration.
    editor.cursor_to(2, 4);

    println!("{}", "before:".bold());
    println!("{}\n", editor.text());

    // The author types the doc-comment trigger; each keystroke is forwarded
    // to the pipeline the way a host forwards change notifications.
    let mut outcome = None;
    for c in "///".chars() {
        editor.type_char(c);
        outcome = Some(process_edit(&mut editor)?);
    }

    println!("{}", "after:".bold());
    println!("{}\n", editor.text());

    match outcome {
        Some(Outcome::Inserted { kind, at }) => {
            let cursor = editor.cursor();
            println!(
                "{} {:?} skeleton at line {}, cursor on the placeholder at {}:{}",
                "inserted".green().bold(),
                kind,
                at.line,
                cursor.line,
                cursor.column
            );
        }
        Some(Outcome::Skipped(reason)) => {
            println!("{} ({reason:?})", "nothing inserted".yellow().bold());
        }
        None => {}
    }

    if let Some(outcome) = outcome {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }

    Ok(())
}
