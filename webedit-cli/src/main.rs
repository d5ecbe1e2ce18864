// ABOUTME: Command line front end for webedit - opens holders from a JSON
// ABOUTME: store in the web editor and applies the edited result back.

mod store;

use anyhow::{Result, bail};
use uuid::Uuid;
use webedit::prelude::*;

use store::HolderStore;

const USAGE: &str = "usage:
  webedit open <store.json> [who...]     upload holders and print the editor link
  webedit apply <store.json> <paste-id>  apply edits from the web editor";

/// The local operator.
struct ConsoleSender {
    name: String,
}

impl ConsoleSender {
    fn new() -> Self {
        let name = std::env::var("USER").unwrap_or_else(|_| "Console".to_string());
        Self { name }
    }
}

impl Sender for ConsoleSender {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn uuid(&self) -> Uuid {
        Uuid::nil()
    }

    fn report(&self, failure: &ResolveFailure) {
        eprintln!("warning: {}", failure);
    }
}

async fn open(editor: &WebEditor, store: &HolderStore, targets: &[String]) -> Result<()> {
    let holders = store.select(targets)?;
    if holders.is_empty() {
        bail!("store has no holders to edit");
    }

    let count = holders.len();
    let payload = ExchangePayload::builder_for("webedit", &ConsoleSender::new())
        .holders(holders)
        .known_permissions(store.known_permissions())
        .build();

    let session = editor.open(&payload).await?;
    tracing::info!(id = %session.id, holders = count, "editor session opened");
    println!("Editor session created.");
    println!("  id:  {}", session.id);
    println!("  url: {}", session.url);
    println!("\nWhen done, run: webedit apply <store.json> {}", session.id);
    Ok(())
}

async fn apply(editor: &WebEditor, store: &mut HolderStore, id: &str) -> Result<()> {
    let sender = ConsoleSender::new();
    let applied = editor.apply(id, &*store, &sender).await?;
    if applied.is_empty() {
        bail!("no holders in paste '{}' could be applied", id);
    }

    tracing::info!(id, holders = applied.len(), "applying editor changes");
    for edit in applied {
        let holder = edit.into_updated();
        println!(
            "Applied {} node(s) to {}",
            holder.nodes().len(),
            holder.friendly_name()
        );
        store.replace(holder);
    }

    store.save()?;
    tracing::info!(path = %store.path().display(), "holder store saved");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, path, rest) = match args.as_slice() {
        [command, path, rest @ ..] => (command.as_str(), path, rest),
        _ => bail!(USAGE),
    };

    let editor = WebEditor::new(GistClient::from_env()?);
    let mut store = HolderStore::load(path)?;
    tracing::debug!(path = %path, command, "holder store loaded");

    match (command, rest) {
        ("open", targets) => open(&editor, &store, targets).await,
        ("apply", [id]) => apply(&editor, &mut store, id).await,
        _ => bail!(USAGE),
    }
}
