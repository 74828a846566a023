use std::path::{Path, PathBuf};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::export;
use crate::io::store_io::{self, StoreError};
use crate::markup::strip_markup;
use crate::model::note::NotePatch;
use crate::model::store::NoteStore;
use crate::ops::{note_ops, search};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cmd: Commands, json: bool, dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = store_io::resolve_data_dir(dir.map(Path::new));

    match cmd {
        // Read commands
        Commands::List => cmd_list(&dir, json),
        Commands::Show(args) => cmd_show(&dir, args, json),
        Commands::Search(args) => cmd_search(&dir, args, json),

        // Write commands
        Commands::Add(args) => cmd_add(&dir, args, json),
        Commands::Pin(args) => cmd_pin(&dir, args),
        Commands::Title(args) => cmd_title(&dir, args),
        Commands::Delete(args) => cmd_delete(&dir, args),

        // Export
        Commands::Export(args) => cmd_export(&dir, args),
    }
}

/// Load the store, degrading to empty (with a warning) on a corrupt file —
/// the same recovery behavior as the TUI.
fn load_or_empty(dir: &Path) -> Result<NoteStore, StoreError> {
    match store_io::load_store(dir) {
        Ok(store) => Ok(store),
        Err(e @ StoreError::Corrupt { .. }) => {
            eprintln!("warning: {}", e);
            Ok(NoteStore::new())
        }
        Err(e) => Err(e),
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_or_empty(dir)?;
    let notes = search::visible_notes(&store, "");

    if json {
        let out = NoteListJson {
            notes: notes.iter().map(|n| NoteJson::summary(n)).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if notes.is_empty() {
        println!("no notes");
        return Ok(());
    }
    for note in notes {
        println!("{}", format_note_row(note));
    }
    Ok(())
}

fn cmd_show(dir: &Path, args: ShowArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_or_empty(dir)?;
    let note = store
        .get(&args.id)
        .ok_or_else(|| format!("no note with id '{}'", args.id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&NoteJson::full(note))?);
        return Ok(());
    }

    println!("{}", note.title);
    println!(
        "id {}  {}  created {}  updated {}",
        note.id,
        if note.pinned { "pinned" } else { "unpinned" },
        note.created_at.format("%Y-%m-%d %H:%M"),
        note.updated_at.format("%Y-%m-%d %H:%M"),
    );
    println!();
    if args.raw {
        println!("{}", note.content);
    } else {
        println!("{}", strip_markup(&note.content));
    }
    Ok(())
}

fn cmd_search(dir: &Path, args: SearchArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_or_empty(dir)?;
    let notes = search::visible_notes(&store, &args.query);

    if json {
        let out = NoteListJson {
            notes: notes.iter().map(|n| NoteJson::summary(n)).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if notes.is_empty() {
        println!("no matches for '{}'", args.query);
        return Ok(());
    }
    for note in notes {
        println!("{}", format_note_row(note));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands (save immediately — the debounce coalesces interactive
// keystrokes, which the CLI does not have)
// ---------------------------------------------------------------------------

fn cmd_add(dir: &Path, args: AddArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = load_or_empty(dir)?;
    let id = note_ops::create_note(&mut store);

    let patch = NotePatch {
        title: args.title,
        content: args.content,
        pinned: args.pin.then_some(true),
    };
    if patch.title.is_some() || patch.content.is_some() || patch.pinned.is_some() {
        note_ops::update_note(&mut store, &id, patch);
    }
    let added = store
        .get(&id)
        .map(NoteJson::summary)
        .ok_or("created note missing from store")?;
    store_io::save_store(dir, &store)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&added)?);
    } else {
        println!("added {}", id);
    }
    Ok(())
}

fn cmd_pin(dir: &Path, args: PinArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = load_or_empty(dir)?;
    if !note_ops::toggle_pin(&mut store, &args.id) {
        return Err(format!("no note with id '{}'", args.id).into());
    }
    store_io::save_store(dir, &store)?;
    let pinned = store.get(&args.id).is_some_and(|n| n.pinned);
    println!("{} {}", if pinned { "pinned" } else { "unpinned" }, args.id);
    Ok(())
}

fn cmd_title(dir: &Path, args: TitleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = load_or_empty(dir)?;
    if !note_ops::update_note(&mut store, &args.id, NotePatch::title(args.title)) {
        return Err(format!("no note with id '{}'", args.id).into());
    }
    store_io::save_store(dir, &store)?;
    println!("retitled {}", args.id);
    Ok(())
}

fn cmd_delete(dir: &Path, args: DeleteArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = load_or_empty(dir)?;
    if !note_ops::delete_note(&mut store, &args.id) {
        return Err(format!("no note with id '{}'", args.id).into());
    }
    store_io::save_store(dir, &store)?;
    println!("deleted {}", args.id);
    Ok(())
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

fn cmd_export(dir: &Path, args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_or_empty(dir)?;
    let note = store
        .get(&args.id)
        .ok_or_else(|| format!("no note with id '{}'", args.id))?;

    let path = match args.out {
        Some(out) => PathBuf::from(out),
        None => PathBuf::from(export::export_file_name(note)),
    };
    export::export_note(note, &path)?;
    println!("exported {} to {}", note.id, path.display());
    Ok(())
}
