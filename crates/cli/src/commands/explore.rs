//! `artscope explore`: the interactive session.
//!
//! Reads one command per line from stdin. Numbers given to `artist` and
//! `view` first refer to the last printed list; anything larger is taken as
//! a catalog id.

use std::io::Write;

use artscope_agent::{Screen, SessionNavigator};
use artscope_catalog::ImageUrls;
use artscope_core::artwork::{ArtistRef, CatalogId};
use tokio::io::{self, AsyncBufReadExt, BufReader};

use super::{CommandResult, build_navigator, load_config, report_notices};
use crate::render;

const HELP: &str = "\
  Commands:
    search <query>     Search for an artist
    artist <n|id>      Select an artist from the results (or by catalog id)
    more               Load more artworks
    view <n|id>        Open an artwork from the list (or by catalog id)
    ask <question>     Ask about the open artwork (bare text works too)
    model [name]       Show or switch the language model
    reset              Start a new search
    help               Show this help
    exit | quit        Leave";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum ExplorerCommand {
    Search(String),
    Artist(u64),
    More,
    View(u64),
    Ask(String),
    Model(Option<String>),
    Reset,
    Help,
    Exit,
    Invalid(String),
}

/// Parse a trimmed, non-empty line. Bare text is a question on the
/// analysis screen and a search everywhere else.
pub fn parse_command(line: &str, screen: Screen) -> ExplorerCommand {
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "exit" | "quit" | "/exit" | "/quit" | ":q" => ExplorerCommand::Exit,
        "help" | "?" => ExplorerCommand::Help,
        "reset" | "new" => ExplorerCommand::Reset,
        "more" => ExplorerCommand::More,
        "search" if !rest.is_empty() => ExplorerCommand::Search(rest.to_string()),
        "search" => ExplorerCommand::Invalid("Usage: search <query>".into()),
        "ask" if !rest.is_empty() => ExplorerCommand::Ask(rest.to_string()),
        "ask" => ExplorerCommand::Invalid("Usage: ask <question>".into()),
        "model" => ExplorerCommand::Model((!rest.is_empty()).then(|| rest.to_string())),
        "artist" => match rest.parse() {
            Ok(n) => ExplorerCommand::Artist(n),
            Err(_) => ExplorerCommand::Invalid("Usage: artist <number|id>".into()),
        },
        "view" => match rest.parse() {
            Ok(n) => ExplorerCommand::View(n),
            Err(_) => ExplorerCommand::Invalid("Usage: view <number|id>".into()),
        },
        _ if screen == Screen::Analysis => ExplorerCommand::Ask(line.to_string()),
        _ => ExplorerCommand::Search(line.to_string()),
    }
}

/// A list number when it points into a list of `len` items, otherwise an id.
pub fn resolve(n: u64, ids: &[CatalogId]) -> CatalogId {
    match usize::try_from(n) {
        Ok(idx) if idx >= 1 && idx <= ids.len() => ids[idx - 1],
        _ => n,
    }
}

pub async fn run() -> CommandResult {
    let config = load_config()?;
    let images = ImageUrls::from_config(&config.catalog);
    let mut navigator = build_navigator(&config)?;

    println!();
    println!("  ╔══════════════════════════════════════════════╗");
    println!("  ║        ArtScope — Artwork Context Explorer    ║");
    println!("  ╚══════════════════════════════════════════════╝");
    println!();
    println!("  Catalog:   {}", config.catalog.base_url);
    println!("  Model:     {}", navigator.engine().model());
    println!();

    print_suggestions(&mut navigator).await;
    println!("{HELP}");
    println!();

    let mut last_results: Vec<ArtistRef> = Vec::new();
    let mut lines = BufReader::new(io::stdin()).lines();

    prompt()?;
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            prompt()?;
            continue;
        }

        match parse_command(line, navigator.screen()) {
            ExplorerCommand::Exit => break,
            ExplorerCommand::Help => println!("{HELP}"),
            ExplorerCommand::Invalid(usage) => println!("  {usage}"),
            ExplorerCommand::Search(query) => {
                last_results = navigator.search_artists(&query).await;
                if last_results.is_empty() {
                    println!("  No artists found matching your query.");
                } else {
                    println!("\n  Matching Artists");
                    print!("{}", render::artist_list(&last_results));
                }
            }
            ExplorerCommand::Artist(n) => {
                let ids: Vec<CatalogId> = last_results.iter().map(|a| a.id).collect();
                navigator.select_artist(resolve(n, &ids)).await;
                print_artworks(&navigator, &images, 0);
            }
            ExplorerCommand::More => {
                if navigator.state().selected_artist.is_none() {
                    println!("  Select an artist first.");
                } else if !navigator.state().cursor.has_more {
                    println!("  No more artworks.");
                } else {
                    let before = navigator.state().artworks.len();
                    navigator.load_more().await;
                    print_artworks(&navigator, &images, before);
                }
            }
            ExplorerCommand::View(n) => {
                let ids: Vec<CatalogId> =
                    navigator.state().artworks.iter().map(|a| a.id).collect();
                eprintln!("  Researching...");
                navigator.select_artwork(resolve(n, &ids)).await;
                print_analysis(&navigator, &images);
            }
            ExplorerCommand::Ask(question) => {
                eprint!("  Thinking...");
                let answer = navigator.ask(&question).await;
                eprint!("\r             \r");
                match answer {
                    Some(answer) => {
                        println!();
                        print!("{}", render::assistant_reply(&answer));
                        println!();
                    }
                    None => println!("  Open an artwork first (view <n>)."),
                }
            }
            ExplorerCommand::Model(None) => {
                println!("  Current model: {}", navigator.engine().model());
                match navigator.engine().provider().list_models().await {
                    Ok(models) if !models.is_empty() => {
                        for model in models {
                            println!("    - {model}");
                        }
                    }
                    Ok(_) => println!("  No models installed."),
                    Err(e) => eprintln!("  [Error] Could not list models: {e}"),
                }
            }
            ExplorerCommand::Model(Some(name)) => {
                navigator.engine_mut().set_model(name);
                println!("  Model set to {}", navigator.engine().model());
            }
            ExplorerCommand::Reset => {
                navigator.reset();
                last_results.clear();
                println!("  Starting a new search.");
                print_suggestions(&mut navigator).await;
            }
        }

        report_notices(navigator.take_notices());
        prompt()?;
    }

    println!();
    println!("  Goodbye!");
    println!();
    Ok(())
}

fn prompt() -> std::io::Result<()> {
    print!("  artscope > ");
    std::io::stdout().flush()
}

async fn print_suggestions(navigator: &mut SessionNavigator) {
    let suggestions = navigator.suggestions().await;
    if !suggestions.is_empty() {
        let names: Vec<&str> = suggestions.iter().map(|a| a.title.as_str()).collect();
        println!("  Example artists you could search: {}", names.join(", "));
        println!();
    }
    report_notices(navigator.take_notices());
}

fn print_artworks(navigator: &SessionNavigator, images: &ImageUrls, from: usize) {
    let state = navigator.state();
    let Some(artist) = &state.selected_artist else {
        return;
    };

    if from == 0 {
        println!("\n  Artworks by {}", artist.title);
    }
    if state.artworks.is_empty() {
        println!("  No artworks found for this artist.");
        return;
    }
    print!("{}", render::artwork_list(&state.artworks[from..], from + 1, images));
    if state.cursor.has_more {
        println!("  (more available: type `more`)");
    }
}

fn print_analysis(navigator: &SessionNavigator, images: &ImageUrls) {
    let state = navigator.state();
    let Some(artwork) = &state.selected_artwork else {
        return;
    };
    println!();
    print!(
        "{}",
        render::artwork_panel(
            artwork,
            state.selected_artist.as_ref(),
            &state.research,
            images,
            false
        )
    );
    println!();
    println!("  Ask a question about this artwork.");
}
