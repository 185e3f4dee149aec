use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use aya_palette::config::Config;
use aya_palette::controller::PaletteWorkflow;
use aya_palette::events::{TerminalClipboard, ToastKind, UiEvent};
use aya_palette::picker::{picked_from_path, SystemImagePicker};
use aya_palette::service::ServiceClient;
use aya_palette::store::AyaStore;

type Workflow = PaletteWorkflow<SystemImagePicker, TerminalClipboard>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    println!("AYA palette workflow — backend at {}", config.base_url);

    let store = Arc::new(AyaStore::new());
    let workflow = PaletteWorkflow::new(
        Arc::clone(&store),
        ServiceClient::new(&config),
        SystemImagePicker,
        TerminalClipboard,
    );

    // Render toasts, alerts and navigation requests as they arrive.
    let mut ui_events = workflow.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = ui_events.recv().await {
            render_event(&event);
        }
    });

    loop {
        display_status(&workflow, &store);
        display_menu();

        let choice = read_input("Select action: ")?;
        match choice.trim() {
            "0" | "q" => {
                println!("\nExiting...");
                break;
            }
            "1" => workflow.select_palette_image().await,
            "2" => workflow.clear_palette_image(),
            "3" => {
                // Stands in for the sibling screen that owns the base
                // image slot.
                let path = read_input("Base image path: ")?;
                let path = path.trim();
                if !path.is_empty() {
                    store.set_base_image(Some(picked_from_path(Path::new(path))));
                }
            }
            "4" => workflow.trigger_recolor().await,
            "5" => display_palette(&store),
            "6" => workflow.copy_palette(),
            "7" => workflow.go_home(),
            _ => println!("⚠ Invalid choice. Please try again."),
        }
    }

    Ok(())
}

fn display_status(workflow: &Workflow, store: &AyaStore) {
    println!("\n{}", "=".repeat(60));
    println!("Workflow Status: {:?}", workflow.state());
    if let Some(image) = store.palette_image() {
        println!("  Palette image: {}", image.uri);
    }
    if let Some(image) = store.base_image() {
        println!("  Base image: {}", image.uri);
    }
    let palette = store.palette();
    if !palette.is_empty() {
        println!("  Palette: {} colors", palette.len());
    }
    if store.recolor_result().is_some() {
        println!("  Recolor result ready");
    }
}

fn display_menu() {
    println!();
    println!("  1) Pick a palette image");
    println!("  2) Clear the palette image");
    println!("  3) Set the base image from a path");
    println!("  4) Recolor");
    println!("  5) Show the extracted palette");
    println!("  6) Copy the palette");
    println!("  7) Back to home");
    println!("  0) Quit");
}

fn display_palette(store: &AyaStore) {
    let palette = store.palette();
    if palette.is_empty() {
        println!("No palette extracted yet.");
        return;
    }
    println!("Extracted Palette:");
    for hex in &palette {
        match hex_components(hex) {
            Some((r, g, b)) => println!("  \x1b[48;2;{r};{g};{b}m      \x1b[0m {hex}"),
            None => println!("  {hex}"),
        }
    }
}

fn render_event(event: &UiEvent) {
    match event {
        UiEvent::Alert { message } => println!("\n⚠ {message}"),
        UiEvent::Toast {
            kind,
            title,
            message,
            ..
        } => {
            let tag = match kind {
                ToastKind::Success => "✓",
                ToastKind::Error => "✗",
                ToastKind::Info => "ℹ",
            };
            println!("\n{tag} {title} — {message}");
        }
        UiEvent::Navigate { route } => println!("\n→ navigating to {}", route.path()),
    }
}

/// Parse `#RRGGBB` into components for the terminal swatch.
fn hex_components(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

fn read_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}
