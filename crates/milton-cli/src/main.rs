//! milton CLI: live text display with computed size, weight, and color

use clap::{Parser, Subcommand};
use milton_engine::{
    render, RenderedText, Rgb, SettingsStore, StyleState, VariantConfig, WrapAlign, WrapLayout,
    ALBUM_THEMES, BASIC_THEMES,
};
use std::path::PathBuf;

/// Live text display with computed size, weight, and color
#[derive(Parser)]
#[command(name = "milton")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings directory (defaults to .milton in the current directory)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui,

    /// Render text once and print the computed style
    Render {
        /// Text to render (empty uses the placeholder)
        #[arg(long, default_value = "")]
        text: String,

        /// Thickness 0.0-5.0 (out-of-range values are clamped)
        #[arg(long, default_value_t = 0.5)]
        thickness: f32,

        /// Text color as #rrggbb
        #[arg(long)]
        color: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the theme catalogs
    Themes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print persisted settings and the style they produce
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Clear persisted settings and restore defaults
    Reset,
}

const MILTON_DIR: &str = ".milton";

fn main() {
    let cli = Cli::parse();
    let base_dir = cli.dir.unwrap_or_else(|| PathBuf::from(MILTON_DIR));

    match cli.command {
        None | Some(Commands::Tui) => {
            // Default: open TUI
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            if let Err(e) = rt.block_on(milton_tui::run_tui(&base_dir)) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Render {
            text,
            thickness,
            color,
            json,
        }) => {
            cmd_render(&base_dir, text, thickness, color.as_deref(), json);
        }
        Some(Commands::Themes { json }) => {
            cmd_themes(json);
        }
        Some(Commands::Status { json }) => {
            cmd_status(&base_dir, json);
        }
        Some(Commands::Reset) => {
            cmd_reset(&base_dir);
        }
    }
}

fn load_config(base_dir: &std::path::Path) -> VariantConfig {
    match VariantConfig::load(&base_dir.join("config.json")) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_render(
    base_dir: &std::path::Path,
    text: String,
    thickness: f32,
    color: Option<&str>,
    json: bool,
) {
    let config = load_config(base_dir);

    let mut state = StyleState {
        text,
        thickness,
        ..StyleState::default()
    };
    if let Some(raw) = color {
        match Rgb::parse_hex(raw) {
            Ok(rgb) => state.text_color = rgb,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }

    let rendered = render(&state, &config);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rendered).expect("failed to serialize")
        );
        return;
    }

    print_rendered(&rendered);
}

fn print_rendered(rendered: &RenderedText) {
    println!("Size: {}px", rendered.font_size_px);
    println!("Weight: {}", rendered.weight);
    match rendered.glow {
        Some(glow) => println!(
            "Glow: {:.2}px blur / {:.2}px spread",
            glow.blur_px, glow.spread_px
        ),
        None => println!("Glow: none"),
    }
    println!(
        "Color: {} on {}",
        rendered.text_color.hex(),
        rendered.background_color.hex()
    );

    match &rendered.layout {
        WrapLayout::Unwrapped(text) => {
            println!("Layout: unwrapped");
            println!("  {text}");
        }
        WrapLayout::Fragments(fragments) => {
            println!("Layout: {} line(s)", rendered.layout.line_count());
            for fragment in fragments {
                let align = match fragment.align {
                    WrapAlign::Center => "center",
                    WrapAlign::Right => "right",
                    WrapAlign::Inline => "inline",
                };
                let mut pads = String::new();
                if fragment.left_pad_px > 0 {
                    pads.push_str(&format!(" +{}px left", fragment.left_pad_px));
                }
                if fragment.right_pad_px > 0 {
                    pads.push_str(&format!(" +{}px right", fragment.right_pad_px));
                }
                let cont = if fragment.starts_line { "" } else { " (cont.)" };
                println!("  [{align}{pads}]{cont} {}", fragment.text);
            }
        }
    }
}

fn cmd_themes(json: bool) {
    if json {
        let output = serde_json::json!({
            "album": ALBUM_THEMES,
            "basic": BASIC_THEMES,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("failed to serialize")
        );
        return;
    }

    println!("Album themes\n");
    for (i, theme) in ALBUM_THEMES.iter().enumerate() {
        println!(
            "  {} - {} ({} on {})",
            i + 1,
            theme.name,
            theme.text.hex(),
            theme.background.hex()
        );
    }

    println!("\nBasic themes\n");
    for theme in BASIC_THEMES {
        println!(
            "  {} ({} on {})",
            theme.name,
            theme.text.hex(),
            theme.background.hex()
        );
    }
}

fn cmd_status(base_dir: &std::path::Path, json: bool) {
    let config = load_config(base_dir);
    let store = match SettingsStore::open(base_dir) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error opening settings: {e}");
            std::process::exit(1);
        }
    };

    let state = StyleState::load(&store, &config);
    let rendered = render(&state, &config);

    if json {
        let output = serde_json::json!({
            "style": state,
            "rendered": rendered,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("failed to serialize")
        );
        return;
    }

    println!("Milton Status\n");

    if store.is_empty() {
        println!("No persisted settings (built-in defaults)");
    } else {
        println!("Text: {:?}", state.text);
        println!("Thickness: {:.1}", state.thickness);
        match state.theme {
            Some(selection) => println!("Theme: {}", selection.theme().name),
            None => println!("Theme: none"),
        }
    }

    println!();
    print_rendered(&rendered);
}

fn cmd_reset(base_dir: &std::path::Path) {
    let mut store = match SettingsStore::open(base_dir) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error opening settings: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = store.clear() {
        eprintln!("Failed to clear settings: {e}");
        std::process::exit(1);
    }

    println!("Settings cleared");
}
