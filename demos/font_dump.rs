//! Dump the letter table of a STRK font.
//!
//! Run with: cargo run --example font_dump --features tracing [-- font.stf]
//!
//! Without an argument a small built-in font is written to the temp dir
//! first, so the linearizer's debug output is visible too.

use glam::dvec2;
use strokefont::{LetterSet, Stroke, read_font, write_font};

fn demo_font() -> LetterSet {
    let mut font = LetterSet::new();
    font.insert('i' as u32, vec![
        Stroke::Dot(dvec2(0.5, 0.2)),
        Stroke::Line(dvec2(0.5, 0.4), dvec2(0.5, 0.9)),
    ]);
    font.insert('S' as u32, vec![
        Stroke::Curve(dvec2(0.8, 0.6), dvec2(0.5, 0.45), dvec2(0.2, 0.3)),
        Stroke::Curve(dvec2(0.8, 0.6), dvec2(0.8, 0.9), dvec2(0.2, 0.9)),
        Stroke::Curve(dvec2(0.8, 0.1), dvec2(0.2, 0.0), dvec2(0.2, 0.3)),
    ]);
    font.insert('T' as u32, vec![
        Stroke::Line(dvec2(0.5, 0.1), dvec2(0.5, 0.9)),
        Stroke::Line(dvec2(0.1, 0.1), dvec2(0.9, 0.1)),
    ]);
    font
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let path = match std::env::args().nth(1) {
        Some(path) => path.into(),
        None => {
            let path = std::env::temp_dir().join("strokefont-demo.stf");
            write_font(&path, &demo_font().to_letters())?;
            path
        }
    };

    let letters = read_font(&path)?;
    println!("{}: {} letters", path.display(), letters.len());
    for letter in &letters {
        let label = letter.as_char().map_or_else(|| "?".to_string(), |c| c.to_string());
        println!(
            "U+{:04X} {:>2} {} strokes",
            letter.codepoint,
            label,
            letter.shape.len()
        );
        for stroke in &letter.shape {
            println!(
                "    {:?} ({:.3}, {:.3}) -> ({:.3}, {:.3})",
                stroke.kind(),
                stroke.start().x,
                stroke.start().y,
                stroke.end().x,
                stroke.end().y
            );
        }
    }
    Ok(())
}
