//! Build script for keyscope-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates layout.toml at compile time
//! - Generates the key shape table and the keyboard artwork from it

use std::collections::HashMap;
use std::env;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Scan codes are 7 bits
const LAYOUT_SLOTS: usize = 128;

/// Space left between neighbouring keys
const KEY_SPACING: u16 = 2;

const SAMPLE_BACKGROUND: u8 = 0;
const SAMPLE_OUTLINE: u8 = 1;

fn main() {
    setup_linker();
    let layout = load_layout();
    let keys = place_keys(&layout);
    write_shape_table(&layout.artwork, &keys);
    write_artwork(&layout.artwork, &keys);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = out_dir();

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

fn out_dir() -> PathBuf {
    PathBuf::from(env::var("OUT_DIR").unwrap())
}

#[derive(Debug, Deserialize)]
struct LayoutFile {
    artwork: Artwork,
    #[serde(rename = "row")]
    rows: Vec<Row>,
}

#[derive(Debug, Deserialize)]
struct Artwork {
    width: u16,
    height: u16,
    origin_x: u16,
    key_height: u16,
    row_pitch: u16,
}

#[derive(Debug, Deserialize)]
struct Row {
    y: u16,
    keys: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Entry {
    Key {
        code: u8,
        width: u16,
        tail: Option<Tail>,
    },
    Gap {
        gap: u16,
    },
}

#[derive(Debug, Deserialize)]
struct Tail {
    offset: u16,
}

#[derive(Debug, Clone, Copy)]
struct Rect {
    x: u16,
    y: u16,
    width: u16,
    height: u16,
}

impl Rect {
    fn right(&self) -> u16 {
        self.x + self.width
    }

    fn bottom(&self) -> u16 {
        self.y + self.height
    }
}

#[derive(Debug)]
struct PlacedKey {
    code: u8,
    primary: Rect,
    tail: Option<Rect>,
}

/// Read and parse layout.toml
fn load_layout() -> LayoutFile {
    // Re-run if layout.toml changes
    println!("cargo:rerun-if-changed=layout.toml");

    let layout_path = Path::new("layout.toml");

    if !layout_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: layout.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware draws its keyboard diagram from layout.toml.       ║\n\
            ║  Please create one in the keyscope-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(layout_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read layout.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    match toml::from_str(&content) {
        Ok(layout) => layout,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid layout.toml                                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Panic with every collected error in one box
fn report_errors(title: &str, errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Walk the rows, turning widths and gaps into rectangles
fn place_keys(layout: &LayoutFile) -> Vec<PlacedKey> {
    let art = &layout.artwork;
    let mut errors = Vec::new();

    if art.width % 2 != 0 {
        errors.push(format!("[artwork] width {} must be even", art.width));
    }
    if art.origin_x % 2 != 0 {
        errors.push(format!("[artwork] origin_x {} must be even", art.origin_x));
    }
    if art.key_height == 0 || art.row_pitch < art.key_height {
        errors.push("[artwork] row_pitch must be at least key_height".to_string());
    }
    report_errors("Invalid [artwork] section in layout.toml", &errors);

    let mut keys = Vec::new();
    let mut seen: HashMap<u8, usize> = HashMap::new();

    for (row_index, row) in layout.rows.iter().enumerate() {
        let row_name = format!("row {} (y = {})", row_index + 1, row.y);
        let mut x = art.origin_x;

        if row.y + art.key_height > art.height {
            errors.push(format!("{}: keys run past the artwork", row_name));
        }

        for entry in &row.keys {
            match *entry {
                Entry::Gap { gap } => {
                    if gap % 2 != 0 {
                        errors.push(format!("{}: gap {} must be even", row_name, gap));
                    }
                    x += gap;
                }
                Entry::Key { code, width, ref tail } => {
                    if usize::from(code) >= LAYOUT_SLOTS {
                        errors.push(format!("{}: code {:#04x} is not 7-bit", row_name, code));
                    }
                    if let Some(first) = seen.insert(code, row_index + 1) {
                        errors.push(format!(
                            "{}: code {:#04x} already placed on row {}",
                            row_name, code, first
                        ));
                    }
                    if width % 2 != 0 || width <= KEY_SPACING {
                        errors.push(format!(
                            "{}: code {:#04x} width {} must be even and > {}",
                            row_name, code, width, KEY_SPACING
                        ));
                    }

                    let primary = Rect {
                        x,
                        y: row.y,
                        width: width.saturating_sub(KEY_SPACING),
                        height: art.key_height,
                    };
                    if primary.right() > art.width {
                        errors.push(format!(
                            "{}: code {:#04x} ends at x = {}, past the artwork",
                            row_name,
                            code,
                            primary.right()
                        ));
                    }

                    let tail = tail.as_ref().map(|t| {
                        if t.offset % 2 != 0 || t.offset >= primary.width {
                            errors.push(format!(
                                "{}: code {:#04x} tail offset {} must be even and inside the key",
                                row_name, code, t.offset
                            ));
                        }
                        let rect = Rect {
                            x: primary.x + t.offset,
                            y: primary.bottom(),
                            width: primary.width.saturating_sub(t.offset),
                            height: art.row_pitch,
                        };
                        if rect.bottom() > art.height {
                            errors.push(format!(
                                "{}: code {:#04x} tail runs past the artwork",
                                row_name, code
                            ));
                        }
                        rect
                    });

                    keys.push(PlacedKey {
                        code,
                        primary,
                        tail,
                    });
                    x += width;
                }
            }
        }
    }

    report_errors("Invalid key placement in layout.toml", &errors);
    println!(
        "cargo:warning=layout.toml validated successfully ({} keys)",
        keys.len()
    );
    keys
}

/// Emit `key_layout.rs`, included by `display::layout`
fn write_shape_table(art: &Artwork, keys: &[PlacedKey]) {
    let mut slots: Vec<Option<&PlacedKey>> = (0..LAYOUT_SLOTS).map(|_| None).collect();
    for key in keys {
        slots[usize::from(key.code)] = Some(key);
    }

    let mut src = String::new();
    writeln!(src, "// Generated from layout.toml by build.rs").unwrap();
    writeln!(src, "pub const ARTWORK_WIDTH: u16 = {};", art.width).unwrap();
    writeln!(src, "pub const ARTWORK_HEIGHT: u16 = {};", art.height).unwrap();
    writeln!(
        src,
        "pub static KEY_SHAPES: [Option<KeyShape>; LAYOUT_SLOTS] = ["
    )
    .unwrap();
    for (code, slot) in slots.iter().enumerate() {
        match slot {
            None => writeln!(src, "    None, // {:#04x}", code).unwrap(),
            Some(key) => {
                let primary = rect_expr(&key.primary);
                match &key.tail {
                    None => writeln!(
                        src,
                        "    Some(KeyShape::rect({})), // {:#04x}",
                        primary, code
                    )
                    .unwrap(),
                    Some(tail) => writeln!(
                        src,
                        "    Some(KeyShape::with_tail({}, {})), // {:#04x}",
                        primary,
                        rect_expr(tail),
                        code
                    )
                    .unwrap(),
                }
            }
        }
    }
    writeln!(src, "];").unwrap();

    fs::write(out_dir().join("key_layout.rs"), src).unwrap();
}

fn rect_expr(r: &Rect) -> String {
    format!("Rect::new({}, {}, {}, {})", r.x, r.y, r.width, r.height)
}

/// Emit `keyboard_art.bin`: one palette index per pixel, row major
///
/// Key outlines are index 1, everything else index 0. Where a tail joins
/// its key the shared edge is cleared so the two read as one shape.
fn write_artwork(art: &Artwork, keys: &[PlacedKey]) {
    let width = usize::from(art.width);
    let mut samples = vec![SAMPLE_BACKGROUND; width * usize::from(art.height)];

    let mut set = |x: u16, y: u16, value: u8| {
        samples[usize::from(y) * width + usize::from(x)] = value;
    };

    for key in keys {
        for rect in core::iter::once(&key.primary).chain(key.tail.as_ref()) {
            outline(rect, &mut set);
        }
        if let Some(tail) = &key.tail {
            for x in tail.x + 1..tail.right() - 1 {
                set(x, key.primary.bottom() - 1, SAMPLE_BACKGROUND);
                set(x, tail.y, SAMPLE_BACKGROUND);
            }
        }
    }

    fs::write(out_dir().join("keyboard_art.bin"), samples).unwrap();
}

fn outline(rect: &Rect, set: &mut impl FnMut(u16, u16, u8)) {
    for x in rect.x..rect.right() {
        set(x, rect.y, SAMPLE_OUTLINE);
        set(x, rect.bottom() - 1, SAMPLE_OUTLINE);
    }
    for y in rect.y..rect.bottom() {
        set(rect.x, y, SAMPLE_OUTLINE);
        set(rect.right() - 1, y, SAMPLE_OUTLINE);
    }
}
