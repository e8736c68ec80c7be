//! CLI color functions.
//!
//! Everything respects `NO_COLOR`, `FORCE_COLOR` and TTY detection through
//! `owo-colors`' `if_supports_color()`. The `--no-color` flag sets an
//! in-process flag that bypasses owo-colors entirely.

use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;
use owo_colors::Stream::{self, Stderr, Stdout};

/// Set by `--no-color`.
static NO_COLOR_FLAG: AtomicBool = AtomicBool::new(false);

/// Call once from main.rs when `--no-color` is passed.
pub fn set_no_color() {
    NO_COLOR_FLAG.store(true, Ordering::Relaxed);
}

#[derive(Debug, Clone, Copy)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

const HOME: Rgb = Rgb::from_hex(0x5B8DEF); // Team 1
const AWAY: Rgb = Rgb::from_hex(0xE0605A); // Team 2
const TURF: Rgb = Rgb::from_hex(0x6BAF6B); // Success
const AMBER: Rgb = Rgb::from_hex(0xD8A54A); // Warning
const CHALK: Rgb = Rgb::from_hex(0xC8C8D0); // Identities
const SLATE: Rgb = Rgb::from_hex(0x5C6370); // Secondary info

fn no_color() -> bool {
    NO_COLOR_FLAG.load(Ordering::Relaxed)
}

fn paint(text: &str, stream: Stream, rgb: Rgb) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(stream, |t| t.truecolor(rgb.r, rgb.g, rgb.b))
        .to_string()
}

/// Team 1 headings.
pub fn team_one(text: &str) -> String {
    paint(text, Stdout, HOME)
}

/// Team 2 headings.
pub fn team_two(text: &str) -> String {
    paint(text, Stdout, AWAY)
}

pub fn success(text: &str) -> String {
    paint(text, Stdout, TURF)
}

/// Member identities.
pub fn identity(text: &str) -> String {
    paint(text, Stdout, CHALK)
}

pub fn muted(text: &str) -> String {
    paint(text, Stdout, SLATE)
}

pub fn bold(text: &str) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.bold()).to_string()
}

/// Error styling for stderr.
pub fn error(text: &str) -> String {
    paint(text, Stderr, AWAY)
}

/// Warning styling for stderr.
pub fn warning(text: &str) -> String {
    paint(text, Stderr, AMBER)
}

/// Secondary info on stderr.
pub fn hint(text: &str) -> String {
    paint(text, Stderr, SLATE)
}
