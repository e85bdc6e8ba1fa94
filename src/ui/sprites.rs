//! ASCII portraits loaded from the assets directory.
//!
//! Each avatar file name (`hero1.png`, `boss_orque.png`, ...) maps to a text
//! asset with the same stem (`hero1.txt`). A missing or unreadable asset is
//! never an error: a labelled placeholder box takes its place.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::ASSETS_DIR;

const PLACEHOLDER_WIDTH: usize = 18;
const PLACEHOLDER_HEIGHT: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    pub lines: Vec<String>,
    /// True when `lines` is the placeholder
    pub missing: bool,
}

impl Sprite {
    pub fn placeholder(file: &str) -> Self {
        let label = format!("{} MISSING", file);
        let inner = PLACEHOLDER_WIDTH.max(label.chars().count() + 2);

        let mut lines = Vec::with_capacity(PLACEHOLDER_HEIGHT);
        lines.push(format!("+{}+", "-".repeat(inner)));
        for row in 0..PLACEHOLDER_HEIGHT - 2 {
            if row == (PLACEHOLDER_HEIGHT - 2) / 2 {
                lines.push(format!("|{:^width$}|", label, width = inner));
            } else {
                lines.push(format!("|{}|", " ".repeat(inner)));
            }
        }
        lines.push(format!("+{}+", "-".repeat(inner)));

        Self {
            lines,
            missing: true,
        }
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

/// Caches sprites by avatar file name.
pub struct SpriteLoader {
    dir: PathBuf,
    cache: HashMap<String, Sprite>,
}

impl SpriteLoader {
    pub fn new() -> Self {
        Self::with_dir(ASSETS_DIR)
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: HashMap::new(),
        }
    }

    pub fn get(&mut self, file: &str) -> &Sprite {
        let dir = &self.dir;
        self.cache
            .entry(file.to_string())
            .or_insert_with(|| load_sprite(dir, file))
    }
}

impl Default for SpriteLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn asset_path(dir: &Path, file: &str) -> PathBuf {
    let stem = Path::new(file)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file);
    dir.join(format!("{}.txt", stem))
}

fn load_sprite(dir: &Path, file: &str) -> Sprite {
    match fs::read_to_string(asset_path(dir, file)) {
        Ok(text) if !text.trim().is_empty() => Sprite {
            lines: text.lines().map(str::to_string).collect(),
            missing: false,
        },
        _ => Sprite::placeholder(file),
    }
}
