//! SLHA-style parameter-card reading and editing.
//!
//! Parameter cards drive the hard-process generator upstream of the event
//! file: `BLOCK` sections hold `id value # comment` entries and `DECAY` lines
//! hold per-species widths. Unparseable data lines are collected as warnings
//! rather than aborting the load, matching how the cards are handled in
//! practice (hand-edited files accumulate oddities).

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use ptx_core::errors::{ErrorInfo, PtxError};

/// Pseudo-block tag routing to the DECAY section.
pub const DECAY_TAG: &str = "DECAY";

/// One card entry: a value and its trailing comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockEntry {
    /// Numeric value of the entry.
    pub value: f64,
    /// Trailing comment, without the `#` marker.
    pub comment: String,
}

/// Parsed parameter card with in-place editing support.
#[derive(Debug, Clone)]
pub struct ParamCard {
    path: PathBuf,
    blocks: BTreeMap<String, BTreeMap<i32, BlockEntry>>,
    /// Block tags in the order they appear on the card; render follows it.
    block_order: Vec<String>,
    decays: BTreeMap<i32, BlockEntry>,
    warnings: Vec<String>,
}

fn split_comment(line: &str) -> (&str, &str) {
    match line.split_once('#') {
        Some((data, comment)) => (data, comment.trim()),
        None => (line, ""),
    }
}

impl ParamCard {
    /// Loads and parses a parameter card.
    pub fn load(path: &Path) -> Result<Self, PtxError> {
        let text = fs::read_to_string(path).map_err(|err| {
            PtxError::Config(
                ErrorInfo::new("card-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        let mut card = Self {
            path: path.to_path_buf(),
            blocks: BTreeMap::new(),
            block_order: Vec::new(),
            decays: BTreeMap::new(),
            warnings: Vec::new(),
        };
        let mut current: Option<String> = None;
        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let upper = trimmed.to_ascii_uppercase();
            if upper.starts_with("BLOCK") {
                let (data, _) = split_comment(trimmed);
                let tag = data[5..].trim().to_ascii_uppercase();
                if !card.blocks.contains_key(&tag) {
                    card.block_order.push(tag.clone());
                }
                card.blocks.entry(tag.clone()).or_default();
                current = Some(tag);
            } else if upper.starts_with(DECAY_TAG) {
                let (data, comment) = split_comment(trimmed);
                match parse_entry(&data[5..], comment) {
                    Some((id, entry)) => {
                        card.decays.insert(id, entry);
                    }
                    None => card.warnings.push(trimmed.to_string()),
                }
                current = None;
            } else {
                let (data, comment) = split_comment(trimmed);
                let parsed = current
                    .as_ref()
                    .and_then(|tag| Some((tag, parse_entry(data, comment)?)));
                match parsed {
                    Some((tag, (id, entry))) => {
                        card.blocks.entry(tag.clone()).or_default().insert(id, entry);
                    }
                    None => card.warnings.push(trimmed.to_string()),
                }
            }
        }
        Ok(card)
    }

    /// Returns the path the card was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Valid section tags in card order: every BLOCK plus the DECAY
    /// pseudo-block.
    pub fn tags(&self) -> Vec<String> {
        let mut tags = self.block_order.clone();
        tags.push(DECAY_TAG.to_string());
        tags
    }

    /// Data lines that could not be parsed during load.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    fn section(&self, tag: &str) -> Option<&BTreeMap<i32, BlockEntry>> {
        let tag = tag.to_ascii_uppercase();
        if tag == DECAY_TAG {
            Some(&self.decays)
        } else {
            self.blocks.get(&tag)
        }
    }

    /// Looks up an entry value by section tag and identifier.
    pub fn get(&self, tag: &str, id: i32) -> Option<f64> {
        self.section(tag)?.get(&id).map(|entry| entry.value)
    }

    /// Looks up an entry's trailing comment.
    pub fn comment(&self, tag: &str, id: i32) -> Option<&str> {
        self.section(tag)?.get(&id).map(|entry| entry.comment.as_str())
    }

    /// Overwrites the value of an existing entry.
    ///
    /// Only entries already present on the card can be set; introducing a new
    /// parameter is a card-authoring task, not an edit.
    pub fn set(&mut self, tag: &str, id: i32, value: f64) -> Result<(), PtxError> {
        let upper = tag.to_ascii_uppercase();
        let entry = if upper == DECAY_TAG {
            self.decays.get_mut(&id)
        } else {
            self.blocks.get_mut(&upper).and_then(|block| block.get_mut(&id))
        };
        match entry {
            Some(entry) => {
                entry.value = value;
                Ok(())
            }
            None => Err(PtxError::Config(
                ErrorInfo::new("card-entry-missing", "no such entry on the card")
                    .with_context("tag", upper)
                    .with_context("id", id.to_string()),
            )),
        }
    }

    /// Renders the card in canonical form, blocks in their card order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for tag in &self.block_order {
            let Some(entries) = self.blocks.get(tag) else {
                continue;
            };
            let _ = writeln!(out, "BLOCK {tag}");
            for (id, entry) in entries {
                let _ = write!(out, "    {id} {:.6e}", entry.value);
                if entry.comment.is_empty() {
                    out.push('\n');
                } else {
                    let _ = writeln!(out, " # {}", entry.comment);
                }
            }
        }
        for (id, entry) in &self.decays {
            let _ = write!(out, "DECAY {id} {:.6e}", entry.value);
            if entry.comment.is_empty() {
                out.push('\n');
            } else {
                let _ = writeln!(out, " # {}", entry.comment);
            }
        }
        out
    }

    /// Writes the card to the given path.
    pub fn write(&self, path: &Path) -> Result<(), PtxError> {
        fs::write(path, self.render()).map_err(|err| {
            PtxError::Serde(
                ErrorInfo::new("card-write", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }

    /// Writes the card back to the path it was loaded from.
    pub fn save(&self) -> Result<(), PtxError> {
        self.write(&self.path)
    }
}

fn parse_entry(data: &str, comment: &str) -> Option<(i32, BlockEntry)> {
    let mut tokens = data.split_whitespace();
    let id = tokens.next()?.parse::<i32>().ok()?;
    let value = tokens.next()?.parse::<f64>().ok()?;
    Some((
        id,
        BlockEntry {
            value,
            comment: comment.to_string(),
        },
    ))
}
