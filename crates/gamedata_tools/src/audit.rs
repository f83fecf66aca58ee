//! Sprite and portrait existence audit.
//!
//! Independent of schema validation: records are read leniently and only
//! the referenced asset paths are checked. File contents are never read.

use std::path::PathBuf;

use gamedata_core::document::DocumentKind;
use gamedata_core::record::RecordView;
use serde::Serialize;
use serde_json::Value;

use crate::config::DataLayout;
use crate::loader::load_document;

/// Shared sprite used by every enemy without a dedicated one.
pub const DEFAULT_ENEMY_SPRITE: &str = "enemies/goo_enemy.png";

/// Enemies with a dedicated sprite.
pub const ENEMY_SPRITES: &[(&str, &str)] = &[
    ("eye", "enemies/eye_enemy.png"),
    ("ghost", "enemies/ghost_enemy.png"),
    ("charger", "enemies/reaper_enemy.png"),
];

/// Reported in place of a path when a character has no portrait.
pub const MISSING_PORTRAIT: &str = "portrait (missing field)";

const UNKNOWN_ID: &str = "<unknown>";

/// Existence check for asset paths relative to an asset root.
pub trait AssetStore {
    /// True if `rel_path` exists under the asset root.
    fn exists(&self, rel_path: &str) -> bool;
}

/// Asset store backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct FsAssetStore {
    root: PathBuf,
}

impl FsAssetStore {
    /// Store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetStore for FsAssetStore {
    fn exists(&self, rel_path: &str) -> bool {
        self.root.join(rel_path).exists()
    }
}

/// Sprite path for an enemy id, if it has a dedicated one.
#[must_use]
pub fn special_enemy_sprite(id: &str) -> Option<&'static str> {
    ENEMY_SPRITES
        .iter()
        .find(|(enemy, _)| *enemy == id)
        .map(|(_, sprite)| *sprite)
}

/// Missing assets for one character or enemy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingAssets {
    /// Record id, or `<unknown>`.
    pub id: String,
    /// Missing asset paths (or [`MISSING_PORTRAIT`]).
    pub missing: Vec<String>,
}

/// Result of a full audit.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SpriteReport {
    /// Documents that could not be read, as `<path>: failed to load: <cause>`.
    pub warnings: Vec<String>,
    /// Characters with at least one missing asset.
    pub heroes: Vec<MissingAssets>,
    /// Enemies with a missing sprite.
    pub enemies: Vec<MissingAssets>,
}

impl SpriteReport {
    /// Human-readable report with one section per record kind.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for warning in &self.warnings {
            out.push_str(&format!("warning: {warning}\n"));
        }
        render_section(&mut out, "Missing hero sprites:", &self.heroes);
        out.push('\n');
        render_section(&mut out, "Missing enemy sprites:", &self.enemies);
        out
    }
}

fn render_section(out: &mut String, title: &str, entries: &[MissingAssets]) {
    out.push_str(title);
    out.push('\n');
    if entries.is_empty() {
        out.push_str("  (none)\n");
        return;
    }
    for entry in entries {
        out.push_str(&format!("  {}:\n", entry.id));
        for path in &entry.missing {
            out.push_str(&format!("    - {path}\n"));
        }
    }
}

/// Text of a present value: strings as-is, anything else as JSON.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn record_id(record: Option<RecordView<'_>>) -> String {
    record
        .and_then(|r| r.field("id").value())
        .map_or_else(|| UNKNOWN_ID.to_string(), value_text)
}

/// An asset reference, unless the field is absent, `null` or `""`.
fn asset_ref(record: Option<RecordView<'_>>, key: &str) -> Option<String> {
    match record?.field(key).value()? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        value => Some(value_text(value)),
    }
}

/// Check portraits and walk strips for every character.
///
/// Portraits live under `portraits/`; walk strip paths are used as given.
pub fn audit_characters(characters: &[Value], store: &impl AssetStore) -> Vec<MissingAssets> {
    let mut result = Vec::new();
    for value in characters {
        let record = RecordView::from_value(value);
        let mut missing = Vec::new();

        match asset_ref(record, "portrait") {
            Some(portrait) => {
                let path = format!("portraits/{portrait}");
                if !store.exists(&path) {
                    missing.push(path);
                }
            }
            None => missing.push(MISSING_PORTRAIT.to_string()),
        }

        if let Some(walk_strip) = asset_ref(record, "walk_strip") {
            if !store.exists(&walk_strip) {
                missing.push(walk_strip);
            }
        }

        if !missing.is_empty() {
            result.push(MissingAssets {
                id: record_id(record),
                missing,
            });
        }
    }
    result
}

/// Check the sprite of every enemy.
///
/// The shared default sprite is checked at most once per call.
pub fn audit_enemies(enemies: &[Value], store: &impl AssetStore) -> Vec<MissingAssets> {
    let mut default_exists = None;
    let mut result = Vec::new();
    for value in enemies {
        let id = record_id(RecordView::from_value(value));
        let special = special_enemy_sprite(&id);
        let found = match special {
            Some(sprite) => store.exists(sprite),
            None => *default_exists.get_or_insert_with(|| store.exists(DEFAULT_ENEMY_SPRITE)),
        };
        if !found {
            let path = special.unwrap_or(DEFAULT_ENEMY_SPRITE);
            result.push(MissingAssets {
                id,
                missing: vec![path.to_string()],
            });
        }
    }
    result
}

/// Load characters and enemies under `layout` and audit their assets.
///
/// Never fails: an unreadable document becomes a warning and is treated as
/// having no records.
#[must_use]
pub fn run_sprite_audit(layout: &DataLayout) -> SpriteReport {
    let store = FsAssetStore::new(layout.asset_root());
    let mut report = SpriteReport::default();

    let characters = load_records(layout, DocumentKind::Characters, &mut report.warnings);
    report.heroes = audit_characters(&characters, &store);

    let enemies = load_records(layout, DocumentKind::Enemies, &mut report.warnings);
    report.enemies = audit_enemies(&enemies, &store);

    tracing::info!(
        "Audited {} characters and {} enemies: {} and {} with missing sprites",
        characters.len(),
        enemies.len(),
        report.heroes.len(),
        report.enemies.len()
    );
    report
}

fn load_records(layout: &DataLayout, kind: DocumentKind, warnings: &mut Vec<String>) -> Vec<Value> {
    let doc_path = layout.display_path(kind);
    match load_document(&layout.document_path(kind)) {
        Ok(mut root) => match root.get_mut(kind.list_key()).map(Value::take) {
            Some(Value::Array(records)) => records,
            _ => {
                tracing::warn!("{doc_path} has no '{}' array", kind.list_key());
                Vec::new()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to load {doc_path}: {e}");
            warnings.push(format!("{doc_path}: failed to load: {e}"));
            Vec::new()
        }
    }
}
