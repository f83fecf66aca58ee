//! Schema, uniqueness and cross-reference validation.
//!
//! Every check appends to a [`DefectLog`] and continues. A malformed entry
//! only stops the checks for that entry; a malformed document root only
//! stops the checks for that document.

use std::collections::HashSet;

use serde_json::Value;

use crate::defect::DefectLog;
use crate::document::DocumentKind;
use crate::record::{Field, FieldState, RecordView, ValueKind};
use crate::rules::{is_allowed_scale, is_stat_key, FieldRule, Rule, PROC_RULES};

/// Weapon identifiers defined in `weapons.json`.
///
/// Built once after weapons are loaded and only read afterwards, by the
/// character check.
#[derive(Debug, Clone, Default)]
pub struct WeaponIds {
    ids: HashSet<String>,
}

impl WeaponIds {
    /// An empty set, used when the weapons document could not be loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every non-empty string `id` of the object entries under
    /// `weapons`. Anything malformed is simply not collected; reporting it
    /// is the schema check's job.
    #[must_use]
    pub fn from_document(root: &Value) -> Self {
        let ids = root
            .get(DocumentKind::Weapons.list_key())
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(RecordView::from_value)
            .filter_map(|weapon| weapon.non_empty_str("id"))
            .map(str::to_owned)
            .collect();
        Self { ids }
    }

    /// True if `id` names a weapon.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of known weapons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True if no weapons are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for WeaponIds {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Validate one parsed document.
///
/// `doc_path` is the display path used as the location prefix.
/// `weapons` is only consulted for [`DocumentKind::Characters`].
pub fn validate_document(
    kind: DocumentKind,
    doc_path: &str,
    root: &Value,
    weapons: &WeaponIds,
    log: &mut DefectLog,
) {
    match kind {
        DocumentKind::Weapons => validate_weapons(doc_path, root, log),
        DocumentKind::Items => validate_items(doc_path, root, log),
        DocumentKind::Enemies => validate_enemies(doc_path, root, log),
        DocumentKind::Characters => validate_characters(doc_path, root, weapons, log),
    }
}

/// Validate `weapons.json`.
pub fn validate_weapons(doc_path: &str, root: &Value, log: &mut DefectLog) {
    validate_records(DocumentKind::Weapons, doc_path, root, log, |_, _, _| {});
}

/// Validate `items.json`.
pub fn validate_items(doc_path: &str, root: &Value, log: &mut DefectLog) {
    validate_records(DocumentKind::Items, doc_path, root, log, |_, _, _| {});
}

/// Validate `enemies.json`.
pub fn validate_enemies(doc_path: &str, root: &Value, log: &mut DefectLog) {
    validate_records(DocumentKind::Enemies, doc_path, root, log, |_, _, _| {});
}

/// Validate `characters.json`, including each character's weapon reference.
///
/// An empty or non-string `weapon` is left to the schema check.
pub fn validate_characters(doc_path: &str, root: &Value, weapons: &WeaponIds, log: &mut DefectLog) {
    validate_records(
        DocumentKind::Characters,
        doc_path,
        root,
        log,
        |character, location, log| {
            if let Some(weapon) = character.non_empty_str("weapon") {
                if !weapons.contains(weapon) {
                    log.push(location, format!("weapon '{weapon}' not found in weapons.json"));
                }
            }
        },
    );
}

/// Flag missing, empty or non-string ids and repeated ids.
///
/// The first occurrence of an id is never flagged. Entries that are not
/// objects are skipped here; the per-entry pass reports them.
pub fn check_unique_ids(entries: &[Value], doc_path: &str, log: &mut DefectLog) {
    let mut seen = HashSet::new();
    for (idx, entry) in entries.iter().enumerate() {
        let Some(record) = RecordView::from_value(entry) else {
            continue;
        };
        let location = format!("{doc_path}[{idx}]");
        let Some(id) = record.non_empty_str("id") else {
            log.push(location, "id must be a non-empty string");
            continue;
        };
        if !seen.insert(id) {
            log.push(location, format!("duplicate id '{id}'"));
        }
    }
}

fn validate_records<F>(
    kind: DocumentKind,
    doc_path: &str,
    root: &Value,
    log: &mut DefectLog,
    mut extra: F,
) where
    F: FnMut(RecordView<'_>, &str, &mut DefectLog),
{
    let Some(entries) = record_list(kind, doc_path, root, log) else {
        return;
    };
    tracing::debug!(document = %kind, entries = entries.len(), "validating records");

    check_unique_ids(entries, doc_path, log);

    let key = kind.list_key();
    for (idx, entry) in entries.iter().enumerate() {
        let location = format!("{doc_path}#{key}[{idx}]");
        let Some(record) = RecordView::from_value(entry) else {
            log.push(location, "entry must be an object");
            continue;
        };
        apply_rules(record, kind.schema(), &location, log);
        extra(record, &location, log);
    }
}

/// The record array under the document's list key, if well-formed.
fn record_list<'a>(
    kind: DocumentKind,
    doc_path: &str,
    root: &'a Value,
    log: &mut DefectLog,
) -> Option<&'a Vec<Value>> {
    let Some(root) = RecordView::from_value(root) else {
        log.push(doc_path, "document root must be an object");
        return None;
    };
    let key = kind.list_key();
    match root.field(key) {
        Field::Absent => {
            log.push(doc_path, format!("missing '{key}'"));
            None
        }
        Field::Present(Value::Array(entries)) => Some(entries),
        Field::Present(_) => {
            log.push(doc_path, format!("'{key}' must be an array"));
            None
        }
    }
}

fn apply_rules(record: RecordView<'_>, rules: &[Rule], location: &str, log: &mut DefectLog) {
    for rule in rules {
        match rule {
            Rule::Field(field) => check_field(record, field, location, "", log),
            Rule::Stats => {
                if let Field::Present(stats) = record.field("stats") {
                    check_stats(stats, &format!("{location}.stats"), log);
                }
            }
            Rule::Proc => {
                if let Field::Present(proc_value) = record.field("proc") {
                    check_proc(proc_value, location, log);
                }
            }
            Rule::Scales => {
                if let Field::Present(scales) = record.field("scales") {
                    check_scales(scales, location, log);
                }
            }
        }
    }
}

fn check_field(
    record: RecordView<'_>,
    rule: &FieldRule,
    location: &str,
    prefix: &str,
    log: &mut DefectLog,
) {
    match record.field(rule.key).check(rule.kind) {
        FieldState::Absent if rule.required => {
            log.push(location, format!("missing '{}'", rule.key));
        }
        FieldState::WrongKind => {
            log.push(location, format!("'{prefix}{}' must be {}", rule.key, rule.kind));
        }
        FieldState::Absent | FieldState::Valid => {}
    }
}

fn check_stats(stats: &Value, location: &str, log: &mut DefectLog) {
    let Some(stats) = RecordView::from_value(stats) else {
        log.push(location, "stats must be an object");
        return;
    };
    for (key, value) in stats.entries() {
        if !is_stat_key(key) {
            log.push(location, format!("unknown stat '{key}'"));
        } else if !ValueKind::Number.matches(value) {
            log.push(location, format!("stat '{key}' must be a number"));
        }
    }
}

fn check_proc(proc_value: &Value, location: &str, log: &mut DefectLog) {
    let Some(proc_record) = RecordView::from_value(proc_value) else {
        log.push(location, "'proc' must be an object");
        return;
    };
    for rule in PROC_RULES {
        check_field(proc_record, rule, location, "proc.", log);
    }
}

fn check_scales(scales: &Value, location: &str, log: &mut DefectLog) {
    let Some(scales) = scales.as_array() else {
        log.push(location, "'scales' must be an array");
        return;
    };
    for scale in scales {
        match scale.as_str() {
            None => log.push(location, "'scales' entries must be strings"),
            Some(s) if !is_allowed_scale(s) => log.push(location, format!("unknown scale '{s}'")),
            Some(_) => {}
        }
    }
}
