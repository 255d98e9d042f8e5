// Catalog loading: the heroes.txt line format and the maps.json table.
//
// Hero line format, one hero per line:
//
//   Name: role Tank/Bruiser; lane Offlane; provides Engage, Frontline;
//   eng-q Skillshot H; engagegate B; contested H.
//
// Segments are `key value` pairs separated by `;`. Unknown keys are
// ignored, absent keys keep their neutral defaults, and malformed lines
// are skipped with a warning rather than failing the load.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::catalog::hero::{AbilityQuality, Contested, GateFlag, HeroRecord, Reliability};
use crate::catalog::{MapTable, MapWeights};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse map table {path}: {source}")]
    MapParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no heroes found in {path}")]
    EmptyCatalog { path: PathBuf },
}

// ---------------------------------------------------------------------------
// Hero id slugs
// ---------------------------------------------------------------------------

/// Derive a stable hero id from a display name: lowercase, apostrophes
/// dropped, every other non-alphanumeric run collapsed to a single `_`.
pub fn hero_id_from_name(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut pending_sep = false;
    for c in name.chars() {
        if matches!(c, '\'' | '\u{2019}' | '`') {
            continue;
        }
        if c.is_ascii_alphanumeric() {
            if pending_sep && !id.is_empty() {
                id.push('_');
            }
            pending_sep = false;
            id.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }
    id
}

// ---------------------------------------------------------------------------
// Line parsing
// ---------------------------------------------------------------------------

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase().replace(' ', "")
}

/// Split a list value on commas and pipes, dropping empties.
fn split_list(val: &str) -> Vec<String> {
    val.split(|c| c == ',' || c == '|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a role value. Roles may be separated by `/`, `,`, or the word "or".
fn split_roles(val: &str) -> Vec<String> {
    val.replace('/', ",")
        .replace(" or ", ",")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse an ability-quality value: delivery words followed by a trailing
/// reliability letter, e.g. "Skillshot H" or "Point-Click M".
fn parse_quality(val: &str) -> AbilityQuality {
    let parts: Vec<&str> = val.split_whitespace().collect();
    match parts.as_slice() {
        [] => AbilityQuality::default(),
        [delivery] => AbilityQuality {
            delivery: canonical_delivery(delivery),
            reliability: Reliability::Low,
        },
        [delivery @ .., reliability] => AbilityQuality {
            delivery: canonical_delivery(&delivery.join(" ")),
            reliability: Reliability::parse(reliability),
        },
    }
}

/// Normalize delivery-method spellings ("Point-Click", "point click", ...)
/// to their canonical forms; unknown methods pass through untouched.
fn canonical_delivery(raw: &str) -> String {
    let key = raw.trim().to_lowercase().replace([' ', '-'], "");
    match key.as_str() {
        "pointclick" => "PointClick".into(),
        "skillshot" => "Skillshot".into(),
        "targetarea" => "TargetArea".into(),
        "conditional" => "Conditional".into(),
        "channel" => "Channel".into(),
        "none" => "None".into(),
        "heroic" => "Heroic".into(),
        "self" => "Self".into(),
        _ => raw.trim().to_string(),
    }
}

/// Parse one hero line. Returns None when the line has no `name: body`
/// shape at all.
pub fn parse_hero_line(line: &str) -> Option<HeroRecord> {
    let (name, rest) = line.split_once(':')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    let mut hero = HeroRecord::new(hero_id_from_name(name), name);

    for segment in rest.split(';') {
        let segment = segment.trim();
        let Some((key, val)) = segment.split_once(' ') else {
            continue;
        };
        let key = normalize_key(key);
        let val = val.trim().trim_end_matches('.').trim();

        match key.as_str() {
            "role" => hero.roles = split_roles(val),
            "roledetail" => hero.role_detail = val.to_string(),
            "lane" => hero.lane = val.to_string(),

            "cc" => hero.crowd_control = split_list(val),
            "styles" => hero.styles = split_list(val),
            "provides" => hero.provides = split_list(val),
            "needs" => hero.needs = split_list(val),
            "weaknesses" => hero.weaknesses = split_list(val),
            "powercurve" | "power_curve" => hero.power_curve = split_list(val),

            "dmg" => hero.damage_type = val.to_string(),
            "rng" => hero.range = val.to_string(),
            "wc" => hero.waveclear = val.to_string(),
            "camp" => hero.camp_clear = val.to_string(),
            "eng" => hero.engage_rating = val.to_string(),
            "peel" => hero.peel_rating = val.to_string(),
            "macro" => hero.macro_rating = val.to_string(),
            "global" => hero.global_presence = val.to_string(),
            "cleanse" => hero.cleanse = val.to_string(),
            "reveal" => hero.reveal = val.to_string(),
            "stealth" => hero.stealth = val.to_string(),
            "antiheal" => hero.anti_heal = val.to_string(),
            "contested" => hero.contested = Contested::parse(val),

            "eng-q" => hero.engage_quality = parse_quality(val),
            "cc-q" => hero.cc_quality = parse_quality(val),
            "save-q" => hero.save_quality = parse_quality(val),
            "int-q" => hero.interrupt_quality = parse_quality(val),

            "cleansegate" => hero.gates.cleanse = GateFlag::parse(val),
            "antihealgate" => hero.gates.anti_heal = GateFlag::parse(val),
            "revealgate" => hero.gates.reveal = GateFlag::parse(val),
            "interruptgate" => hero.gates.interrupt = GateFlag::parse(val),
            "engagegate" => hero.gates.engage = GateFlag::parse(val),
            "globalgate" => hero.gates.global = GateFlag::parse(val),

            _ => {} // Unknown keys are ignored.
        }
    }

    Some(hero)
}

// ---------------------------------------------------------------------------
// File loading
// ---------------------------------------------------------------------------

/// Load the hero catalog from a heroes.txt file.
pub fn load_heroes(path: &Path) -> Result<Vec<HeroRecord>, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut heroes = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match parse_hero_line(line) {
            Some(hero) => heroes.push(hero),
            None => warn!("skipping malformed hero line {}", lineno + 1),
        }
    }

    if heroes.is_empty() {
        return Err(CatalogError::EmptyCatalog {
            path: path.to_path_buf(),
        });
    }
    Ok(heroes)
}

/// Load the optional map weight table. A missing file is treated as an
/// empty table (every map neutral), not an error.
pub fn load_map_table(path: &Path) -> Result<MapTable, CatalogError> {
    if !path.exists() {
        return Ok(MapTable::empty());
    }
    let text = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let maps: HashMap<String, MapWeights> =
        serde_json::from_str(&text).map_err(|e| CatalogError::MapParse {
            path: path.to_path_buf(),
            source: e,
        })?;
    Ok(MapTable::new(maps))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
