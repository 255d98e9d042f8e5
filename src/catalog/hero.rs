// Hero record types.
//
// HeroRecord is a closed structure: every rating, flag, and gate has an
// explicit neutral default, so a catalog line that omits a field still
// yields fully defined behavior downstream. The tag lists (roles,
// provides, needs, weaknesses) carry no ordering semantics; duplicates
// are collapsed by counting during team-state aggregation.

use serde_json::json;
use std::fmt;

// ---------------------------------------------------------------------------
// Reliability tiers
// ---------------------------------------------------------------------------

/// Reliability tier of an ability block (how dependably it lands).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reliability {
    High,
    Medium,
    #[default]
    Low,
}

impl Reliability {
    /// Parse the single-letter catalog marker. Anything unrecognized is Low.
    pub fn parse(s: &str) -> Self {
        match s {
            "H" => Reliability::High,
            "M" => Reliability::Medium,
            _ => Reliability::Low,
        }
    }

    /// Scoring points contributed by this tier.
    pub fn points(&self) -> f64 {
        match self {
            Reliability::High => 10.0,
            Reliability::Medium => 5.0,
            Reliability::Low => 0.0,
        }
    }

    /// The single-letter catalog marker this tier round-trips to.
    pub fn letter(&self) -> &'static str {
        match self {
            Reliability::High => "H",
            Reliability::Medium => "M",
            Reliability::Low => "L",
        }
    }
}

// ---------------------------------------------------------------------------
// Contested-meta levels
// ---------------------------------------------------------------------------

/// Meta-popularity tier, used as a ban-priority signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Contested {
    Low,
    #[default]
    Medium,
    High,
}

impl Contested {
    /// Parse the single-letter catalog marker. Anything unrecognized is Medium.
    pub fn parse(s: &str) -> Self {
        match s {
            "L" => Contested::Low,
            "H" => Contested::High,
            _ => Contested::Medium,
        }
    }

    /// The single-letter catalog marker this tier round-trips to.
    pub fn letter(&self) -> &'static str {
        match self {
            Contested::Low => "L",
            Contested::Medium => "M",
            Contested::High => "H",
        }
    }
}

// ---------------------------------------------------------------------------
// Gate flags
// ---------------------------------------------------------------------------

/// Whether a hero's access to a core tool is reliably available or
/// conditional. The catalog marks baseline-reliable access with "B";
/// any other marker means the tool is gated behind talents, channels,
/// or setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateFlag {
    Open,
    #[default]
    Conditional,
}

impl GateFlag {
    pub fn parse(s: &str) -> Self {
        if s == "B" {
            GateFlag::Open
        } else {
            GateFlag::Conditional
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, GateFlag::Open)
    }

    /// Catalog marker: "B" for baseline-reliable, "C" for conditional.
    pub fn letter(&self) -> &'static str {
        match self {
            GateFlag::Open => "B",
            GateFlag::Conditional => "C",
        }
    }
}

/// Gate flags for the six core tools.
#[derive(Debug, Clone, Copy, Default)]
pub struct GateFlags {
    pub cleanse: GateFlag,
    pub anti_heal: GateFlag,
    pub reveal: GateFlag,
    pub interrupt: GateFlag,
    pub engage: GateFlag,
    pub global: GateFlag,
}

// ---------------------------------------------------------------------------
// Ability quality blocks
// ---------------------------------------------------------------------------

/// Delivery method and reliability of one ability block
/// (engage / crowd control / save / interrupt).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityQuality {
    pub delivery: String,
    pub reliability: Reliability,
}

impl AbilityQuality {
    fn to_wire(&self) -> serde_json::Value {
        json!({
            "delivery": self.delivery,
            "reliability": self.reliability.letter(),
        })
    }
}

impl Default for AbilityQuality {
    fn default() -> Self {
        AbilityQuality {
            delivery: "None".into(),
            reliability: Reliability::Low,
        }
    }
}

// ---------------------------------------------------------------------------
// HeroRecord
// ---------------------------------------------------------------------------

/// One hero in the catalog. Loaded once at startup and never mutated.
///
/// Single-letter rating fields keep their raw catalog markers ("Y", "N",
/// "S", ...); the helper methods below interpret them.
#[derive(Debug, Clone)]
pub struct HeroRecord {
    pub id: String,
    pub name: String,

    pub roles: Vec<String>,
    pub role_detail: String,
    pub lane: String,

    /// Damage-type tag ("AA" or "Spell").
    pub damage_type: String,
    pub range: String,

    pub waveclear: String,
    pub camp_clear: String,
    pub engage_rating: String,
    pub peel_rating: String,
    pub macro_rating: String,

    pub global_presence: String,
    pub cleanse: String,
    pub reveal: String,
    pub stealth: String,
    pub anti_heal: String,

    pub contested: Contested,

    pub crowd_control: Vec<String>,
    pub styles: Vec<String>,
    pub provides: Vec<String>,
    pub needs: Vec<String>,
    pub weaknesses: Vec<String>,
    pub power_curve: Vec<String>,

    pub engage_quality: AbilityQuality,
    pub cc_quality: AbilityQuality,
    pub save_quality: AbilityQuality,
    pub interrupt_quality: AbilityQuality,

    pub gates: GateFlags,
}

impl HeroRecord {
    /// Create a record with neutral defaults for everything but identity.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        HeroRecord {
            id: id.into(),
            name: name.into(),
            roles: Vec::new(),
            role_detail: String::new(),
            lane: String::new(),
            damage_type: String::new(),
            range: String::new(),
            waveclear: String::new(),
            camp_clear: String::new(),
            engage_rating: String::new(),
            peel_rating: String::new(),
            macro_rating: String::new(),
            global_presence: "N".into(),
            cleanse: "N".into(),
            reveal: "N".into(),
            stealth: "N".into(),
            anti_heal: "N".into(),
            contested: Contested::Medium,
            crowd_control: Vec::new(),
            styles: Vec::new(),
            provides: Vec::new(),
            needs: Vec::new(),
            weaknesses: Vec::new(),
            power_curve: Vec::new(),
            engage_quality: AbilityQuality::default(),
            cc_quality: AbilityQuality::default(),
            save_quality: AbilityQuality::default(),
            interrupt_quality: AbilityQuality::default(),
            gates: GateFlags::default(),
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn provides_tag(&self, tag: &str) -> bool {
        self.provides.iter().any(|p| p == tag)
    }

    pub fn has_weakness(&self, tag: &str) -> bool {
        self.weaknesses.iter().any(|w| w == tag)
    }

    pub fn has_reveal(&self) -> bool {
        self.reveal == "Y"
    }

    pub fn has_stealth(&self) -> bool {
        self.stealth == "Y"
    }

    /// Whether the hero brings cleanse at all ("Y" baseline or "S" situational).
    pub fn offers_cleanse(&self) -> bool {
        matches!(self.cleanse.as_str(), "S" | "Y")
    }

    /// Whether this hero can hold the offlane: either explicitly detailed
    /// as an offlaner or a bruiser assigned to the offlane.
    pub fn fills_offlane(&self) -> bool {
        self.role_detail == "Offlane" || (self.has_role("Bruiser") && self.lane == "Offlane")
    }

    /// Sorted, comma-joined role list. Used as a diversity key when
    /// assembling the surfaced pick list.
    pub fn role_signature(&self) -> String {
        let mut roles = self.roles.clone();
        roles.sort();
        roles.join(",")
    }

    /// Catalog-dump JSON shape for `GET /api/heroes`. Field names and
    /// single-letter markers match what the frontend reads, not the
    /// internal struct layout.
    pub fn to_wire(&self) -> serde_json::Value {
        json!({
            "hero_id": self.id,
            "hero_name": self.name,
            "role": self.roles,
            "role_detail": self.role_detail,
            "lane": self.lane,
            "dmg": self.damage_type,
            "rng": self.range,
            "wc": self.waveclear,
            "camp": self.camp_clear,
            "eng": self.engage_rating,
            "peel": self.peel_rating,
            "macro": self.macro_rating,
            "global": self.global_presence,
            "cleanse": self.cleanse,
            "reveal": self.reveal,
            "stealth": self.stealth,
            "antiheal": self.anti_heal,
            "contested": self.contested.letter(),
            "cc": self.crowd_control,
            "styles": self.styles,
            "provides": self.provides,
            "needs": self.needs,
            "weaknesses": self.weaknesses,
            "power_curve": self.power_curve,
            "quality": {
                "eng": self.engage_quality.to_wire(),
                "cc": self.cc_quality.to_wire(),
                "save": self.save_quality.to_wire(),
                "int": self.interrupt_quality.to_wire(),
            },
            "gates": {
                "cleanse": self.gates.cleanse.letter(),
                "antiheal": self.gates.anti_heal.letter(),
                "reveal": self.gates.reveal.letter(),
                "interrupt": self.gates.interrupt.letter(),
                "engage": self.gates.engage.letter(),
                "global": self.gates.global.letter(),
            },
        })
    }
}

impl fmt::Display for HeroRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
