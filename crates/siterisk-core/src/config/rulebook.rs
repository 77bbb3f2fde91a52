//! Rulebook: the immutable rule table every resolver reads.
//!
//! Loaded once per process. The file schema is parsed into raw serde
//! structs, validated, and frozen into a [`Rulebook`] whose contents can only
//! be read. Validation failures are [`ConfigError`]s and are always fatal.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::Severity;

const BUILTIN_RULEBOOK: &str = include_str!("default_rulebook.toml");

/// Which budget line a driver lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactType {
    Capex,
    GeneralConditions,
    Insurance,
    Schedule,
}

impl ImpactType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Capex => "capex",
            Self::GeneralConditions => "general_conditions",
            Self::Insurance => "insurance",
            Self::Schedule => "schedule",
        }
    }
}

impl fmt::Display for ImpactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Responsible party for a PM action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    Estimator,
    #[serde(rename = "Project Manager")]
    ProjectManager,
    #[serde(rename = "Civil Engineer")]
    CivilEngineer,
    #[serde(rename = "Structural Engineer")]
    StructuralEngineer,
    Geotech,
}

impl Owner {
    pub fn name(self) -> &'static str {
        match self {
            Self::Estimator => "Estimator",
            Self::ProjectManager => "Project Manager",
            Self::CivilEngineer => "Civil Engineer",
            Self::StructuralEngineer => "Structural Engineer",
            Self::Geotech => "Geotech",
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Project phase by which an action must be closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DuePhase {
    Bid,
    #[serde(rename = "Design Development")]
    DesignDevelopment,
    Permit,
    Procurement,
    Mobilization,
}

impl DuePhase {
    pub fn name(self) -> &'static str {
        match self {
            Self::Bid => "Bid",
            Self::DesignDevelopment => "Design Development",
            Self::Permit => "Permit",
            Self::Procurement => "Procurement",
            Self::Mobilization => "Mobilization",
        }
    }
}

impl fmt::Display for DuePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Closed numeric range, `min <= max` after validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeltaRange {
    pub min: f64,
    pub max: f64,
}

impl DeltaRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn from_pair(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

/// Cost and schedule ranges for one severity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityDelta {
    pub pct: DeltaRange,
    pub days: DeltaRange,
}

/// A delta for each rated severity. Construction is only possible through
/// validation, so every rule prices high, medium and low.
#[derive(Debug, Clone, PartialEq)]
pub struct SeverityDeltas {
    high: SeverityDelta,
    medium: SeverityDelta,
    low: SeverityDelta,
}

impl SeverityDeltas {
    /// `None` for `Severity::Unknown`.
    pub fn for_severity(&self, severity: Severity) -> Option<&SeverityDelta> {
        match severity {
            Severity::High => Some(&self.high),
            Severity::Medium => Some(&self.medium),
            Severity::Low => Some(&self.low),
            Severity::Unknown => None,
        }
    }
}

/// Maps one signal onto a priced cost driver.
#[derive(Debug, Clone, PartialEq)]
pub struct CostRule {
    pub signal_id: String,
    pub cost_category: String,
    pub impact_type: ImpactType,
    pub deltas: SeverityDeltas,
    pub rationale: String,
}

/// Action template keyed by signal id in the action library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionTemplate {
    pub title: String,
    pub owner: Owner,
    pub due_phase: DuePhase,
    pub lead_time_days: u32,
}

/// One rung of the contingency ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContingencyBand {
    pub min_score: u32,
    pub min_pct: f64,
    pub max_pct: f64,
    pub basis: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BidAssumptionType {
    Assumption,
    Allowance,
    Exclusion,
}

impl BidAssumptionType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Assumption => "assumption",
            Self::Allowance => "allowance",
            Self::Exclusion => "exclusion",
        }
    }
}

impl fmt::Display for BidAssumptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A bid qualification statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidAssumption {
    pub title: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: BidAssumptionType,
}

/// Clauses appended only when their trigger signal is high.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalBidAssumptions {
    pub high_flood: BidAssumption,
    pub high_fire: BidAssumption,
}

#[derive(Debug, Deserialize)]
struct RawSeverityDelta {
    pct_range: [f64; 2],
    day_range: [f64; 2],
}

#[derive(Debug, Deserialize)]
struct RawCostRule {
    signal_id: String,
    cost_category: String,
    impact_type: ImpactType,
    #[serde(default)]
    deltas: BTreeMap<String, RawSeverityDelta>,
    #[serde(default)]
    rationale: String,
}

/// On-disk schema. Unknown keys are ignored (forward-compatible).
#[derive(Debug, Deserialize)]
struct RulebookFile {
    #[serde(default)]
    cost_rules: Vec<RawCostRule>,
    #[serde(default)]
    action_library: BTreeMap<String, ActionTemplate>,
    #[serde(default)]
    contingency_bands: Vec<ContingencyBand>,
    #[serde(default)]
    baseline_bid_assumptions: Vec<BidAssumption>,
    conditional_bid_assumptions: ConditionalBidAssumptions,
}

/// Validated, immutable rule table.
#[derive(Debug, Clone, PartialEq)]
pub struct Rulebook {
    cost_rules: Vec<CostRule>,
    action_library: BTreeMap<String, ActionTemplate>,
    contingency_bands: Vec<ContingencyBand>,
    baseline_bid_assumptions: Vec<BidAssumption>,
    conditional_bid_assumptions: ConditionalBidAssumptions,
}

impl Rulebook {
    /// The rulebook compiled into the binary.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::parse_toml(BUILTIN_RULEBOOK, "<builtin>")
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Self::parse_toml(toml_str, "<string>")
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Self::parse_json(json, "<string>")
    }

    /// Load from disk. `.json` files are read as JSON, everything else as TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let source = path.display().to_string();
        let rulebook = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::parse_json(&content, &source)?,
            _ => Self::parse_toml(&content, &source)?,
        };
        tracing::info!(
            path = %source,
            cost_rules = rulebook.cost_rules.len(),
            actions = rulebook.action_library.len(),
            bands = rulebook.contingency_bands.len(),
            "rulebook loaded"
        );
        Ok(rulebook)
    }

    fn parse_toml(content: &str, source: &str) -> Result<Self, ConfigError> {
        let file: RulebookFile = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: source.to_string(),
            message: e.to_string(),
        })?;
        Self::validate(file)
    }

    fn parse_json(content: &str, source: &str) -> Result<Self, ConfigError> {
        let file: RulebookFile =
            serde_json::from_str(content).map_err(|e| ConfigError::ParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;
        Self::validate(file)
    }

    fn validate(file: RulebookFile) -> Result<Self, ConfigError> {
        let mut cost_rules = Vec::with_capacity(file.cost_rules.len());
        for (i, raw) in file.cost_rules.into_iter().enumerate() {
            let field = format!("cost_rules[{i}]");
            if raw.signal_id.trim().is_empty() {
                return Err(ConfigError::validation(
                    format!("{field}.signal_id"),
                    "must not be empty",
                ));
            }
            if cost_rules.iter().any(|r: &CostRule| r.signal_id == raw.signal_id) {
                return Err(ConfigError::validation(
                    format!("{field}.signal_id"),
                    format!("duplicate rule for signal '{}'", raw.signal_id),
                ));
            }
            let deltas = validate_deltas(&field, &raw.deltas)?;
            cost_rules.push(CostRule {
                signal_id: raw.signal_id,
                cost_category: raw.cost_category,
                impact_type: raw.impact_type,
                deltas,
                rationale: raw.rationale,
            });
        }

        for (signal_id, template) in &file.action_library {
            if template.title.trim().is_empty() {
                return Err(ConfigError::validation(
                    format!("action_library.{signal_id}.title"),
                    "must not be empty",
                ));
            }
        }

        if file.contingency_bands.is_empty() {
            return Err(ConfigError::validation(
                "contingency_bands",
                "at least one band is required",
            ));
        }
        for (i, band) in file.contingency_bands.iter().enumerate() {
            let field = format!("contingency_bands[{i}]");
            if !band.min_pct.is_finite() || !band.max_pct.is_finite() {
                return Err(ConfigError::InvalidValue {
                    field,
                    message: "percentages must be finite".to_string(),
                });
            }
            if band.min_pct < 0.0 {
                return Err(ConfigError::validation(
                    format!("{field}.min_pct"),
                    "must not be negative",
                ));
            }
            if band.max_pct < band.min_pct {
                return Err(ConfigError::validation(
                    field,
                    format!("max_pct {} is below min_pct {}", band.max_pct, band.min_pct),
                ));
            }
        }

        Ok(Self {
            cost_rules,
            action_library: file.action_library,
            contingency_bands: file.contingency_bands,
            baseline_bid_assumptions: file.baseline_bid_assumptions,
            conditional_bid_assumptions: file.conditional_bid_assumptions,
        })
    }

    /// Cost rules in file order. The order is the tie-break for equal severities.
    pub fn cost_rules(&self) -> &[CostRule] {
        &self.cost_rules
    }

    pub fn action_template(&self, signal_id: &str) -> Option<&ActionTemplate> {
        self.action_library.get(signal_id)
    }

    pub fn action_library(&self) -> &BTreeMap<String, ActionTemplate> {
        &self.action_library
    }

    /// Bands in file order. Never empty.
    pub fn contingency_bands(&self) -> &[ContingencyBand] {
        &self.contingency_bands
    }

    pub fn baseline_bid_assumptions(&self) -> &[BidAssumption] {
        &self.baseline_bid_assumptions
    }

    pub fn conditional_bid_assumptions(&self) -> &ConditionalBidAssumptions {
        &self.conditional_bid_assumptions
    }
}

fn validate_deltas(
    field: &str,
    raw: &BTreeMap<String, RawSeverityDelta>,
) -> Result<SeverityDeltas, ConfigError> {
    if let Some(key) = raw.keys().find(|k| Severity::parse_rated(k).is_none()) {
        return Err(ConfigError::validation(
            format!("{field}.deltas.{key}"),
            "unrecognised severity; expected high, medium or low",
        ));
    }

    let take = |severity: Severity| -> Result<SeverityDelta, ConfigError> {
        let key = severity.name();
        let delta = raw.get(key).ok_or_else(|| {
            ConfigError::validation(
                format!("{field}.deltas"),
                format!("missing severity '{key}'"),
            )
        })?;
        Ok(SeverityDelta {
            pct: validate_range(&format!("{field}.deltas.{key}.pct_range"), delta.pct_range)?,
            days: validate_range(&format!("{field}.deltas.{key}.day_range"), delta.day_range)?,
        })
    };

    Ok(SeverityDeltas {
        high: take(Severity::High)?,
        medium: take(Severity::Medium)?,
        low: take(Severity::Low)?,
    })
}

fn validate_range(field: &str, pair: [f64; 2]) -> Result<DeltaRange, ConfigError> {
    let range = DeltaRange::from_pair(pair);
    if !range.min.is_finite() || !range.max.is_finite() {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            message: "range bounds must be finite".to_string(),
        });
    }
    if range.max < range.min {
        return Err(ConfigError::validation(
            field,
            format!("max {} is below min {}", range.max, range.min),
        ));
    }
    Ok(range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_rulebook_is_valid() {
        let rulebook = Rulebook::builtin().unwrap();
        assert!(!rulebook.cost_rules().is_empty());
        assert!(!rulebook.contingency_bands().is_empty());
        for rule in rulebook.cost_rules() {
            for severity in Severity::RATED {
                assert!(rule.deltas.for_severity(severity).is_some());
            }
            assert!(rule.deltas.for_severity(Severity::Unknown).is_none());
        }
    }

    #[test]
    fn builtin_has_flood_rule_from_reference_scenario() {
        let rulebook = Rulebook::builtin().unwrap();
        let flood = rulebook
            .cost_rules()
            .iter()
            .find(|r| r.signal_id == "flood-zone")
            .unwrap();
        let high = flood.deltas.for_severity(Severity::High).unwrap();
        assert_eq!(high.pct, DeltaRange::new(5.0, 12.0));
        assert_eq!(high.days, DeltaRange::new(10.0, 25.0));
        assert!(rulebook.action_template("flood-zone").is_some());
    }
}
