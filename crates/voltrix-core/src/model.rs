use serde::{Deserialize, Serialize};
use std::fmt;

/// How breakers are installed in a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mount {
    Fixed,
    Drawout,
}

impl fmt::Display for Mount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mount::Fixed => write!(f, "Fixed"),
            Mount::Drawout => write!(f, "Drawout"),
        }
    }
}

impl Mount {
    /// Loose keyword parse. Drawout phrasings are checked before "fixed"
    /// so that text mentioning both resolves the same way extraction does.
    pub fn from_str_loose(s: &str) -> Option<Mount> {
        let lower = s.trim().to_lowercase();
        if lower.contains("drawout") || lower.contains("draw-out") {
            Some(Mount::Drawout)
        } else if lower.contains("fixed") {
            Some(Mount::Fixed)
        } else {
            None
        }
    }
}

/// Which sides of the section are serviceable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Access {
    #[serde(rename = "Front only")]
    FrontOnly,
    #[serde(rename = "Front and rear")]
    FrontAndRear,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::FrontOnly => write!(f, "Front only"),
            Access::FrontAndRear => write!(f, "Front and rear"),
        }
    }
}

impl Access {
    /// Loose keyword parse. "front and rear"/"rear access" win over
    /// "front access"/"front only", matching extraction rule order.
    pub fn from_str_loose(s: &str) -> Option<Access> {
        let lower = s.trim().to_lowercase();
        if lower.contains("front and rear") || lower.contains("rear access") {
            Some(Access::FrontAndRear)
        } else if lower.contains("front access") || lower.contains("front only") {
            Some(Access::FrontOnly)
        } else {
            None
        }
    }
}

/// Breaker count on a catalog entry. "multiple" marks distribution sections
/// whose breaker count varies by order; quantity constraints are skipped
/// against such entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakerCount {
    Count(u32),
    Multiple,
}

impl fmt::Display for BreakerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakerCount::Count(n) => write!(f, "{n}"),
            BreakerCount::Multiple => write!(f, "multiple"),
        }
    }
}

impl Serialize for BreakerCount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            BreakerCount::Count(n) => serializer.serialize_u32(*n),
            BreakerCount::Multiple => serializer.serialize_str("multiple"),
        }
    }
}

impl<'de> Deserialize<'de> for BreakerCount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(u32),
            Text(String),
        }
        match Raw::deserialize(deserializer)? {
            Raw::Num(n) => Ok(BreakerCount::Count(n)),
            Raw::Text(s) if s.eq_ignore_ascii_case("multiple") => Ok(BreakerCount::Multiple),
            Raw::Text(s) => Err(serde::de::Error::custom(format!(
                "invalid breaker quantity '{s}' (expected a number or \"multiple\")"
            ))),
        }
    }
}

/// Canonical feature set extracted from a quote or free text.
///
/// Every field is optional; `None` means "unconstrained" during matching,
/// not "must be empty". Dimensions are kept as exact digit strings because
/// the catalog compares them by string equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub height: Option<String>,
    pub width: Option<String>,
    pub depth: Option<String>,
    pub breaker_type: Option<String>,
    pub breaker_quantity: Option<u32>,
    pub mount: Option<Mount>,
    pub access: Option<Access>,
}

impl FeatureRecord {
    /// True when no field carries a constraint.
    pub fn is_unconstrained(&self) -> bool {
        self.height.is_none()
            && self.width.is_none()
            && self.depth.is_none()
            && self.breaker_type.is_none()
            && self.breaker_quantity.is_none()
            && self.mount.is_none()
            && self.access.is_none()
    }
}

/// The six human-meaningful specification fields of one catalog assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblySpecs {
    pub height: String,
    pub width: String,
    pub depth: String,
    pub breaker_type: String,
    pub breaker_quantity: BreakerCount,
    pub mount: Mount,
    pub access: Access,
}

impl fmt::Display for AssemblySpecs {
    /// One-line summary, e.g.
    /// `90H x 40W x 60D, ABB SACE Emax 6.2 x 1, Fixed, Front and rear`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}H x {}W x {}D, {} x {}, {}, {}",
            self.height,
            self.width,
            self.depth,
            self.breaker_type,
            self.breaker_quantity,
            self.mount,
            self.access
        )
    }
}

/// One row of an assembly's parts list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub part_number: String,
    pub description: String,
    pub quantity: u32,
    pub sequence: u32,
}

/// One pre-configured box assembly: stable id, project label,
/// specifications, and the ordered parts list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyRecord {
    pub id: String,
    pub project: String,
    pub specs: AssemblySpecs,
    pub parts: Vec<Part>,
}

/// Structured quote document produced by the upstream extraction step.
///
/// The producer is an LLM, so every field is tolerated absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteDoc {
    #[serde(default)]
    pub sections: Vec<QuoteSection>,
    #[serde(default)]
    pub special_construction_requirements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteSection {
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub dimensions: Option<QuoteDimensions>,
    #[serde(default)]
    pub main_circuit_breaker: Option<QuoteBreaker>,
    #[serde(default)]
    pub breakers: Vec<QuoteBreaker>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteDimensions {
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub depth: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteBreaker {
    #[serde(default, rename = "type")]
    pub breaker_type: Option<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_loose_parse() {
        assert_eq!(Mount::from_str_loose("Drawout"), Some(Mount::Drawout));
        assert_eq!(Mount::from_str_loose("draw-out mounted"), Some(Mount::Drawout));
        assert_eq!(Mount::from_str_loose("fixed mount"), Some(Mount::Fixed));
        assert_eq!(Mount::from_str_loose("wall"), None);
    }

    #[test]
    fn test_access_loose_parse() {
        assert_eq!(
            Access::from_str_loose("front and rear access"),
            Some(Access::FrontAndRear)
        );
        assert_eq!(Access::from_str_loose("rear access"), Some(Access::FrontAndRear));
        assert_eq!(Access::from_str_loose("front only"), Some(Access::FrontOnly));
        assert_eq!(Access::from_str_loose("top entry"), None);
    }

    #[test]
    fn test_access_wire_names() {
        let json = serde_json::to_string(&Access::FrontAndRear).unwrap();
        assert_eq!(json, "\"Front and rear\"");
        let back: Access = serde_json::from_str("\"Front only\"").unwrap();
        assert_eq!(back, Access::FrontOnly);
    }

    #[test]
    fn test_breaker_count_serde() {
        assert_eq!(
            serde_json::to_string(&BreakerCount::Count(3)).unwrap(),
            "3"
        );
        assert_eq!(
            serde_json::to_string(&BreakerCount::Multiple).unwrap(),
            "\"multiple\""
        );
        let n: BreakerCount = serde_json::from_str("2").unwrap();
        assert_eq!(n, BreakerCount::Count(2));
        let m: BreakerCount = serde_json::from_str("\"Multiple\"").unwrap();
        assert_eq!(m, BreakerCount::Multiple);
        assert!(serde_json::from_str::<BreakerCount>("\"several\"").is_err());
    }

    #[test]
    fn test_feature_record_default_is_unconstrained() {
        assert!(FeatureRecord::default().is_unconstrained());
        let partial = FeatureRecord {
            height: Some("90".into()),
            ..FeatureRecord::default()
        };
        assert!(!partial.is_unconstrained());
    }

    #[test]
    fn test_quote_doc_tolerates_missing_fields() {
        let doc: QuoteDoc = serde_json::from_str(r#"{"sections": [{}]}"#).unwrap();
        assert_eq!(doc.sections.len(), 1);
        assert!(doc.sections[0].dimensions.is_none());
        assert!(doc.special_construction_requirements.is_empty());
    }
}
