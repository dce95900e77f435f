use serde::{Deserialize, Serialize};

/// Precious metal traded on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum MetalType {
    #[default]
    Gold,
    Silver,
}

impl MetalType {
    pub const ALL: [MetalType; 2] = [MetalType::Gold, MetalType::Silver];

    pub fn as_str(self) -> &'static str {
        match self {
            MetalType::Gold => "gold",
            MetalType::Silver => "silver",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MetalType::Gold => "Gold",
            MetalType::Silver => "Silver",
        }
    }

    pub fn other(self) -> MetalType {
        match self {
            MetalType::Gold => MetalType::Silver,
            MetalType::Silver => MetalType::Gold,
        }
    }
}

impl std::str::FromStr for MetalType {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "gold" => Ok(MetalType::Gold),
            "silver" => Ok(MetalType::Silver),
            other => Err(format!("unknown metal type '{other}' (expected gold or silver)")),
        }
    }
}

impl TryFrom<String> for MetalType {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<MetalType> for &'static str {
    fn from(metal: MetalType) -> Self {
        metal.as_str()
    }
}

impl std::fmt::Display for MetalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
