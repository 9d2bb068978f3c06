use serde::{Deserialize, Serialize};

/// Price bound in base currency units. Both ends are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Budget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u64>,
}

impl Budget {
    /// Upper bound only ("under 20 lakhs").
    pub fn up_to(max: u64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Lower bound only ("luxury").
    pub fn at_least(min: u64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn contains(&self, price: u64) -> bool {
        self.min.is_none_or(|min| price >= min) && self.max.is_none_or(|max| price <= max)
    }
}

/// Tags derived from free-text intent words ("family", "sporty", ...).
///
/// Declaration order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureTag {
    /// Requires good fuel economy.
    Efficient,
    /// Requires high power output.
    Powerful,
    /// Requires room for a family.
    Spacious,
    /// City-sized car. Carries no numeric filter.
    Compact,
    /// Safety-minded buyer. Carries no numeric filter.
    Safe,
}

impl FeatureTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Efficient => "efficient",
            Self::Powerful => "powerful",
            Self::Spacious => "spacious",
            Self::Compact => "compact",
            Self::Safe => "safe",
        }
    }
}

impl std::fmt::Display for FeatureTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured reading of a free-text car query.
///
/// Every field is independent. An absent field (or an empty feature list)
/// imposes no constraint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Budget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// De-duplicated, in the order the matching rules produced them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<FeatureTag>,
}

impl QueryPreferences {
    /// True when nothing was understood from the query.
    pub fn is_empty(&self) -> bool {
        self.budget.is_none()
            && self.body_type.is_none()
            && self.fuel_type.is_none()
            && self.brand.is_none()
            && self.features.is_empty()
    }

    pub fn has_feature(&self, tag: FeatureTag) -> bool {
        self.features.contains(&tag)
    }
}
