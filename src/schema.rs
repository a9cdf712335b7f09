// ---------------------------------------------------------------------------
// Feature schema – fixed at model-training time
// ---------------------------------------------------------------------------

/// How a feature's raw CSV text is interpreted.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureKind {
    /// Any finite real number.
    Continuous,
    /// One of an enumerated set of string values, matched case-insensitively.
    /// The first entry doubles as the fallback category.
    Discrete(Vec<String>),
}

/// One column of the training-time feature set.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub name: String,
    pub kind: FeatureKind,
}

impl Feature {
    pub fn continuous(name: &str) -> Self {
        Feature {
            name: name.to_string(),
            kind: FeatureKind::Continuous,
        }
    }

    /// A discrete feature. `values` must be non-empty; its first entry is the
    /// fallback substituted for out-of-domain input.
    pub fn discrete(name: &str, values: &[&str]) -> Self {
        debug_assert!(!values.is_empty());
        Feature {
            name: name.to_string(),
            kind: FeatureKind::Discrete(values.iter().map(|v| v.to_string()).collect()),
        }
    }
}

/// The ordered feature set a trained model expects, immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub features: Vec<Feature>,
}

impl Schema {
    pub fn new(features: Vec<Feature>) -> Self {
        debug_assert!({
            let mut names: Vec<&str> = features.iter().map(|f| f.name.as_str()).collect();
            names.sort_unstable();
            names.windows(2).all(|w| w[0] != w[1])
        });
        Schema { features }
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the schema has no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Feature names in schema order.
    pub fn column_names(&self) -> Vec<&str> {
        self.features.iter().map(|f| f.name.as_str()).collect()
    }
}
