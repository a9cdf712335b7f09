use crate::schema::{Feature, FeatureKind};

// ---------------------------------------------------------------------------
// Field sanitization – lenient coercion with provenance tagging
// ---------------------------------------------------------------------------

/// A coerced field value, typed per the feature's kind.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Continuous(f64),
    /// The canonical spelling from the schema's allowed-value list.
    Discrete(String),
}

/// Whether the raw input survived coercion or the fallback was substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// The raw value parsed (or matched) cleanly.
    Raw,
    /// The raw value was unusable; the feature's default stands in for it.
    Fallback,
}

/// Result of sanitizing one field.
#[derive(Debug, Clone, PartialEq)]
pub struct Sanitized {
    pub value: FieldValue,
    pub provenance: Provenance,
}

/// Coerce one raw CSV field to the feature's kind.
///
/// Repairs are silent by policy: batch scoring never stops on bad input.
/// Callers wanting strict validation branch on [`Sanitized::provenance`].
///
/// * Continuous: trimmed and parsed as `f64`; a parse failure or a
///   non-finite result (NaN, ±inf) becomes `0.0` with
///   [`Provenance::Fallback`].
/// * Discrete: trimmed, lowercased, and matched case-insensitively against
///   the allowed list; a match yields the schema's canonical spelling, a
///   miss yields the first allowed value with [`Provenance::Fallback`].
pub fn sanitize_field(raw: &str, feature: &Feature) -> Sanitized {
    match &feature.kind {
        FeatureKind::Continuous => sanitize_continuous(raw),
        FeatureKind::Discrete(allowed) => sanitize_discrete(raw, allowed),
    }
}

fn sanitize_continuous(raw: &str) -> Sanitized {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Sanitized {
            value: FieldValue::Continuous(v),
            provenance: Provenance::Raw,
        },
        _ => Sanitized {
            value: FieldValue::Continuous(0.0),
            provenance: Provenance::Fallback,
        },
    }
}

fn sanitize_discrete(raw: &str, allowed: &[String]) -> Sanitized {
    let normalized = raw.trim().to_lowercase();
    match allowed.iter().find(|a| a.to_lowercase() == normalized) {
        Some(canonical) => Sanitized {
            value: FieldValue::Discrete(canonical.clone()),
            provenance: Provenance::Raw,
        },
        None => Sanitized {
            value: FieldValue::Discrete(allowed.first().cloned().unwrap_or_default()),
            provenance: Provenance::Fallback,
        },
    }
}
