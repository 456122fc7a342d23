//! Min-max normalization of rating columns

use crate::error::{RatingError, Result};
use serde::{Deserialize, Serialize};

/// Value assigned to every team when a column has no spread
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateColumnPolicy {
    /// Every team gets 0.5
    #[default]
    Midpoint,
    /// Every team gets the given value in `[0, 1]`
    Fixed(f64),
}

impl DegenerateColumnPolicy {
    pub fn value(&self) -> f64 {
        match self {
            DegenerateColumnPolicy::Midpoint => 0.5,
            DegenerateColumnPolicy::Fixed(value) => *value,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let value = self.value();
        if !(0.0..=1.0).contains(&value) {
            return Err(RatingError::invalid_config(format!(
                "Degenerate column value must lie in [0, 1], got {}",
                value
            ))
            .into());
        }
        Ok(())
    }
}

/// Outcome of normalizing one column
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedColumn {
    pub values: Vec<f64>,
    /// True when the column had no spread and the policy value was used
    pub degenerate: bool,
}

/// Scale a column to `[0, 1]` relative to its own extremes
pub fn min_max_normalize(values: &[i64], policy: DegenerateColumnPolicy) -> NormalizedColumn {
    let (min, max) = match (values.iter().min(), values.iter().max()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => {
            return NormalizedColumn {
                values: Vec::new(),
                degenerate: true,
            }
        }
    };

    if min == max {
        return NormalizedColumn {
            values: vec![policy.value(); values.len()],
            degenerate: true,
        };
    }

    let range = (max - min) as f64;
    NormalizedColumn {
        values: values.iter().map(|&v| (v - min) as f64 / range).collect(),
        degenerate: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max_normalize() {
        let column = min_max_normalize(&[50, 30, 10], DegenerateColumnPolicy::Midpoint);
        assert!(!column.degenerate);
        assert_eq!(column.values, vec![1.0, 0.5, 0.0]);
    }

    #[test]
    fn test_negative_ratings() {
        let column = min_max_normalize(&[-20, 0, 20], DegenerateColumnPolicy::Midpoint);
        assert_eq!(column.values, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_degenerate_column_midpoint() {
        assert_eq!(DegenerateColumnPolicy::default(), DegenerateColumnPolicy::Midpoint);

        let column = min_max_normalize(&[7, 7, 7], DegenerateColumnPolicy::default());
        assert!(column.degenerate);
        assert_eq!(column.values, vec![0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_degenerate_column_fixed() {
        let column = min_max_normalize(&[3], DegenerateColumnPolicy::Fixed(0.0));
        assert!(column.degenerate);
        assert_eq!(column.values, vec![0.0]);
    }

    #[test]
    fn test_empty_column() {
        let column = min_max_normalize(&[], DegenerateColumnPolicy::Midpoint);
        assert!(column.values.is_empty());
    }

    #[test]
    fn test_policy_validation() {
        assert!(DegenerateColumnPolicy::Midpoint.validate().is_ok());
        assert!(DegenerateColumnPolicy::Fixed(1.0).validate().is_ok());
        assert!(DegenerateColumnPolicy::Fixed(1.5).validate().is_err());
        assert!(DegenerateColumnPolicy::Fixed(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_policy_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: DegenerateColumnPolicy,
        }

        let midpoint: Wrapper = toml::from_str(r#"policy = "midpoint""#).unwrap();
        assert_eq!(midpoint.policy, DegenerateColumnPolicy::Midpoint);

        let fixed: Wrapper = toml::from_str("policy = { fixed = 0.25 }").unwrap();
        assert_eq!(fixed.policy, DegenerateColumnPolicy::Fixed(0.25));
    }
}
