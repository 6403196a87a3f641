//! Metric and index types
//!
//! The wire carries both as plain integers (`CollectionSchema::metric_type`,
//! `IndexParam::index_type`); these enums give them names.

use std::fmt;
use std::str::FromStr;

/// Distance metric of a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum MetricType {
    L2 = 1,
    Ip = 2,
    Hamming = 3,
    Jaccard = 4,
    Tanimoto = 5,
    Substructure = 6,
    Superstructure = 7,
}

/// Index built over a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum IndexType {
    Invalid = 0,
    Flat = 1,
    IvfFlat = 2,
    IvfSq8 = 3,
    Rnsg = 4,
    IvfSq8h = 5,
    IvfPq = 6,
    Hnsw = 11,
    Annoy = 12,
}

impl MetricType {
    const ALL: [MetricType; 7] = [
        Self::L2,
        Self::Ip,
        Self::Hamming,
        Self::Jaccard,
        Self::Tanimoto,
        Self::Substructure,
        Self::Superstructure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::L2 => "L2",
            Self::Ip => "IP",
            Self::Hamming => "HAMMING",
            Self::Jaccard => "JACCARD",
            Self::Tanimoto => "TANIMOTO",
            Self::Substructure => "SUBSTRUCTURE",
            Self::Superstructure => "SUPERSTRUCTURE",
        }
    }

    /// Binary metrics work on `RowRecord::binary_data`
    pub fn is_binary(&self) -> bool {
        !matches!(self, Self::L2 | Self::Ip)
    }
}

impl IndexType {
    const ALL: [IndexType; 9] = [
        Self::Invalid,
        Self::Flat,
        Self::IvfFlat,
        Self::IvfSq8,
        Self::Rnsg,
        Self::IvfSq8h,
        Self::IvfPq,
        Self::Hnsw,
        Self::Annoy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invalid => "INVALID",
            Self::Flat => "FLAT",
            Self::IvfFlat => "IVF_FLAT",
            Self::IvfSq8 => "IVF_SQ8",
            Self::Rnsg => "RNSG",
            Self::IvfSq8h => "IVF_SQ8_HYBRID",
            Self::IvfPq => "IVF_PQ",
            Self::Hnsw => "HNSW",
            Self::Annoy => "ANNOY",
        }
    }
}

macro_rules! wire_enum {
    ($name:ident, $label:literal) => {
        impl From<$name> for i32 {
            fn from(value: $name) -> i32 {
                value as i32
            }
        }

        impl TryFrom<i32> for $name {
            type Error = i32;

            fn try_from(value: i32) -> Result<Self, i32> {
                Self::ALL
                    .into_iter()
                    .find(|v| *v as i32 == value)
                    .ok_or(value)
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, String> {
                Self::ALL
                    .into_iter()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| format!("unknown {}: {s}", $label))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum!(MetricType, "metric type");
wire_enum!(IndexType, "index type");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(i32::from(MetricType::Ip), 2);
        assert_eq!(i32::from(IndexType::Hnsw), 11);
        assert_eq!(IndexType::try_from(12), Ok(IndexType::Annoy));
        assert_eq!(IndexType::try_from(7), Err(7));
        assert_eq!(MetricType::try_from(0), Err(0));
    }

    #[test]
    fn test_names_parse_case_insensitively() {
        assert_eq!("ip".parse::<MetricType>(), Ok(MetricType::Ip));
        assert_eq!("IVF_FLAT".parse::<IndexType>(), Ok(IndexType::IvfFlat));
        assert!("cosine".parse::<MetricType>().is_err());
        assert_eq!(IndexType::IvfSq8h.to_string(), "IVF_SQ8_HYBRID");
    }

    #[test]
    fn test_binary_metrics() {
        assert!(!MetricType::L2.is_binary());
        assert!(MetricType::Jaccard.is_binary());
    }
}
