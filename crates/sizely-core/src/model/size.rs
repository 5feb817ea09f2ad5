use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// T-shirt size bucket used to estimate a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SizeTier {
    #[serde(rename = "XS")]
    ExtraSmall = 0,
    #[serde(rename = "S")]
    Small = 1,
    #[serde(rename = "M")]
    Medium = 2,
    #[serde(rename = "L")]
    Large = 3,
}

const TIER_POINTS: [u32; 4] = [1, 3, 5, 10];

impl SizeTier {
    pub const ALL: [SizeTier; 4] = [
        SizeTier::ExtraSmall,
        SizeTier::Small,
        SizeTier::Medium,
        SizeTier::Large,
    ];

    /// Heaviest tier first; the enumerator walks tiers in this order.
    pub const ENUMERATION_ORDER: [SizeTier; 4] = [
        SizeTier::Large,
        SizeTier::Medium,
        SizeTier::Small,
        SizeTier::ExtraSmall,
    ];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(SizeTier::ExtraSmall),
            1 => Some(SizeTier::Small),
            2 => Some(SizeTier::Medium),
            3 => Some(SizeTier::Large),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn points(self) -> u32 {
        TIER_POINTS[self.index()]
    }

    pub const fn label(self) -> &'static str {
        match self {
            SizeTier::ExtraSmall => "XS",
            SizeTier::Small => "S",
            SizeTier::Medium => "M",
            SizeTier::Large => "L",
        }
    }

    /// Rough wall-clock guide shown in help output.
    pub const fn duration_hint(self) -> &'static str {
        match self {
            SizeTier::ExtraSmall => "30min - 4hrs",
            SizeTier::Small => "4hrs - 1 day",
            SizeTier::Medium => "2-3 days",
            SizeTier::Large => "1 week",
        }
    }

    pub const fn is_small(self) -> bool {
        matches!(self, SizeTier::ExtraSmall | SizeTier::Small)
    }
}

impl fmt::Display for SizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SizeTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "XS" => Ok(SizeTier::ExtraSmall),
            "S" => Ok(SizeTier::Small),
            "M" => Ok(SizeTier::Medium),
            "L" => Ok(SizeTier::Large),
            other => Err(format!("unknown size tier '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SizeTier;

    #[test]
    fn points_follow_fixed_weights() {
        let weights: Vec<u32> = SizeTier::ALL.iter().map(|tier| tier.points()).collect();
        assert_eq!(weights, vec![1, 3, 5, 10]);
    }

    #[test]
    fn enumeration_order_is_descending_weight() {
        let weights: Vec<u32> = SizeTier::ENUMERATION_ORDER
            .iter()
            .map(|tier| tier.points())
            .collect();
        assert_eq!(weights, vec![10, 5, 3, 1]);
    }

    #[test]
    fn labels_roundtrip_through_from_str() {
        for tier in SizeTier::ALL {
            assert_eq!(tier.to_string().parse::<SizeTier>(), Ok(tier));
        }
        assert_eq!("xs".parse::<SizeTier>(), Ok(SizeTier::ExtraSmall));
        assert!("XL".parse::<SizeTier>().is_err());
    }

    #[test]
    fn from_index_maps_valid_values() {
        assert_eq!(SizeTier::from_index(3), Some(SizeTier::Large));
        assert_eq!(SizeTier::from_index(4), None);
    }
}
