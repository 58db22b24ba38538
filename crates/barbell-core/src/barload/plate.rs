use serde::{Deserialize, Serialize};

/// Display color of a plate, serialized as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlateColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PlateColor {
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    pub const BLUE: Self = Self::rgb(0x49, 0x90, 0xE2);
    pub const GREEN: Self = Self::rgb(0x2A, 0xB0, 0x03);
    pub const GRAY: Self = Self::rgb(0x57, 0x57, 0x57);
    pub const RED: Self = Self::rgb(0xFF, 0x00, 0x00);
    pub const YELLOW: Self = Self::rgb(0xFF, 0xEF, 0x2A);
    pub const ORANGE: Self = Self::rgb(0xF2, 0x5A, 0x1D);
    pub const PINK: Self = Self::rgb(0xE8, 0x1F, 0xA5);
    pub const PURPLE: Self = Self::rgb(0x9B, 0x16, 0xF2);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn parse_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl std::fmt::Display for PlateColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for PlateColor {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::parse_hex(&value).ok_or_else(|| format!("invalid plate color: {}", value))
    }
}

impl From<PlateColor> for String {
    fn from(color: PlateColor) -> Self {
        color.to_string()
    }
}

/// A plate in the meet's inventory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plate {
    pub weight_kg: f64,
    /// Number of matching pairs available; one plate of each pair per side.
    pub pair_count: u32,
    pub color: PlateColor,
}

impl Plate {
    pub fn new(weight_kg: f64, pair_count: u32, color: PlateColor) -> Self {
        Self {
            weight_kg,
            pair_count,
            color,
        }
    }
}

/// One plate on one side of the bar, in loading order.
///
/// `weight` is in the unit the loading was computed in. A negative weight is
/// the unloadable remainder and always comes last.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadedPlate {
    pub weight: f64,
    pub is_already_loaded: bool,
    pub color: PlateColor,
}

impl LoadedPlate {
    pub fn new(weight: f64, color: PlateColor) -> Self {
        Self {
            weight,
            is_already_loaded: false,
            color,
        }
    }

    /// Whether this is the unloadable remainder rather than a real plate.
    pub fn is_remainder(&self) -> bool {
        self.weight < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex_round_trip() {
        assert_eq!(PlateColor::BLUE.to_string(), "#4990E2");
        assert_eq!(PlateColor::parse_hex("#4990e2"), Some(PlateColor::BLUE));
        assert_eq!(PlateColor::parse_hex("4990E2"), None);
        assert_eq!(PlateColor::parse_hex("#49"), None);
    }

    #[test]
    fn test_plate_serde() {
        let plate: Plate =
            serde_json::from_str(r##"{"weightKg": 25, "pairCount": 8, "color": "#FF0000"}"##).unwrap();
        assert_eq!(plate, Plate::new(25.0, 8, PlateColor::RED));
        assert!(serde_json::from_str::<Plate>(r##"{"weightKg": 25, "pairCount": 8, "color": "red"}"##).is_err());
    }
}
