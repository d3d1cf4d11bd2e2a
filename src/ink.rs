use image::Rgb;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid ink color {0:?}; expected R,G,B or #RRGGBB")]
pub struct ParseInkError(String);

/// The single foreground color treated as a set bit. Every other color,
/// including partial channel matches, packs as 0.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InkColor(pub Rgb<u8>);

impl InkColor {
    pub const BLACK: InkColor = InkColor(Rgb([0, 0, 0]));

    pub fn matches(&self, pixel: &Rgb<u8>) -> bool {
        *pixel == self.0
    }
}

impl Default for InkColor {
    fn default() -> Self {
        InkColor::BLACK
    }
}

impl From<Rgb<u8>> for InkColor {
    fn from(value: Rgb<u8>) -> Self {
        InkColor(value)
    }
}

impl FromStr for InkColor {
    type Err = ParseInkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() == 6 {
                if let Ok(value) = u32::from_str_radix(hex, 16) {
                    let [_, r, g, b] = value.to_be_bytes();
                    return Ok(InkColor(Rgb([r, g, b])));
                }
            }
            return Err(ParseInkError(s.to_string()));
        }
        let channels = s
            .split(',')
            .map(|part| part.trim().parse::<u8>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ParseInkError(s.to_string()))?;
        match channels[..] {
            [r, g, b] => Ok(InkColor(Rgb([r, g, b]))),
            _ => Err(ParseInkError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_triple() {
        let ink: InkColor = "255, 243, 56".parse().unwrap();
        assert_eq!(ink, InkColor(Rgb([255, 243, 56])));
    }

    #[test]
    fn parses_hex() {
        let ink: InkColor = "#BF0000".parse().unwrap();
        assert_eq!(ink, InkColor(Rgb([191, 0, 0])));
    }

    #[test]
    fn default_is_black() {
        assert_eq!(InkColor::default(), InkColor(Rgb([0, 0, 0])));
    }

    #[test]
    fn rejects_malformed() {
        assert!("256,0,0".parse::<InkColor>().is_err());
        assert!("1,2".parse::<InkColor>().is_err());
        assert!("#FFF".parse::<InkColor>().is_err());
        assert!("black".parse::<InkColor>().is_err());
    }

    #[test]
    fn exact_match_only() {
        let ink = InkColor(Rgb([0, 0, 0]));
        assert!(ink.matches(&Rgb([0, 0, 0])));
        assert!(!ink.matches(&Rgb([0, 0, 1])));
    }
}
