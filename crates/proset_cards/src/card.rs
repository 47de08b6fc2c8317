//! Six-dot cards and their colour palette.

use crate::CardError;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Number of dot positions on every card.
pub const DOTS_PER_CARD: usize = 6;

/// Colour of a dot position, in palette order.
///
/// Position `i` on a card always carries the `i`-th colour.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DotColor {
    /// Position 0.
    Red,
    /// Position 1.
    Orange,
    /// Position 2.
    Yellow,
    /// Position 3.
    Green,
    /// Position 4.
    Blue,
    /// Position 5.
    Purple,
}

impl DotColor {
    /// Returns the colour for a dot position, or `None` past the palette.
    #[instrument]
    pub fn at(position: usize) -> Option<Self> {
        Self::iter().nth(position)
    }

    /// Returns the dot position this colour occupies.
    pub fn position(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Orange => 1,
            Self::Yellow => 2,
            Self::Green => 3,
            Self::Blue => 4,
            Self::Purple => 5,
        }
    }
}

/// A card: presence or absence of a dot at each of the six positions.
///
/// Cards are immutable once built. On the wire a card is a JSON array of six
/// booleans; `0`/`1` integers are accepted on input as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<WireDot>", into = "[bool; 6]")]
pub struct Card {
    dots: [bool; DOTS_PER_CARD],
}

impl Card {
    /// Creates a card from its dot pattern.
    pub fn new(dots: [bool; DOTS_PER_CARD]) -> Self {
        Self { dots }
    }

    /// Creates a card from a 6-bit pattern where bit 5 is position 0.
    ///
    /// Zero is rejected: a card always shows at least one dot.
    #[instrument]
    pub fn from_bits(bits: u8) -> Result<Self, CardError> {
        if bits == 0 || bits >= 1 << DOTS_PER_CARD {
            return Err(CardError::new(format!(
                "Card pattern {bits} outside 1..={}",
                (1u8 << DOTS_PER_CARD) - 1
            )));
        }
        let mut dots = [false; DOTS_PER_CARD];
        for (position, dot) in dots.iter_mut().enumerate() {
            *dot = bits & (1 << (DOTS_PER_CARD - 1 - position)) != 0;
        }
        Ok(Self { dots })
    }

    /// Returns the 6-bit pattern of this card (inverse of [`Card::from_bits`]).
    pub fn bits(&self) -> u8 {
        self.dots
            .iter()
            .fold(0u8, |acc, &dot| (acc << 1) | u8::from(dot))
    }

    /// Returns the raw dot pattern.
    pub fn dots(&self) -> &[bool; DOTS_PER_CARD] {
        &self.dots
    }

    /// Checks whether the dot of the given colour is present.
    pub fn has_dot(&self, color: DotColor) -> bool {
        self.dots[color.position()]
    }

    /// Iterates over the colours present on this card, in palette order.
    pub fn colors(&self) -> impl Iterator<Item = DotColor> + '_ {
        DotColor::iter().filter(|color| self.has_dot(*color))
    }

    /// Counts the dots on this card.
    pub fn dot_count(&self) -> usize {
        self.dots.iter().filter(|dot| **dot).count()
    }
}

impl From<Card> for [bool; DOTS_PER_CARD] {
    fn from(card: Card) -> Self {
        card.dots
    }
}

/// One dot as it may appear on the wire.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
enum WireDot {
    Flag(bool),
    Bit(u8),
}

impl TryFrom<Vec<WireDot>> for Card {
    type Error = CardError;

    fn try_from(wire: Vec<WireDot>) -> Result<Self, Self::Error> {
        if wire.len() != DOTS_PER_CARD {
            return Err(CardError::new(format!(
                "Expected {DOTS_PER_CARD} dots, got {}",
                wire.len()
            )));
        }
        let mut dots = [false; DOTS_PER_CARD];
        for (dot, value) in dots.iter_mut().zip(wire) {
            *dot = match value {
                WireDot::Flag(flag) => flag,
                WireDot::Bit(0) => false,
                WireDot::Bit(1) => true,
                WireDot::Bit(other) => {
                    return Err(CardError::new(format!("Dot value {other} is not 0 or 1")));
                }
            };
        }
        Ok(Self { dots })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_order() {
        let colors: Vec<_> = DotColor::iter().collect();
        assert_eq!(
            colors,
            [
                DotColor::Red,
                DotColor::Orange,
                DotColor::Yellow,
                DotColor::Green,
                DotColor::Blue,
                DotColor::Purple,
            ]
        );
        for (position, color) in colors.iter().enumerate() {
            assert_eq!(color.position(), position);
            assert_eq!(DotColor::at(position), Some(*color));
        }
        assert_eq!(DotColor::at(6), None);
    }

    #[test]
    fn test_from_bits_maps_high_bit_to_red() {
        let card = Card::from_bits(0b100001).expect("valid pattern");
        assert_eq!(card.dots(), &[true, false, false, false, false, true]);
        assert_eq!(card.bits(), 0b100001);
        let colors: Vec<_> = card.colors().collect();
        assert_eq!(colors, [DotColor::Red, DotColor::Purple]);
    }

    #[test]
    fn test_from_bits_rejects_blank_and_overflow() {
        assert!(Card::from_bits(0).is_err());
        assert!(Card::from_bits(64).is_err());
        assert!(Card::from_bits(63).is_ok());
    }

    #[test]
    fn test_deserialize_accepts_bools_and_bits() {
        let from_bools: Card =
            serde_json::from_str("[true, false, true, false, false, false]").expect("bools");
        let from_bits: Card = serde_json::from_str("[1, 0, 1, 0, 0, 0]").expect("bits");
        assert_eq!(from_bools, from_bits);
        assert_eq!(from_bools.dot_count(), 2);
    }

    #[test]
    fn test_deserialize_rejects_wrong_shape() {
        assert!(serde_json::from_str::<Card>("[1, 0, 1]").is_err());
        assert!(serde_json::from_str::<Card>("[1, 0, 1, 0, 0, 2]").is_err());
    }

    #[test]
    fn test_serializes_as_bools() {
        let card = Card::new([false, true, false, false, true, false]);
        let json = serde_json::to_string(&card).expect("serialize");
        assert_eq!(json, "[false,true,false,false,true,false]");
    }
}
