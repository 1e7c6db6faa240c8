//! Lottery ball palette.

use serde::{Deserialize, Serialize};

/// Colour of a lottery ball.
///
/// Balls are coloured by position, cycling through [`BallColor::PALETTE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BallColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
}

impl BallColor {
    /// All colours in cycling order.
    pub const PALETTE: [Self; 7] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Purple,
        Self::Pink,
    ];

    /// Colour of the ball at `index`.
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        Self::PALETTE[index % Self::PALETTE.len()]
    }

    /// CSS class applied to a revealed result ball.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Red => "ball-red",
            Self::Orange => "ball-orange",
            Self::Yellow => "ball-yellow",
            Self::Green => "ball-green",
            Self::Blue => "ball-blue",
            Self::Purple => "ball-purple",
            Self::Pink => "ball-pink",
        }
    }

    /// Radial gradient used for balls tumbling inside the machine.
    #[must_use]
    pub const fn gradient(self) -> &'static str {
        match self {
            Self::Red => "radial-gradient(circle at 35% 30%, #FF6B6B, #E53935 50%, #B71C1C 85%)",
            Self::Orange => {
                "radial-gradient(circle at 35% 30%, #FFB74D, #FB8C00 50%, #E65100 85%)"
            }
            Self::Yellow => {
                "radial-gradient(circle at 35% 30%, #FFF176, #FDD835 50%, #F9A825 85%)"
            }
            Self::Green => "radial-gradient(circle at 35% 30%, #81C784, #43A047 50%, #1B5E20 85%)",
            Self::Blue => "radial-gradient(circle at 35% 30%, #64B5F6, #1E88E5 50%, #0D47A1 85%)",
            Self::Purple => {
                "radial-gradient(circle at 35% 30%, #BA68C8, #8E24AA 50%, #4A148C 85%)"
            }
            Self::Pink => "radial-gradient(circle at 35% 30%, #F48FB1, #EC407A 50%, #AD1457 85%)",
        }
    }
}
