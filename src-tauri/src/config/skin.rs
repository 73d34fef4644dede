use crate::animation::{Direction, ParticleSettings};
use crate::calculations::DOMAIN_VIOLATION_MESSAGE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinKind {
    /// Light blue window, bubbles rising from the bottom.
    #[default]
    Bubbles,
    /// Dark window, blood drops falling from the top.
    Bloody,
}

impl FromStr for SkinKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubbles" => Ok(SkinKind::Bubbles),
            "bloody" => Ok(SkinKind::Bloody),
            other => Err(format!("Unknown skin: {}", other)),
        }
    }
}

impl fmt::Display for SkinKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SkinKind::Bubbles => write!(f, "bubbles"),
            SkinKind::Bloody => write!(f, "bloody"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skin {
    pub kind: SkinKind,
    pub title: &'static str,
    pub domain_message: &'static str,
    pub particles: ParticleSettings,
}

impl Skin {
    pub fn for_kind(kind: SkinKind) -> Self {
        match kind {
            SkinKind::Bubbles => Skin {
                kind,
                title: "TRIANGLE-TOOLKIT",
                domain_message: DOMAIN_VIOLATION_MESSAGE,
                particles: ParticleSettings {
                    direction: Direction::Rising,
                    count: 15,
                    min_size: 12,
                    max_size: 30,
                    min_speed: 0.6,
                    max_speed: 1.5,
                    spawn_band: (0.7, 1.1),
                    respawn_min_offset: 0.0,
                    respawn_max_fraction: 0.3,
                },
            },
            SkinKind::Bloody => Skin {
                kind,
                title: "TRIANGLE-TOOLKIT yamikawa",
                domain_message: "b² ≥ c² じゃないと無理だよ…",
                particles: ParticleSettings {
                    direction: Direction::Falling,
                    count: 24,
                    min_size: 6,
                    max_size: 11,
                    min_speed: 0.7,
                    max_speed: 1.5,
                    spawn_band: (-0.8, 0.0),
                    respawn_min_offset: 10.0,
                    respawn_max_fraction: 0.6,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_skin_names() {
        assert_eq!("bubbles".parse::<SkinKind>(), Ok(SkinKind::Bubbles));
        assert_eq!(" Bloody ".parse::<SkinKind>(), Ok(SkinKind::Bloody));
        assert!("neon".parse::<SkinKind>().is_err());
    }

    #[test]
    fn skins_move_in_opposite_directions() {
        assert_eq!(
            Skin::for_kind(SkinKind::Bubbles).particles.direction,
            Direction::Rising
        );
        assert_eq!(
            Skin::for_kind(SkinKind::Bloody).particles.direction,
            Direction::Falling
        );
    }

    #[test]
    fn built_in_sizes_stay_within_documented_bounds() {
        for kind in [SkinKind::Bubbles, SkinKind::Bloody] {
            let particles = Skin::for_kind(kind).particles;
            assert!(particles.min_size >= 6 && particles.max_size <= 30);
            assert!(particles.min_speed >= 0.6 && particles.max_speed <= 1.5);
            assert!((15..=24).contains(&particles.count));
        }
    }
}
