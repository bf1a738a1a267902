//! The seven canonical swatch roles.

use std::fmt;

use super::swatch::Swatch;

/// A role assigned to at most one swatch per palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SwatchRole {
    Dominant,
    Vibrant,
    DarkVibrant,
    LightVibrant,
    Muted,
    DarkMuted,
    LightMuted,
}

impl SwatchRole {
    /// All roles, dominant first.
    pub const ALL: [SwatchRole; 7] = [
        SwatchRole::Dominant,
        SwatchRole::Vibrant,
        SwatchRole::DarkVibrant,
        SwatchRole::LightVibrant,
        SwatchRole::Muted,
        SwatchRole::DarkMuted,
        SwatchRole::LightMuted,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SwatchRole::Dominant => "dominant",
            SwatchRole::Vibrant => "vibrant",
            SwatchRole::DarkVibrant => "dark-vibrant",
            SwatchRole::LightVibrant => "light-vibrant",
            SwatchRole::Muted => "muted",
            SwatchRole::DarkMuted => "dark-muted",
            SwatchRole::LightMuted => "light-muted",
        }
    }
}

impl fmt::Display for SwatchRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Role → optional swatch mapping. Any role may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedSwatches {
    pub dominant: Option<Swatch>,
    pub vibrant: Option<Swatch>,
    pub dark_vibrant: Option<Swatch>,
    pub light_vibrant: Option<Swatch>,
    pub muted: Option<Swatch>,
    pub dark_muted: Option<Swatch>,
    pub light_muted: Option<Swatch>,
}

impl NamedSwatches {
    pub fn get(&self, role: SwatchRole) -> Option<Swatch> {
        match role {
            SwatchRole::Dominant => self.dominant,
            SwatchRole::Vibrant => self.vibrant,
            SwatchRole::DarkVibrant => self.dark_vibrant,
            SwatchRole::LightVibrant => self.light_vibrant,
            SwatchRole::Muted => self.muted,
            SwatchRole::DarkMuted => self.dark_muted,
            SwatchRole::LightMuted => self.light_muted,
        }
    }

    pub fn set(&mut self, role: SwatchRole, swatch: Option<Swatch>) {
        let slot = match role {
            SwatchRole::Dominant => &mut self.dominant,
            SwatchRole::Vibrant => &mut self.vibrant,
            SwatchRole::DarkVibrant => &mut self.dark_vibrant,
            SwatchRole::LightVibrant => &mut self.light_vibrant,
            SwatchRole::Muted => &mut self.muted,
            SwatchRole::DarkMuted => &mut self.dark_muted,
            SwatchRole::LightMuted => &mut self.light_muted,
        };
        *slot = swatch;
    }

    /// True when no role is filled.
    pub fn is_empty(&self) -> bool {
        SwatchRole::ALL.iter().all(|&role| self.get(role).is_none())
    }
}
