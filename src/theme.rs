//! Portfolio color palette.
//!
//! Five semantic roles drive every colour on the page. Derived colours
//! (tag chip backgrounds, muted text) are computed from them so the page
//! stays consistent if a role changes.

use ratatui::style::Color;

// === Palette Roles ===

/// Deep navy - hero background and headings.
pub const PRIMARY: Color = Color::Rgb(45, 50, 80);
/// Muted blue - contact background and nav links.
pub const SECONDARY: Color = Color::Rgb(66, 71, 105);
/// Lavender blue - icons, tags, and project links.
pub const ACCENT: Color = Color::Rgb(112, 119, 161);
/// Off white - page background.
pub const LIGHT: Color = Color::Rgb(246, 246, 246);
/// Soft pink - social links, focus rings, and the submit button.
pub const HIGHLIGHT: Color = Color::Rgb(230, 185, 222);

/// Semantic palette role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Primary,
    Secondary,
    Accent,
    Light,
    Highlight,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 5] = [
        Role::Primary,
        Role::Secondary,
        Role::Accent,
        Role::Light,
        Role::Highlight,
    ];

    /// Colour assigned to this role.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Role::Primary => PRIMARY,
            Role::Secondary => SECONDARY,
            Role::Accent => ACCENT,
            Role::Light => LIGHT,
            Role::Highlight => HIGHLIGHT,
        }
    }

    /// Name of the role.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::Secondary => "secondary",
            Role::Accent => "accent",
            Role::Light => "light",
            Role::Highlight => "highlight",
        }
    }

    /// Hex notation of the role's colour.
    #[must_use]
    pub fn hex(self) -> String {
        match self.color() {
            Color::Rgb(r, g, b) => format!("#{r:02X}{g:02X}{b:02X}"),
            other => format!("{other}"),
        }
    }
}

// === Derived Colors ===

/// Card surface.
pub const CARD_BG: Color = Color::Rgb(255, 255, 255);
/// Body copy on cards.
pub const TEXT_MUTED: Color = Color::Rgb(75, 85, 99);
/// Text on the dark sections.
pub const TEXT_ON_DARK: Color = Color::Rgb(255, 255, 255);
/// Form input surface.
pub const INPUT_BG: Color = Color::Rgb(240, 240, 244);
/// Nav bar background.
pub const NAV_BG: Color = Color::Rgb(255, 255, 255);
/// Error toasts.
pub const ERROR: Color = Color::Rgb(191, 97, 106);

/// Tag chip background: accent at 1/8 opacity over the card.
#[must_use]
pub fn tag_background() -> Color {
    blend(ACCENT, CARD_BG, 0x20)
}

/// Alpha-blend `fg` over `bg`, `alpha` in 0..=255.
#[must_use]
pub fn blend(fg: Color, bg: Color, alpha: u8) -> Color {
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let mix = |f: u8, b: u8| -> u8 {
                let a = u16::from(alpha);
                let v = (u16::from(f) * a + u16::from(b) * (255 - a) + 127) / 255;
                // a weighted average of two u8 values never exceeds 255
                u8::try_from(v).unwrap_or(u8::MAX)
            };
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        (fg, _) => fg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_hex_matches_palette() {
        let hexes: Vec<String> = Role::ALL.iter().map(|r| r.hex()).collect();
        assert_eq!(
            hexes,
            ["#2D3250", "#424769", "#7077A1", "#F6F6F6", "#E6B9DE"]
        );
    }

    #[test]
    fn test_blend_extremes() {
        assert_eq!(blend(ACCENT, CARD_BG, 255), ACCENT);
        assert_eq!(blend(ACCENT, CARD_BG, 0), CARD_BG);
    }

    #[test]
    fn test_tag_background_is_light_tint() {
        let Color::Rgb(r, g, b) = tag_background() else {
            panic!("expected rgb");
        };
        assert!(r > 230 && g > 230 && b > 230);
        assert!(b > r, "tint keeps the accent's blue bias");
    }
}
