//! Static page copy: links, embeds, and contact addresses.
//!
//! Kept as data so the components stay pure layout.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const ARTIST_NAME: &str = "MAFFA";

pub const TAGLINE: &str =
    "DJ/Producer. Tech House • Melodic • Club Energy. Available for clubs, festivals and exclusive events.";

pub const BIO: &str = "Italian DJ and producer blending groove-heavy drums with melodic textures. \
Performances deliver high energy and immersive soundscapes. Open for bookings worldwide.";

/// In-page section anchors, in navigation order.
pub const NAV_SECTIONS: [NavSection; 4] = [
    NavSection { id: "music", label: "Music" },
    NavSection { id: "gigs", label: "Gigs" },
    NavSection { id: "about", label: "About" },
    NavSection { id: "contact", label: "Contact" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
}

impl NavSection {
    #[must_use]
    pub fn href(self) -> String {
        format!("#{}", self.id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialIcon {
    Instagram,
    SoundCloud,
    Spotify,
}

impl SocialIcon {
    /// SVG path data for the 24x24 icon.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Instagram => {
                "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5m10 2H7a3 3 0 0 0-3 3v10a3 3 0 0 0 3 3h10a3 3 0 0 0 3-3V7a3 3 0 0 0-3-3m-2.75 3.5a1.25 1.25 0 1 1 0 2.5 1.25 1.25 0 0 1 0-2.5M12 7a5 5 0 1 1 0 10 5 5 0 0 1 0-10m0 2a3 3 0 1 0 0 6 3 3 0 0 0 0-6z"
            }
            Self::SoundCloud => "M17 8a5 5 0 0 0-4.58 2.88A3.5 3.5 0 1 0 9.5 18H17a4 4 0 1 0 0-8z",
            Self::Spotify => {
                "M12 1.98A10 10 0 1 0 22 12 10 10 0 0 0 12 2m4.36 14.84a.75.75 0 0 1-1.03.25 8.38 8.38 0 0 0-8.66-.25.75.75 0 0 1-.78-1.28 9.88 9.88 0 0 1 10.21.3.75.75 0 0 1 .26.98m1.37-3.05a.94.94 0 0 1-1.28.31 11.41 11.41 0 0 0-11.8-.34.94.94 0 0 1-.89-1.65 13.09 13.09 0 0 1 13.55.4.94.94 0 0 1 .42 1.28m.13-3.12a1.12 1.12 0 0 1-1.53.36 14.91 14.91 0 0 0-15.43-.41 1.12 1.12 0 0 1-1.05-1.97 17 17 0 0 1 17.63.46 1.12 1.12 0 0 1 .38 1.56z"
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    /// Short label used on the compact contact card.
    pub short: &'static str,
    pub href: &'static str,
    pub icon: SocialIcon,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { label: "Instagram", short: "IG", href: "https://instagram.com", icon: SocialIcon::Instagram },
    SocialLink { label: "SoundCloud", short: "SC", href: "https://soundcloud.com", icon: SocialIcon::SoundCloud },
    SocialLink { label: "Spotify", short: "SPOTIFY", href: "https://open.spotify.com", icon: SocialIcon::Spotify },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerEmbed {
    pub title: &'static str,
    pub src: &'static str,
    pub allow: &'static str,
}

pub const PLAYER_EMBEDS: [PlayerEmbed; 2] = [
    PlayerEmbed {
        title: "Spotify Embed",
        src: "https://open.spotify.com/embed/playlist/37i9dQZF1DXcBWIGoYBM5M?utm_source=generator",
        allow: "autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture",
    },
    PlayerEmbed {
        title: "SoundCloud Embed",
        src: "https://w.soundcloud.com/player/?url=https%3A//api.soundcloud.com/playlists/209262931&color=%23ff5500&auto_play=false&show_user=true",
        allow: "autoplay",
    },
];

pub const ABOUT_HIGHLIGHTS: [&str; 4] = [
    "Club & Festival Ready",
    "Original Productions & Remixes",
    "Professional Rider",
    "Available for International Bookings",
];

pub const BOOKING_EMAIL: &str = "booking@maffa.dj";
pub const PRESS_EMAIL: &str = "press@maffa.dj";
pub const HOME_BASE: &str = "Italy / EU";
