//! Static profile records for the non-filterable site sections.
//!
//! These records carry presentation data only; nothing filters or mutates
//! them after construction.

use serde::Serialize;

/// In-page navigation entry (`href` is always an anchor like `#blog`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Hero banner copy plus the background video asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub kicker: &'static str,
    pub headline: &'static str,
    pub intro: &'static str,
    /// Relative asset name, resolved through `SiteConfig`.
    pub video_asset: &'static str,
}

impl Hero {
    /// Headline words separated by spaces, as animated word-by-word.
    pub fn headline_words(&self) -> Vec<&'static str> {
        self.headline.split(' ').collect()
    }
}

/// Labelled highlight card in the about section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct About {
    pub owner: &'static str,
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    pub highlights: &'static [Highlight],
    /// Relative asset name of the portrait image.
    pub portrait_asset: &'static str,
}

/// Named group of skills, e.g. `Languages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

/// One institution in the academics timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct School {
    pub level: &'static str,
    pub name: &'static str,
    pub location: &'static str,
}

/// One entry in the personal timeline, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub date: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

/// Contact block. The form fields are listed for display and never submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub email: &'static str,
    pub location: &'static str,
    pub form_fields: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub owner: &'static str,
    pub socials: &'static [&'static str],
    pub subscribe_placeholder: &'static str,
}
