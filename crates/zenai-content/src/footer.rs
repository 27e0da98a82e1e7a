use crate::metadata::SITE;
use crate::route::Anchor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
    /// Opens in a new tab with `rel="noopener noreferrer"`.
    pub external: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterContent {
    pub quick_links: [(&'static str, Anchor); 3],
    pub social: [FooterLink; 3],
    pub call_to_action: &'static str,
    pub call_to_action_target: Anchor,
}

pub const FOOTER: FooterContent = FooterContent {
    quick_links: [
        ("Work", Anchor::Work),
        ("Services", Anchor::Services),
        ("Contact", Anchor::Contact),
    ],
    social: [
        FooterLink {
            label: "Instagram",
            href: "https://instagram.com",
            external: true,
        },
        FooterLink {
            label: "Twitter",
            href: "https://twitter.com",
            external: true,
        },
        FooterLink {
            label: "LinkedIn",
            href: "https://linkedin.com",
            external: true,
        },
    ],
    call_to_action: "Let's Build Something Legendary.",
    call_to_action_target: Anchor::Contact,
};

pub fn copyright(year: i32) -> String {
    format!("© {year} {}. All rights reserved.", SITE.studio)
}
