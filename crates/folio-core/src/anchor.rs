//! In-page anchors.

/// An anchor target on the single page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionAnchor {
    /// Top of the page, used by the nav logo.
    Top,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl SectionAnchor {
    /// Anchors shown in the navigation bar, in page order.
    pub const NAV: [SectionAnchor; 5] = [
        SectionAnchor::About,
        SectionAnchor::Skills,
        SectionAnchor::Experience,
        SectionAnchor::Projects,
        SectionAnchor::Contact,
    ];

    /// Element id.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Link target (`#id`).
    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }

    /// Navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Section number (1-indexed) for nav entries.
    pub fn number(&self) -> Option<u8> {
        Self::NAV
            .iter()
            .position(|a| a == self)
            .map(|i| i as u8 + 1)
    }

    /// Eyebrow text above a section heading, e.g. `01. ABOUT`.
    pub fn eyebrow(&self) -> Option<String> {
        self.number()
            .map(|n| format!("{:02}. {}", n, self.label().to_uppercase()))
    }

    /// Look up an anchor by id (with or without the leading `#`).
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.strip_prefix('#').unwrap_or(id);
        std::iter::once(Self::Top)
            .chain(Self::NAV)
            .find(|a| a.id() == id)
    }
}

impl std::fmt::Display for SectionAnchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}
