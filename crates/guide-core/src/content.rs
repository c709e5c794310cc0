//! Static site copy: landing page, attributes, roles, navigation, footer.
//!
//! Pure data. Panels in `guide-ui` render these without any network access.

use guide_types::hero::PrimaryAttribute;

/// Top-level pages reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Heroes,
    Attributes,
    Roles,
    Assistant,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Heroes => "Heroes",
            Page::Attributes => "Attributes",
            Page::Roles => "Roles",
            Page::Assistant => "AI Assistant",
        }
    }

    /// Pages shown in the navigation bar, in order
    pub fn nav() -> &'static [Page] {
        &[Page::Heroes, Page::Attributes, Page::Roles, Page::Assistant]
    }
}

// ─── Landing ─────────────────────────────────────────────────

pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
}

pub const TAGLINE: &str = "Discover Your Hero and Dominate the Battlefield!";

pub const INTRO_HEADING: &str = "Welcome to the World of Dota 2";

pub const INTRO: [&str; 2] = [
    "Welcome to the thrilling world of Dota 2, where epic battles and limitless strategic possibilities await!",
    "Dota 2 is a multiplayer online battle arena (MOBA) where millions of players worldwide clash in teams of five, controlling unique heroes. Each hero possesses their own set of abilities and playstyle, making every battle a distinct experience.",
];

pub const ASSISTANT_PITCH_HEADING: &str = "Uncover Your Ideal Hero with Our AI Assistant!";

pub const ASSISTANT_PITCH: &str = "Not sure which hero to start with? Our intelligent assistant is here to help you make the right choice! Simply answer a few questions about your preferred playstyle, and it will suggest heroes that perfectly suit you.";

pub const FEATURES: [FeatureCard; 3] = [
    FeatureCard {
        title: "Hero Database",
        description: "Comprehensive information about all Dota 2 heroes, their abilities, stats, and roles.",
    },
    FeatureCard {
        title: "Strategy Guides",
        description: "Detailed guides on hero matchups, item builds, and gameplay tactics for every situation.",
    },
    FeatureCard {
        title: "AI Assistant",
        description: "Get personalized advice on hero picks, counter strategies, and gameplay tips from our AI.",
    },
];

pub const AUTHORS_HEADING: &str = "Authors of Dota 2";

pub const AUTHORS_INTRO: [&str; 2] = [
    "Dota 2 was developed and published by Valve Corporation.",
    "Dota 2's origins lie in the popular modification Defense of the Ancients (DotA) for Blizzard Entertainment's game Warcraft III: Reign of Chaos and its expansion The Frozen Throne.",
];

pub const AUTHORS: [(&str, &str); 3] = [
    ("Eul", "The creator of the first significant version of DotA."),
    ("Guinsoo (Steve Feak)", "The developer of the popular Defense of the Ancients: Allstars version."),
    ("IceFrog (anonymous)", "Continued the development of DotA: Allstars and subsequently led the development of Dota 2 at Valve."),
];

pub const AUTHORS_OUTRO: &str = "Therefore, Valve Corporation, under the leadership of IceFrog, are the primary creators of Dota 2, building upon the foundation laid by the early enthusiasts.";

pub const CALL_TO_ACTION_HEADING: &str = "Ready to Improve Your Game?";

pub const CALL_TO_ACTION: &str = "Start exploring our hero database or get personalized advice from our AI assistant.";

// ─── Attributes ──────────────────────────────────────────────

pub struct AttributeCard {
    pub attribute: PrimaryAttribute,
    pub description: &'static str,
    pub benefits: [&'static str; 3],
    pub playstyle: &'static str,
    pub heroes: &'static [&'static str],
}

pub const ATTRIBUTES: [AttributeCard; 3] = [
    AttributeCard {
        attribute: PrimaryAttribute::Strength,
        description: "Strength heroes typically have high health pools and are durable in combat. Each point of Strength provides +20 max health and +0.1 health regeneration.",
        benefits: ["Increased maximum health", "Improved health regeneration", "Higher physical resistance"],
        playstyle: "Strength heroes often serve as tanks, initiators, or durable carries. They excel at absorbing damage and disrupting enemy formations.",
        heroes: &["Axe", "Pudge", "Earthshaker", "Tiny", "Dragon Knight"],
    },
    AttributeCard {
        attribute: PrimaryAttribute::Agility,
        description: "Agility heroes typically have high attack speed and armor. Each point of Agility provides +1 attack speed and +0.16 armor.",
        benefits: ["Increased attack speed", "Improved armor", "Higher physical damage"],
        playstyle: "Agility heroes often serve as primary damage dealers or carries. They excel at dealing sustained physical damage and scaling into the late game.",
        heroes: &["Anti-Mage", "Drow Ranger", "Juggernaut", "Sniper", "Shadow Fiend"],
    },
    AttributeCard {
        attribute: PrimaryAttribute::Intelligence,
        description: "Intelligence heroes typically have large mana pools and powerful spells. Each point of Intelligence provides +12 max mana and +0.05 mana regeneration.",
        benefits: ["Increased maximum mana", "Improved mana regeneration", "Higher spell damage"],
        playstyle: "Intelligence heroes often serve as spellcasters, supports, or nukers. They excel at providing utility, control, and magical damage.",
        heroes: &["Invoker", "Crystal Maiden", "Lina", "Zeus", "Shadow Shaman"],
    },
];

pub const ATTRIBUTES_EXPLAINER: [&str; 3] = [
    "In Dota 2, each hero has three primary attributes: Strength, Agility, and Intelligence. One of these attributes is designated as the hero's primary attribute, which provides additional benefits when increased.",
    "When a hero's primary attribute increases, they gain additional attack damage. This makes items that boost a hero's primary attribute particularly valuable for that hero.",
    "Heroes can gain attributes through leveling up and by purchasing items. Understanding the role of attributes is crucial for effective item builds and hero development.",
];

// ─── Roles ───────────────────────────────────────────────────

pub struct RoleCard {
    pub name: &'static str,
    pub description: &'static str,
    pub responsibilities: [&'static str; 3],
    pub examples: [&'static str; 4],
}

pub const ROLES: [RoleCard; 6] = [
    RoleCard {
        name: "Carry",
        description: "Carries start weak but scale well with items and levels, becoming the primary damage dealers in the late game.",
        responsibilities: [
            "Farm efficiently to acquire key items",
            "Scale into the late game with high damage output",
            "Secure objectives and win teamfights",
        ],
        examples: ["Anti-Mage", "Juggernaut", "Spectre", "Phantom Assassin"],
    },
    RoleCard {
        name: "Support",
        description: "Supports focus on helping their team rather than farming. They provide vision, healing, and utility throughout the game.",
        responsibilities: [
            "Ward the map to provide vision",
            "Protect carries in the early game",
            "Provide healing, buffs, and utility in teamfights",
        ],
        examples: ["Crystal Maiden", "Witch Doctor", "Lion", "Dazzle"],
    },
    RoleCard {
        name: "Initiator",
        description: "Initiators start teamfights with powerful disables or area effects, creating opportunities for their team.",
        responsibilities: [
            "Start teamfights with strong disables",
            "Create space for carries to deal damage",
            "Disrupt enemy positioning",
        ],
        examples: ["Axe", "Earthshaker", "Tidehunter", "Magnus"],
    },
    RoleCard {
        name: "Nuker",
        description: "Nukers deal high amounts of magical damage in short bursts, often targeting key enemy heroes.",
        responsibilities: [
            "Deal burst damage to key targets",
            "Control teamfights with area spells",
            "Secure kills in the early and mid game",
        ],
        examples: ["Lina", "Zeus", "Tinker", "Lion"],
    },
    RoleCard {
        name: "Durable",
        description: "Durable heroes can absorb large amounts of damage, protecting their team and disrupting enemies.",
        responsibilities: [
            "Tank damage for the team",
            "Survive in the frontline of teamfights",
            "Disrupt enemy carries and protect allies",
        ],
        examples: ["Axe", "Bristleback", "Centaur Warrunner", "Dragon Knight"],
    },
    RoleCard {
        name: "Escape",
        description: "Escape heroes have abilities that allow them to quickly reposition or flee from dangerous situations.",
        responsibilities: [
            "Split push safely",
            "Escape ganks and dangerous situations",
            "Create space by drawing attention and surviving",
        ],
        examples: ["Anti-Mage", "Weaver", "Queen of Pain", "Puck"],
    },
];

pub const ROLES_EXPLAINER: [&str; 3] = [
    "In Dota 2, heroes can fulfill multiple roles depending on their abilities, attributes, and item builds. Understanding these roles is crucial for effective team composition and strategy.",
    "Most heroes excel in certain roles based on their innate abilities, but can adapt to different roles depending on the team's needs and the specific match situation.",
    "When drafting a team, it's important to ensure a balance of roles to cover all aspects of gameplay, from early game support to late game damage output.",
];

// ─── Footer ──────────────────────────────────────────────────

/// A footer entry; `None` when there is no in-app page behind it
pub struct FooterLink {
    pub label: &'static str,
    pub target: Option<Page>,
}

pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [FooterLink],
}

pub const BRAND: &str = "Dota2Guide";

pub const BRAND_BLURB: &str = "Your ultimate resource for Dota 2 heroes, strategies, and AI-powered gameplay assistance.";

pub const FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        heading: "Quick Links",
        links: &[
            FooterLink { label: "Home", target: Some(Page::Home) },
            FooterLink { label: "Heroes", target: Some(Page::Heroes) },
            FooterLink { label: "Attributes", target: Some(Page::Attributes) },
            FooterLink { label: "Roles", target: Some(Page::Roles) },
        ],
    },
    FooterColumn {
        heading: "Features",
        links: &[
            FooterLink { label: "AI Assistant", target: Some(Page::Assistant) },
            FooterLink { label: "Strategy Guides", target: None },
            FooterLink { label: "Current Meta", target: None },
            FooterLink { label: "Game Updates", target: None },
        ],
    },
    FooterColumn {
        heading: "Connect",
        links: &[
            FooterLink { label: "About Us", target: None },
            FooterLink { label: "Contact", target: None },
            FooterLink { label: "Privacy Policy", target: None },
            FooterLink { label: "Terms of Service", target: None },
        ],
    },
];

pub fn copyright(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, BRAND)
}
