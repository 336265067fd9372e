//! Static page copy.

use fortress_core::{GroupKind, Section, ServerUnit};

pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Challenge {
    pub problem: &'static str,
    pub solution: &'static str,
}

pub struct Snippet {
    pub title: &'static str,
    pub code: &'static str,
}

pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
    pub new_tab: bool,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Features", href: "#features" },
    NavItem { label: "Architecture", href: "#architecture" },
    NavItem { label: "Stats", href: "#stats" },
    NavItem { label: "Challenges", href: "#challenges" },
    NavItem { label: "Setup", href: "#setup" },
];

pub const SERVER_UNITS: [&str; 4] = ["Nextcloud", "Jellyfin", "Pi-hole", "Home Assistant"];

pub const FEATURES: [Card; 6] = [
    Card {
        icon: "☁️",
        title: "Private Cloud",
        body: "Files, calendars and contacts synced across every device without a third party in the middle.",
    },
    Card {
        icon: "🎬",
        title: "Media Streaming",
        body: "A family media library with hardware transcoding, available at home and on the road.",
    },
    Card {
        icon: "🛡️",
        title: "Network-wide Ad Blocking",
        body: "DNS filtering for every device on the LAN, phones and smart TVs included.",
    },
    Card {
        icon: "🏠",
        title: "Home Automation",
        body: "Lights, sensors and thermostats orchestrated locally, still working when the internet is down.",
    },
    Card {
        icon: "🔐",
        title: "Zero-Trust Remote Access",
        body: "A mesh VPN instead of open ports. Nothing listens on the public internet.",
    },
    Card {
        icon: "💾",
        title: "3-2-1 Backups",
        body: "Nightly snapshots, an off-site copy, and restores that are actually tested.",
    },
];

pub const ARCHITECTURE: [Card; 4] = [
    Card {
        icon: "🖥️",
        title: "Hardware",
        body: "A refurbished HP small-form-factor desktop: quiet, frugal, and enough cores for a dozen services.",
    },
    Card {
        icon: "🐧",
        title: "Base OS",
        body: "Debian stable with unattended security upgrades and a read-mostly root.",
    },
    Card {
        icon: "🐳",
        title: "Containers",
        body: "Every service in its own container, declared in one compose file under version control.",
    },
    Card {
        icon: "🌐",
        title: "Edge",
        body: "A reverse proxy with automatic certificates in front of everything reachable by name.",
    },
];

pub const STATS: [Stat; 4] = [
    Stat { value: "99.9%", label: "Uptime" },
    Stat { value: "12", label: "Services" },
    Stat { value: "35W", label: "Idle Power" },
    Stat { value: "4TB", label: "Storage" },
];

pub const CHALLENGES: [Challenge; 4] = [
    Challenge {
        problem: "Dynamic home IP address",
        solution: "Mesh VPN for private access, dynamic DNS for the few public names.",
    },
    Challenge {
        problem: "Drive failure",
        solution: "Mirrored disks plus nightly off-site snapshots.",
    },
    Challenge {
        problem: "Power cuts",
        solution: "A small UPS that triggers a clean shutdown before the battery runs out.",
    },
    Challenge {
        problem: "Services drifting out of date",
        solution: "Pinned image tags bumped by a weekly, reviewed update routine.",
    },
];

pub const SNIPPETS: [Snippet; 2] = [
    Snippet {
        title: "Bring the stack up",
        code: "git clone https://example.com/fortress.git\ncd fortress\ndocker compose up -d",
    },
    Snippet {
        title: "Check service health",
        code: "docker compose ps\ndocker compose logs -f --tail=50",
    },
];

pub const FOOTER_LINKS: [FooterLink; 3] = [
    FooterLink { label: "Debian", href: "https://www.debian.org", new_tab: true },
    FooterLink { label: "Docker Docs", href: "https://docs.docker.com", new_tab: true },
    FooterLink { label: "Back to top", href: "#hero", new_tab: false },
];

/// Every observed section, in page order.
pub fn sections() -> Vec<Section> {
    vec![
        Section::plain("hero"),
        Section::grouped("features", GroupKind::FeatureCards, FEATURES.len()),
        Section::grouped("architecture", GroupKind::ArchitectureCards, ARCHITECTURE.len()),
        Section::grouped("stats", GroupKind::StatBoxes, STATS.len()),
        Section::grouped("challenges", GroupKind::Challenges, CHALLENGES.len()),
        Section::plain("setup"),
    ]
}

pub fn server_units() -> Vec<ServerUnit> {
    SERVER_UNITS.into_iter().map(ServerUnit::new).collect()
}
