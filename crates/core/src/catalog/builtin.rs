use folio_protocol::SharedStr;

use super::ProjectRecord;

struct Entry {
    id: &'static str,
    title: &'static str,
    short_title: &'static str,
    year: u16,
    tags: &'static [&'static str],
    categories: &'static str,
    description: &'static str,
    image: &'static str,
}

const PLACEHOLDER_TAGS: &[&str] = &["Placeholder Tag"];
const PLACEHOLDER_CATEGORIES: &str = "Placeholder Category / Tag 2";

// Works-page order.
const ENTRIES: &[Entry] = &[
    Entry {
        id: "sonix",
        title: "SONIX — YOUR PERSONAL SPACE ON WHEELS",
        short_title: "SONIX",
        year: 2025,
        tags: &["UXD", "UXR", "Branding"],
        categories: "UX Research / UX Design / UI Design / Branding / Service Design / Information Architecture / User Testing",
        description: "Sonix reimagines urban mobility through fully autonomous vehicles that deliver hyper-personalized, luxury-grade experiences for everyone.",
        image: "assets/images/autonomous-vehicle.jpg",
    },
    Entry {
        id: "imessage",
        title: "IMESSAGE - A RELATIONAL WELLNESS UPDATE",
        short_title: "IMESSAGE",
        year: 2024,
        tags: PLACEHOLDER_TAGS,
        categories: PLACEHOLDER_CATEGORIES,
        description: "A hypothetical iMessage update centered around relational wellness, empowering users to maintain their relationships through outreach, context, and organizational support.",
        image: "assets/images/imessage.jpg",
    },
    Entry {
        id: "sealove",
        title: "SEALOVE CANDLE BAR WEBSITE REDESIGN",
        short_title: "SEALOVE",
        year: 2023,
        tags: &["UXD", "UXR", "IA", "Branding"],
        categories: "UX Design / UX Research / Information Architecture / Branding",
        description: "A strategic redesign of Sea Love’s website, focused on improving Information Architecture and UI to create a seamless, intuitive shopping and booking experience.",
        image: "assets/images/sea-love.jpg",
    },
    Entry {
        id: "google-nest",
        title: "GOOGLE NEST THERMOSTAT FOR OFFICE SPACE",
        short_title: "GOOGLE NEST",
        year: 2023,
        tags: &["UXD", "UXR", "Branding"],
        categories: "UX Design / UX Research / Branding",
        description: "Redesigned the Nest thermostat for cheerful office spaces, introducing a collaborative temperature-setting feature that empowers employees to contribute, fostering a collaborative, comfortable, and inclusive environment.",
        image: "assets/images/google-nest.jpg",
    },
    Entry {
        id: "kroger",
        title: "RETHINKING THE SELF-CHECKOUT EXPERIENCE AT KROGER",
        short_title: "KROGER",
        year: 2023,
        tags: &["UXR", "Service Design"],
        categories: "UX Research / Service Design",
        description: "An in-depth service design investigation addressing the rising theft, employee stress, and customer frustration surrounding Kroger’s self-checkout systems.",
        image: "assets/images/kroger.jpg",
    },
    Entry {
        id: "kohler",
        title: "KOHLER X SCADPRO - THE FUTURE OF HYDROTHERAPY",
        short_title: "KOHLER",
        year: 2022,
        tags: &["Lead UXD", "UXR", "Product Design"],
        categories: "Lead UX Design / UX Research / Product Design",
        description: "A collaborative industry project with Kohler through SCADpro focused on reimagining the future of hydrotherapy through human-centered research, concept development, and immersive experience design.",
        image: "assets/images/kohler-scadpro.jpg",
    },
    Entry {
        id: "sync",
        title: "SYNC - THE REAL-TIME COACHING",
        short_title: "SYNC",
        year: 2024,
        tags: PLACEHOLDER_TAGS,
        categories: PLACEHOLDER_CATEGORIES,
        description: "An intelligent smart sneaker system that translates gait sensor data into real-time haptic feedback and immersive visual insights to prevent running injuries.",
        image: "assets/images/sync.jpg",
    },
    Entry {
        id: "7west",
        title: "7WEST — YOUR ALL-IN-ONE STUDENT ECOSYSTEM",
        short_title: "7WEST",
        year: 2024,
        tags: &["Co-Founder", "Design Lead", "UX Design"],
        categories: "Co-Founder / Design Lead / UX Design",
        description: "7WEST is an AI-first student ecosystem that connects every layer of university life from organizations and events to housing, jobs, and student discounts into a single, unified platform.",
        image: "assets/images/7west.jpg",
    },
    Entry {
        id: "zillow",
        title: "ZILLOW - SIMPLIFYING SEARCH FOR HOME",
        short_title: "ZILLOW",
        year: 2024,
        tags: PLACEHOLDER_TAGS,
        categories: PLACEHOLDER_CATEGORIES,
        description: "A usability redesign of Zillow's mobile app to streamline search, filters, and saved listings for renters navigating high-stakes housing decisions.",
        image: "assets/images/zillow.jpg",
    },
];

/// Ids of the home-page flip card rotation, in order.
pub(super) const SELECT_WORKS: &[&str] = &["sonix", "imessage", "sealove", "google-nest"];

pub(super) fn records() -> Vec<ProjectRecord> {
    ENTRIES
        .iter()
        .map(|e| {
            let image = SharedStr::from(e.image);
            let short_title = SharedStr::from(e.short_title);
            ProjectRecord {
                id: e.id.into(),
                title: e.title.into(),
                marquee_key: short_title.clone(),
                short_title,
                year: e.year,
                tags: e.tags.iter().map(|&t| SharedStr::from(t)).collect(),
                categories: e.categories.into(),
                description: e.description.into(),
                images: vec![image.clone()],
                hero_image: image,
            }
        })
        .collect()
}
