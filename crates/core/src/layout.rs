//! Shared page chrome: nav link table and active-page detection.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Home",
        href: "index.html",
    },
    NavLink {
        label: "Works",
        href: "works.html",
    },
    NavLink {
        label: "Playground",
        href: "#",
    },
    NavLink {
        label: "About Me",
        href: "about.html",
    },
];

/// Nav href of the page at `path`.
pub fn active_href(path: &str) -> &'static str {
    if path.contains("works") {
        "works.html"
    } else if path.contains("about") {
        "about.html"
    } else if path.contains("playground") {
        "#"
    } else {
        "index.html"
    }
}

/// The logo links home, except on the home page itself.
pub fn logo_href(path: &str) -> &'static str {
    if active_href(path) == "index.html" {
        "#"
    } else {
        "index.html"
    }
}

/// Nav links paired with whether each is the current page.
pub fn nav_links(path: &str) -> impl Iterator<Item = (NavLink, bool)> {
    let active = active_href(path);
    NAV_LINKS.iter().map(move |&link| (link, link.href == active))
}

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
