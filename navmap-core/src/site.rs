//! The fixed site data: every page of the application and every navigation
//! link between them.

use crate::graph::PageGraph;

/// Title shown above the rendered map.
pub const TITLE: &str = "Site Page Navigation Map";

/// The pages of the application, one label per page.
pub const PAGES: [&str; 13] = [
    "Home Page",
    "Login/Registration Page",
    "Profile Page",
    "Coding Problems Index Page",
    "Coding Problem Detail Page",
    "2FA Setup Page",
    "Problem Attempt History Page",
    "Detailed Attempt View Page",
    "FAQs or Help Page",
    "Settings/Account Management Page",
    "API Key Management Page",
    "Leaderboard Page (Optional)",
    "Resource and Tutorial Page",
];

/// Navigation links between pages, directed.
pub const LINKS: [(&str, &str); 17] = [
    ("Home Page", "Login/Registration Page"),
    ("Login/Registration Page", "Home Page"),
    ("Login/Registration Page", "2FA Setup Page"),
    ("Login/Registration Page", "Profile Page"),
    ("Profile Page", "Settings/Account Management Page"),
    ("Profile Page", "API Key Management Page"),
    ("Profile Page", "Problem Attempt History Page"),
    ("Coding Problems Index Page", "Coding Problem Detail Page"),
    ("Coding Problem Detail Page", "Detailed Attempt View Page"),
    ("Detailed Attempt View Page", "Coding Problem Detail Page"),
    ("Detailed Attempt View Page", "Problem Attempt History Page"),
    ("Problem Attempt History Page", "Detailed Attempt View Page"),
    ("Settings/Account Management Page", "Profile Page"),
    ("API Key Management Page", "Profile Page"),
    ("Home Page", "FAQs or Help Page"),
    ("Home Page", "Coding Problems Index Page"),
    ("Home Page", "Resource and Tutorial Page"),
];

/// Build the fixed site graph: every page, every link.
pub fn build_graph() -> PageGraph {
    let mut graph = PageGraph::new();
    for page in PAGES {
        graph.add_page(page);
    }
    for (from, to) in LINKS {
        graph.add_link(from, to);
    }
    graph
}
