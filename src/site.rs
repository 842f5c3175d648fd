//! Fixed content of the site: page metadata, assets and link sets.
//!
//! Templates only decide layout; everything a page points at lives here.

use crate::web::{ContactKind, ContactLink, NavBar, NavLink};

pub const TITLE: &str = "Linda Cardellini // The Fanlisting";

pub const STYLESHEETS: &[&str] = &[
    // Font Awesome
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.0.0/css/all.min.css",
    // Google Fonts
    "https://fonts.googleapis.com/css?family=DM+Sans:300,400,500,700&display=swap",
    // MDB
    "https://cdnjs.cloudflare.com/ajax/libs/mdb-ui-kit/7.3.2/mdb.min.css",
    "./assets/css/styles.css",
];

pub const FAVICON: &str = "./assets/img/favicon.ico";
pub const HERO_IMAGE: &str = "./assets/img/head1.png";

pub static NAV_LINKS: [NavLink; 5] = [
    NavLink {
        label: "Home",
        target: "./index.php",
    },
    NavLink {
        label: "About",
        target: "./about.php",
    },
    NavLink {
        label: "Join",
        target: "./join.php",
    },
    NavLink {
        label: "Members",
        target: "./list.php",
    },
    NavLink {
        label: "Codes",
        target: "./codes.php",
    },
];

pub static CONTACT_LINKS: [ContactLink; 4] = [
    ContactLink {
        kind: ContactKind::Repository,
        name: "GitHub",
        icon: "fa-brands fa-github",
        target: "https://github.com/lico27",
    },
    ContactLink {
        kind: ContactKind::Email,
        name: "Email",
        icon: "fa-solid fa-envelope",
        target: "mailto:liam@liamco.io",
    },
    ContactLink {
        kind: ContactKind::ProfessionalNetwork,
        name: "LinkedIn",
        icon: "fa-brands fa-linkedin",
        target: "https://www.linkedin.com/in/liam-cottrell-a1837272/",
    },
    ContactLink {
        kind: ContactKind::SocialFeed,
        name: "Threads",
        icon: "fa-brands fa-threads",
        target: "https://www.threads.net/@__lico27",
    },
];

pub fn navbar() -> NavBar<'static> {
    NavBar {
        title: TITLE,
        links: &NAV_LINKS,
    }
}
