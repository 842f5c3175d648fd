//! Machine readable summary of what the pages reference.

use serde::Serialize;

use crate::site;
use crate::web::{ContactLink, NavLink};

#[derive(Clone, Debug, Serialize)]
pub struct Manifest {
    pub title: &'static str,
    pub stylesheets: &'static [&'static str],
    pub favicon: &'static str,
    pub hero_image: &'static str,
    pub navigation: &'static [NavLink],
    pub contacts: &'static [ContactLink],
}

impl Manifest {
    pub fn current() -> Self {
        Self {
            title: site::TITLE,
            stylesheets: site::STYLESHEETS,
            favicon: site::FAVICON,
            hero_image: site::HERO_IMAGE,
            navigation: &site::NAV_LINKS,
            contacts: &site::CONTACT_LINKS,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shape() {
        let json = Manifest::current().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["title"], "Linda Cardellini // The Fanlisting");
        assert_eq!(value["navigation"].as_array().unwrap().len(), 5);
        assert_eq!(value["navigation"][2]["label"], "Join");
        assert_eq!(value["navigation"][2]["target"], "./join.php");
        assert_eq!(value["contacts"][3]["kind"], "social_feed");
        assert_eq!(value["contacts"][1]["target"], "mailto:liam@liamco.io");
    }
}
