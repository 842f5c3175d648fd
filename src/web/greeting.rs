use askama::Template;

use crate::site;
use crate::web::ContactLink;

#[derive(askama::Template)]
#[template(path = "greeting.html")]
struct GreetingTemplate<'a> {
    contacts: &'a [ContactLink],
}

/// Greeting block with the outbound contact icons.
#[derive(Clone, Debug)]
pub struct GreetingPanel {
    contacts: &'static [ContactLink],
}

impl GreetingPanel {
    pub fn new(contacts: &'static [ContactLink]) -> Self {
        Self { contacts }
    }

    pub fn render(&self) -> anyhow::Result<String> {
        let html = GreetingTemplate {
            contacts: self.contacts,
        }
        .render()?;
        log::debug!("Rendered greeting panel: {} bytes", html.len());
        Ok(html)
    }
}

impl Default for GreetingPanel {
    fn default() -> Self {
        Self::new(&site::CONTACT_LINKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_open_in_new_context() {
        let html = GreetingPanel::default().render().unwrap();
        assert_eq!(html.matches("target=\"_blank\"").count(), 4);
        assert_eq!(html.matches("rel=\"noopener noreferrer\"").count(), 4);
    }

    #[test]
    fn heading_and_paragraphs() {
        let html = GreetingPanel::default().render().unwrap();
        assert!(html.contains("Hi, I'm Liam"));
        assert!(html.contains("My portfolio is a work in progress."));
        assert!(html.contains("You can contact me here:"));
    }

    #[test]
    fn icons_follow_links() {
        let html = GreetingPanel::default().render().unwrap();
        for icon in [
            "fa-brands fa-github",
            "fa-solid fa-envelope",
            "fa-brands fa-linkedin",
            "fa-brands fa-threads",
        ] {
            assert!(html.contains(&format!("<i class=\"{icon} contact-icons m-1\"></i>")));
        }
    }
}
