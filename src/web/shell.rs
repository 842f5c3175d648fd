use askama::Template;

use crate::site;
use crate::web::NavBar;

#[derive(askama::Template)]
#[template(path = "shell.html")]
struct ShellPage<'a> {
    navbar: &'a NavBar<'static>,
    stylesheets: &'static [&'static str],
    favicon: &'static str,
    hero_image: &'static str,
    content: &'a str,
}

/// Document skeleton shared by every page: head, navigation, hero and an
/// open content region.
#[derive(Clone, Debug)]
pub struct PageShell {
    navbar: NavBar<'static>,
    hero_image: &'static str,
}

impl PageShell {
    pub fn new(navbar: NavBar<'static>, hero_image: &'static str) -> Self {
        Self { navbar, hero_image }
    }

    /// Renders the shell with an empty content region.
    pub fn render(&self) -> anyhow::Result<String> {
        self.render_with("")
    }

    /// Renders the shell with `content` placed in the content region.
    ///
    /// `content` is inserted verbatim and must already be valid markup.
    pub fn render_with(&self, content: &str) -> anyhow::Result<String> {
        let page = ShellPage {
            navbar: &self.navbar,
            stylesheets: site::STYLESHEETS,
            favicon: site::FAVICON,
            hero_image: self.hero_image,
            content,
        };
        let html = page.render()?;
        log::debug!(
            "Rendered page shell: {} bytes, {} bytes of content",
            html.len(),
            content.len()
        );
        Ok(html)
    }
}

impl Default for PageShell {
    fn default() -> Self {
        Self::new(site::navbar(), site::HERO_IMAGE)
    }
}
