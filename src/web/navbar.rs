use serde::Serialize;

/// A labelled link to another page of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
}

#[derive(Clone, Debug)]
pub struct NavBar<'a> {
    pub title: &'static str,
    pub links: &'a [NavLink],
}

impl NavBar<'_> {
    pub fn labels(&self) -> Vec<&'static str> {
        self.links.iter().map(|link| link.label).collect()
    }
}
