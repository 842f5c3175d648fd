use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Repository,
    Email,
    ProfessionalNetwork,
    SocialFeed,
}

/// An outbound link rendered as an icon.
///
/// `icon` is a Font Awesome class list, `name` doubles as the accessible label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub name: &'static str,
    pub icon: &'static str,
    pub target: &'static str,
}
