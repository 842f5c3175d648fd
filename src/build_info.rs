#[derive(Clone, Debug)]
pub struct BuildInfo {
    pub build_ts: &'static str,
    pub build_branch: &'static str,
    pub build_hash: &'static str,
    pub build_profile: &'static str,
}

impl BuildInfo {
    /// Values stamped by `build.rs` when this crate was compiled.
    pub const fn current() -> Self {
        Self {
            build_ts: env!("BUILD_TS"),
            build_branch: env!("BUILD_BRANCH"),
            build_hash: env!("BUILD_HASH"),
            build_profile: env!("BUILD_PROFILE"),
        }
    }

    pub fn display_fields(&self) -> Vec<(String, String)> {
        vec![
            ("Build Timestamp".to_owned(), self.build_ts.to_owned()),
            ("Build Branch".to_owned(), self.build_branch.to_owned()),
            ("Build Hash".to_owned(), self.build_hash.to_owned()),
            ("Build Profile".to_owned(), self.build_profile.to_owned()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_stamped() {
        let fields = BuildInfo::current().display_fields();
        assert_eq!(fields.len(), 4);
        assert!(fields.iter().all(|(_, value)| !value.is_empty()));
    }
}
