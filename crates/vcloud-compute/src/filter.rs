//! Decides which resource entities are nodes.

use std::collections::HashSet;
use vcloud_core::config::parse_name_list;
use vcloud_core::types::{media_type, ReferenceType};

/// Accepts vApps whose name is not blacklisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateFilter {
    blacklist: HashSet<String>,
}

impl CandidateFilter {
    /// Filter with an explicit blacklist.
    #[must_use]
    pub fn new(blacklist: HashSet<String>) -> Self {
        Self { blacklist }
    }

    /// Filter from a comma-separated blacklist; absent or blank means none.
    #[must_use]
    pub fn from_list(raw: Option<&str>) -> Self {
        Self::new(parse_name_list(raw))
    }

    /// Returns true if `resource` is a vApp and not blacklisted.
    #[must_use]
    pub fn accepts(&self, resource: &ReferenceType) -> bool {
        resource.is_type(media_type::VAPP_XML) && !self.blacklist.contains(&resource.name)
    }

    /// The blacklisted names.
    #[must_use]
    pub fn blacklist(&self) -> &HashSet<String> {
        &self.blacklist
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(name: &str, media_type: &str) -> ReferenceType {
        ReferenceType::parse(
            &format!("https://vcloud.example.com/api/v1.0/entity/{name}"),
            name,
            media_type,
        )
        .unwrap()
    }

    fn vapp(name: &str) -> ReferenceType {
        resource(name, media_type::VAPP_XML)
    }

    fn template(name: &str) -> ReferenceType {
        resource(name, media_type::VAPP_TEMPLATE_XML)
    }

    #[test]
    fn accepts_vapps_by_default() {
        let filter = CandidateFilter::default();
        assert!(filter.accepts(&vapp("web1")));
        assert!(filter.blacklist().is_empty());
    }

    #[test]
    fn rejects_other_media_types() {
        let filter = CandidateFilter::default();
        assert!(!filter.accepts(&template("tmpl")));
        assert!(!filter.accepts(&resource("disk1", media_type::MEDIA_XML)));
        assert!(!filter.accepts(&resource("vdc", media_type::VDC_XML)));
    }

    #[test]
    fn rejects_blacklisted_names_exactly() {
        let filter = CandidateFilter::from_list(Some("a,b,c"));

        for name in ["a", "b", "c"] {
            assert!(!filter.accepts(&vapp(name)), "{name}");
        }
        for name in ["d", "ab", "A", "a,b"] {
            assert!(filter.accepts(&vapp(name)), "{name}");
        }
    }

    #[test]
    fn blank_list_rejects_nothing_by_name() {
        for raw in [None, Some(""), Some("  ")] {
            let filter = CandidateFilter::from_list(raw);
            assert!(filter.accepts(&vapp("web1")));
        }
    }

    #[test]
    fn blacklisted_name_with_wrong_type_still_rejected() {
        let filter = CandidateFilter::from_list(Some("web1"));
        assert!(!filter.accepts(&template("web1")));
    }
}
