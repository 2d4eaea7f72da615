use crate::properties::LinkProperties;

node! {
    /// A qualified reference to a resource: `Link` or `Mention`.
    pub struct Link {
        link: LinkProperties,
    }
}

impl Link {
    /// A link of kind `Link` pointing at `href`.
    pub fn to(href: impl Into<String>) -> Self {
        let mut link = Self::default();
        link.link.href = Some(href.into());
        link
    }
}
