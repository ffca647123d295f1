//! Pages of the app and their URLs

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Research,
    Products,
    Marketing,
    Analytics,
    Automation,
    Settings,
}

impl Page {
    /// Sidebar order
    pub const ALL: [Page; 7] = [
        Page::Dashboard,
        Page::Research,
        Page::Products,
        Page::Marketing,
        Page::Analytics,
        Page::Automation,
        Page::Settings,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Dashboard => "/",
            Page::Research => "/research",
            Page::Products => "/products",
            Page::Marketing => "/marketing",
            Page::Analytics => "/analytics",
            Page::Automation => "/automation",
            Page::Settings => "/settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Research => "Product Research",
            Page::Products => "Products",
            Page::Marketing => "Marketing",
            Page::Analytics => "Analytics",
            Page::Automation => "Automation",
            Page::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "layout-dashboard",
            Page::Research => "trending-up",
            Page::Products => "package",
            Page::Marketing => "megaphone",
            Page::Analytics => "bar-chart",
            Page::Automation => "zap",
            Page::Settings => "settings",
        }
    }

    /// Browser URL of the page under `base_path` ("" or "/dropship")
    pub fn href(&self, base_path: &str) -> String {
        format!("{}{}", base_path, self.path())
    }

    /// Resolves a browser pathname. Unknown paths fall back to the dashboard.
    pub fn from_path(pathname: &str, base_path: &str) -> Self {
        let relative = strip_base(pathname, base_path);
        let relative = relative.trim_end_matches('/');
        let relative = if relative.is_empty() { "/" } else { relative };

        Page::ALL
            .into_iter()
            .find(|page| page.path() == relative)
            .unwrap_or(Page::Dashboard)
    }
}

fn strip_base<'a>(pathname: &'a str, base_path: &str) -> &'a str {
    if base_path.is_empty() {
        return pathname;
    }
    match pathname.strip_prefix(base_path) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => pathname,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_without_base() {
        assert_eq!(Page::from_path("/", ""), Page::Dashboard);
        assert_eq!(Page::from_path("/research", ""), Page::Research);
        assert_eq!(Page::from_path("/marketing/", ""), Page::Marketing);
        assert_eq!(Page::from_path("/unknown", ""), Page::Dashboard);
    }

    #[test]
    fn test_from_path_with_base() {
        assert_eq!(Page::from_path("/dropship", "/dropship"), Page::Dashboard);
        assert_eq!(Page::from_path("/dropship/", "/dropship"), Page::Dashboard);
        assert_eq!(Page::from_path("/dropship/settings", "/dropship"), Page::Settings);
        // prefix must end at a segment boundary
        assert_eq!(Page::from_path("/dropshipping/research", "/dropship"), Page::Dashboard);
    }

    #[test]
    fn test_href_round_trips() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(&page.href("/dropship"), "/dropship"), page);
            assert_eq!(Page::from_path(&page.href(""), ""), page);
        }
        assert_eq!(Page::Dashboard.href("/dropship"), "/dropship/");
    }
}
