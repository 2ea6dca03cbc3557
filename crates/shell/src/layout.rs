//! Shared layout: header and sidebar.

use serde::Serialize;

use erpdesk_auth::{AccessDecision, Permission, PermissionCheck, User};
use erpdesk_client::CompanySettings;
use erpdesk_stores::Theme;

use crate::pages::{PageId, Section};

/// Whether `page` may be opened under `access`.
pub fn page_access(page: PageId, access: &PermissionCheck) -> AccessDecision {
    match page.required_permission() {
        _ if access.is_loading() => AccessDecision::Loading,
        None => AccessDecision::Granted,
        Some(required) => access.decide(&Permission::new(required)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub page: PageId,
    pub label: &'static str,
    pub route: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavSection {
    pub section: Section,
    pub title: &'static str,
    pub items: Vec<NavItem>,
}

/// Navigation, filtered to the pages the user may open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sidebar {
    pub collapsed: bool,
    pub sections: Vec<NavSection>,
}

impl Sidebar {
    /// Sections keep registry order; empty sections are dropped. While the
    /// permission check is loading the sidebar is empty.
    pub fn build(access: &PermissionCheck, collapsed: bool, active: Option<PageId>) -> Self {
        let sections = Section::ALL
            .into_iter()
            .filter_map(|section| {
                let items: Vec<NavItem> = PageId::ALL
                    .into_iter()
                    .filter(|page| page.section() == section)
                    .filter(|page| page_access(*page, access).is_granted())
                    .map(|page| NavItem {
                        page,
                        label: page.title(),
                        route: page.route(),
                        active: active == Some(page),
                    })
                    .collect();
                (!items.is_empty()).then(|| NavSection {
                    section,
                    title: section.title(),
                    items,
                })
            })
            .collect();

        Self { collapsed, sections }
    }

    pub fn pages(&self) -> impl Iterator<Item = PageId> + '_ {
        self.sections.iter().flat_map(|s| s.items.iter().map(|i| i.page))
    }

    pub fn contains(&self, page: PageId) -> bool {
        self.pages().any(|p| p == page)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub company_name: String,
    pub user_name: Option<String>,
    pub role: Option<String>,
    pub theme: Theme,
}

impl Header {
    pub fn new(settings: &CompanySettings, user: Option<&User>, theme: Theme) -> Self {
        Self {
            company_name: settings.company_name.clone(),
            user_name: user.map(|u| u.name.clone()),
            role: user.and_then(|u| u.role.as_ref()).map(|r| r.to_string()),
            theme,
        }
    }
}
