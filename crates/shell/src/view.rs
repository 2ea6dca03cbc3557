//! Page rendering.

use serde::Serialize;

use erpdesk_auth::{AccessDecision, PermissionCheck, User};
use erpdesk_client::CompanySettings;
use erpdesk_stores::UiSettings;

use crate::layout::{Header, Sidebar, page_access};
use crate::pages::{Breadcrumb, PageId};

/// What a page needs from the stores.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub access: &'a PermissionCheck,
    pub settings: &'a CompanySettings,
    pub ui: &'a UiSettings,
    pub user: Option<&'a User>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PageStatus {
    Ready,
    Forbidden,
    Loading,
}

/// A rendered page shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub page: PageId,
    pub status: PageStatus,
    pub header: Header,
    pub sidebar: Sidebar,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub title: &'static str,
    pub body: String,
}

impl PageView {
    fn frame(page: PageId, ctx: &RenderContext<'_>, status: PageStatus, body: String) -> Self {
        Self {
            page,
            status,
            header: Header::new(ctx.settings, ctx.user, ctx.ui.theme),
            sidebar: Sidebar::build(ctx.access, ctx.ui.sidebar_collapsed, Some(page)),
            breadcrumbs: page.breadcrumbs(),
            title: page.title(),
            body,
        }
    }

    pub fn forbidden(page: PageId, ctx: &RenderContext<'_>) -> Self {
        Self::frame(
            page,
            ctx,
            PageStatus::Forbidden,
            "You do not have permission to view this page.".to_string(),
        )
    }

    pub fn loading(page: PageId, ctx: &RenderContext<'_>) -> Self {
        Self::frame(page, ctx, PageStatus::Loading, "Loading…".to_string())
    }

    pub fn is_ready(&self) -> bool {
        self.status == PageStatus::Ready
    }
}

/// Render `page`, or its forbidden / loading variant.
pub fn render_page(page: PageId, ctx: &RenderContext<'_>) -> PageView {
    match page_access(page, ctx.access) {
        AccessDecision::Loading => PageView::loading(page, ctx),
        AccessDecision::Denied => {
            tracing::debug!(page = page.route(), "page forbidden");
            PageView::forbidden(page, ctx)
        }
        AccessDecision::Granted => PageView::frame(page, ctx, PageStatus::Ready, page.placeholder().to_string()),
    }
}

impl core::fmt::Display for PageView {
    /// Plain-text rendering for the terminal.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let user = match (&self.header.user_name, &self.header.role) {
            (Some(name), Some(role)) => format!("{name} ({role})"),
            (Some(name), None) => name.clone(),
            _ => "not signed in".to_string(),
        };
        writeln!(f, "{} | {}", self.header.company_name, user)?;

        let crumbs: Vec<_> = self.breadcrumbs.iter().map(|b| b.label).collect();
        writeln!(f, "{}", crumbs.join(" > "))?;
        writeln!(f)?;
        writeln!(f, "# {}", self.title)?;
        writeln!(f, "{}", self.body)?;

        if !self.sidebar.collapsed && !self.sidebar.sections.is_empty() {
            writeln!(f)?;
            for section in &self.sidebar.sections {
                writeln!(f, "[{}]", section.title)?;
                for item in &section.items {
                    let marker = if item.active { '*' } else { ' ' };
                    writeln!(f, " {marker} {:<24} {}", item.label, item.route)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use erpdesk_auth::Role;
    use erpdesk_core::RecordId;

    use super::*;

    fn user() -> User {
        User {
            id: RecordId::from(1u64),
            name: "Sam".into(),
            email: "sam@shop.test".into(),
            role: Some(Role::new("cashier")),
            avatar_url: None,
            company_id: None,
        }
    }

    #[test]
    fn renders_permitted_page() {
        let access = PermissionCheck::from_parts(Some(Role::new("cashier")), ["pos.access"]);
        let settings = CompanySettings::default();
        let ui = UiSettings::default();
        let user = user();
        let ctx = RenderContext {
            access: &access,
            settings: &settings,
            ui: &ui,
            user: Some(&user),
        };

        let view = render_page(PageId::Pos, &ctx);
        assert!(view.is_ready());
        assert_eq!(view.title, "Point of Sale");
        assert_eq!(view.header.user_name.as_deref(), Some("Sam"));
        let text = view.to_string();
        assert!(text.contains("Home > Sales > Point of Sale"));
        assert!(text.contains(" * Point of Sale"));

        assert_eq!(render_page(PageId::Roles, &ctx).status, PageStatus::Forbidden);
    }

    #[test]
    fn renders_loading_before_permissions_are_read() {
        let access = PermissionCheck::new();
        let settings = CompanySettings::default();
        let ui = UiSettings::default();
        let ctx = RenderContext {
            access: &access,
            settings: &settings,
            ui: &ui,
            user: None,
        };
        assert_eq!(render_page(PageId::Dashboard, &ctx).status, PageStatus::Loading);
    }
}
