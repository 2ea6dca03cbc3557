//! Page rendering driven by the real stores.

use std::sync::Arc;

use proptest::prelude::*;

use erpdesk_auth::{Permission, PermissionCheck, Role, Session, User};
use erpdesk_core::{MemoryStorage, RecordId, Storage};
use erpdesk_shell::layout::page_access;
use erpdesk_shell::{PageId, PageStatus, RenderContext, Sidebar, render_page};
use erpdesk_stores::{AuthStore, CompanySettingsStore, UiSettingsStore};

fn session(permissions: &[&'static str]) -> Session {
    Session {
        token: "tok".into(),
        user: User {
            id: RecordId::from(4u64),
            name: "Ana".into(),
            email: "ana@shop.test".into(),
            role: Some(Role::new("manager")),
            avatar_url: None,
            company_id: None,
        },
        permissions: permissions.iter().map(|p| Permission::new(*p)).collect(),
    }
}

#[test]
fn stored_session_drives_page_access() {
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    AuthStore::new(storage.clone())
        .set_session(session(&["expenses.view"]))
        .unwrap();

    let mut settings = CompanySettingsStore::load(storage.clone());
    settings.patch(|s| s.company_name = "Corner Shop".into()).unwrap();
    let mut ui = UiSettingsStore::load(storage.clone());
    ui.toggle_sidebar().unwrap();

    let auth = AuthStore::hydrated(storage);
    let access = auth.permission_check();
    let ctx = RenderContext {
        access: &access,
        settings: settings.settings(),
        ui: ui.settings(),
        user: auth.user(),
    };

    let expenses = render_page(PageId::Expenses, &ctx);
    assert_eq!(expenses.status, PageStatus::Ready);
    assert_eq!(expenses.header.company_name, "Corner Shop");
    assert_eq!(expenses.header.role.as_deref(), Some("manager"));
    assert!(expenses.sidebar.collapsed);

    let roles = render_page(PageId::Roles, &ctx);
    assert_eq!(roles.status, PageStatus::Forbidden);
    assert!(!roles.sidebar.contains(PageId::Roles));
}

#[test]
fn logged_out_users_only_see_open_pages() {
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    let access = PermissionCheck::loaded(storage.as_ref());
    let sidebar = Sidebar::build(&access, false, None);
    assert_eq!(sidebar.pages().collect::<Vec<_>>(), vec![PageId::Dashboard, PageId::Profile]);
}

proptest! {
    #[test]
    fn sidebar_lists_exactly_the_openable_pages(mask in proptest::collection::vec(any::<bool>(), PageId::ALL.len())) {
        let granted: Vec<&'static str> = PageId::ALL
            .iter()
            .zip(&mask)
            .filter(|(_, on)| **on)
            .filter_map(|(page, _)| page.required_permission())
            .collect();
        let access = PermissionCheck::from_parts(None, granted);
        let sidebar = Sidebar::build(&access, false, None);

        for page in PageId::ALL {
            prop_assert_eq!(sidebar.contains(page), page_access(page, &access).is_granted());
        }
    }
}
