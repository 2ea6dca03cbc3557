//! `erpdesk-shell`: the dashboard's page registry, layout and page views.
//!
//! Pages are shells: a title, breadcrumbs and placeholder content, wrapped in
//! the shared header and a sidebar filtered by the user's permissions.

pub mod layout;
pub mod pages;
pub mod view;

pub use layout::{Header, NavItem, NavSection, Sidebar};
pub use pages::{Breadcrumb, PageId, Section};
pub use view::{PageStatus, PageView, RenderContext, render_page};
