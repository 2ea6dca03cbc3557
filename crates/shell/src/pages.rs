//! Page registry.

use serde::Serialize;

/// Sidebar section a page belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    Overview,
    Sales,
    Inventory,
    Contacts,
    Finance,
    Reports,
    Administration,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Overview,
        Section::Sales,
        Section::Inventory,
        Section::Contacts,
        Section::Finance,
        Section::Reports,
        Section::Administration,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Sales => "Sales",
            Section::Inventory => "Inventory",
            Section::Contacts => "Contacts",
            Section::Finance => "Finance",
            Section::Reports => "Reports",
            Section::Administration => "Administration",
        }
    }
}

/// Every page of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PageId {
    Dashboard,
    Pos,
    Sales,
    Products,
    Categories,
    Warehouses,
    StockTransfers,
    DamagedStock,
    Customers,
    Suppliers,
    Contacts,
    Expenses,
    SalesReport,
    ProfitReport,
    StockReport,
    Roles,
    Settings,
    Profile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub label: &'static str,
    /// `None` for the current page and for sections without a page.
    pub route: Option<&'static str>,
}

impl PageId {
    pub const ALL: [PageId; 18] = [
        PageId::Dashboard,
        PageId::Pos,
        PageId::Sales,
        PageId::Products,
        PageId::Categories,
        PageId::Warehouses,
        PageId::StockTransfers,
        PageId::DamagedStock,
        PageId::Customers,
        PageId::Suppliers,
        PageId::Contacts,
        PageId::Expenses,
        PageId::SalesReport,
        PageId::ProfitReport,
        PageId::StockReport,
        PageId::Roles,
        PageId::Settings,
        PageId::Profile,
    ];

    pub fn route(&self) -> &'static str {
        match self {
            PageId::Dashboard => "/dashboard",
            PageId::Pos => "/pos",
            PageId::Sales => "/sales",
            PageId::Products => "/products",
            PageId::Categories => "/products/categories",
            PageId::Warehouses => "/inventory/warehouses",
            PageId::StockTransfers => "/inventory/stock-transfers",
            PageId::DamagedStock => "/inventory/damaged-stock",
            PageId::Customers => "/contacts/customers",
            PageId::Suppliers => "/contacts/suppliers",
            PageId::Contacts => "/contacts",
            PageId::Expenses => "/expenses",
            PageId::SalesReport => "/reports/sales",
            PageId::ProfitReport => "/reports/profit",
            PageId::StockReport => "/reports/stock",
            PageId::Roles => "/settings/roles",
            PageId::Settings => "/settings",
            PageId::Profile => "/profile",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PageId::Dashboard => "Dashboard",
            PageId::Pos => "Point of Sale",
            PageId::Sales => "Sales",
            PageId::Products => "Products",
            PageId::Categories => "Categories",
            PageId::Warehouses => "Warehouses",
            PageId::StockTransfers => "Stock Transfers",
            PageId::DamagedStock => "Damaged Stock",
            PageId::Customers => "Customers",
            PageId::Suppliers => "Suppliers",
            PageId::Contacts => "Contacts",
            PageId::Expenses => "Expenses",
            PageId::SalesReport => "Sales Report",
            PageId::ProfitReport => "Profit Report",
            PageId::StockReport => "Stock Report",
            PageId::Roles => "Roles & Permissions",
            PageId::Settings => "Settings",
            PageId::Profile => "Profile",
        }
    }

    pub fn section(&self) -> Section {
        match self {
            PageId::Dashboard | PageId::Profile => Section::Overview,
            PageId::Pos | PageId::Sales => Section::Sales,
            PageId::Products
            | PageId::Categories
            | PageId::Warehouses
            | PageId::StockTransfers
            | PageId::DamagedStock => Section::Inventory,
            PageId::Customers | PageId::Suppliers | PageId::Contacts => Section::Contacts,
            PageId::Expenses => Section::Finance,
            PageId::SalesReport | PageId::ProfitReport | PageId::StockReport => Section::Reports,
            PageId::Roles | PageId::Settings => Section::Administration,
        }
    }

    /// Permission needed to open the page. Dashboard and profile are open to
    /// every signed-in user.
    pub fn required_permission(&self) -> Option<&'static str> {
        match self {
            PageId::Dashboard | PageId::Profile => None,
            PageId::Pos => Some("pos.access"),
            PageId::Sales => Some("sales.view"),
            PageId::Products => Some("products.view"),
            PageId::Categories => Some("categories.view"),
            PageId::Warehouses => Some("warehouses.view"),
            PageId::StockTransfers => Some("stock_transfers.view"),
            PageId::DamagedStock => Some("damaged_stocks.view"),
            PageId::Customers => Some("customers.view"),
            PageId::Suppliers => Some("suppliers.view"),
            PageId::Contacts => Some("contacts.view"),
            PageId::Expenses => Some("expenses.view"),
            PageId::SalesReport => Some("reports.sales"),
            PageId::ProfitReport => Some("reports.profit"),
            PageId::StockReport => Some("reports.stock"),
            PageId::Roles => Some("roles.view"),
            PageId::Settings => Some("settings.view"),
        }
    }

    /// Body shown until the page has real content.
    pub fn placeholder(&self) -> &'static str {
        match self {
            PageId::Dashboard => "Today's sales, low-stock alerts and recent activity will appear here.",
            PageId::Pos => "Scan or search products to start a sale.",
            PageId::SalesReport | PageId::ProfitReport | PageId::StockReport => {
                "Pick a date range to run this report."
            }
            PageId::Settings => "Company profile, currency, taxes and invoice numbering.",
            PageId::Profile => "Your name, email and password.",
            _ => "No records to show yet.",
        }
    }

    /// Home → section → page. The dashboard is its own home.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        let mut crumbs = vec![Breadcrumb {
            label: "Home",
            route: Some(PageId::Dashboard.route()),
        }];
        if *self == PageId::Dashboard {
            return crumbs;
        }
        let section = self.section();
        if section != Section::Overview {
            crumbs.push(Breadcrumb {
                label: section.title(),
                route: None,
            });
        }
        crumbs.push(Breadcrumb {
            label: self.title(),
            route: None,
        });
        crumbs
    }

    /// Look a page up by route. Query strings, fragments and a trailing
    /// slash are ignored; `/` is the dashboard.
    pub fn from_route(route: &str) -> Option<PageId> {
        let path = route.split(['?', '#']).next().unwrap_or_default().trim();
        let path = path.trim_end_matches('/');
        if path.is_empty() {
            return Some(PageId::Dashboard);
        }
        PageId::ALL
            .into_iter()
            .find(|page| page.route().eq_ignore_ascii_case(path))
    }
}

impl core::fmt::Display for PageId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn routes_are_unique_and_resolve_back() {
        let routes: HashSet<_> = PageId::ALL.iter().map(PageId::route).collect();
        assert_eq!(routes.len(), PageId::ALL.len());
        for page in PageId::ALL {
            assert_eq!(PageId::from_route(page.route()), Some(page));
        }
    }

    #[test]
    fn from_route_ignores_noise() {
        assert_eq!(PageId::from_route("/"), Some(PageId::Dashboard));
        assert_eq!(PageId::from_route("/sales/?page=2"), Some(PageId::Sales));
        assert_eq!(PageId::from_route("/Reports/Profit#top"), Some(PageId::ProfitReport));
        assert_eq!(PageId::from_route("/nowhere"), None);
    }

    #[test]
    fn breadcrumbs_go_home_section_page() {
        let labels: Vec<_> = PageId::StockTransfers.breadcrumbs().iter().map(|b| b.label).collect();
        assert_eq!(labels, vec!["Home", "Inventory", "Stock Transfers"]);

        let labels: Vec<_> = PageId::Profile.breadcrumbs().iter().map(|b| b.label).collect();
        assert_eq!(labels, vec!["Home", "Profile"]);

        assert_eq!(PageId::Dashboard.breadcrumbs().len(), 1);
    }
}
