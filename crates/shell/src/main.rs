use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use erpdesk_client::{ClientConfig, ListQuery, Resource, ResourceService, Services};
use erpdesk_core::{FileStorage, RecordId, Storage};
use erpdesk_observability::LogFormat;
use erpdesk_shell::{PageId, RenderContext, render_page};
use erpdesk_stores::{AuthStore, CompanySettingsStore, UiSettingsStore};

/// Terminal client for the ERP dashboard backend.
#[derive(Debug, Parser)]
#[command(name = "erpdesk", version)]
struct Cli {
    /// Backend base URL (overrides ERPDESK_API_URL).
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Directory holding local state (overrides ERPDESK_DATA_DIR).
    #[arg(long, global = true)]
    data_dir: Option<std::path::PathBuf>,

    /// Log line format on stderr.
    #[arg(long, global = true, value_enum, default_value_t = LogOutput::Pretty)]
    log_format: LogOutput,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogOutput {
    Json,
    Pretty,
}

impl From<LogOutput> for LogFormat {
    fn from(value: LogOutput) -> Self {
        match value {
            LogOutput::Json => LogFormat::Json,
            LogOutput::Pretty => LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sign in and keep the session locally.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out; local state is cleared even if the backend is unreachable.
    Logout,
    /// Show the signed-in user.
    Whoami {
        /// Ask the backend instead of reading local state.
        #[arg(long)]
        remote: bool,
    },
    /// List records of a resource.
    List {
        resource: ResourceKind,
        #[arg(long)]
        page: Option<u64>,
        #[arg(long)]
        per_page: Option<u64>,
        #[arg(long)]
        search: Option<String>,
        /// Extra query parameter, `key=value`, sent as given. Repeatable.
        #[arg(long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
        /// Filter in dashboard naming, `categoryId=4`. Repeatable.
        #[arg(long = "filter", value_parser = parse_param)]
        filters: Vec<(String, String)>,
    },
    /// Show one record.
    Show {
        resource: ResourceKind,
        id: RecordId,
        /// Print every field the backend sent, not just the typed ones.
        #[arg(long)]
        raw: bool,
    },
    /// Render a dashboard page by route.
    Page { route: String },
    /// Show company settings.
    Settings {
        /// Fetch from the backend and store locally first.
        #[arg(long)]
        refresh: bool,
    },
    /// Collapse or expand the sidebar.
    ToggleSidebar,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ResourceKind {
    Customers,
    Suppliers,
    Contacts,
    Products,
    Categories,
    Warehouses,
    StockTransfers,
    DamagedStock,
    Expenses,
    Sales,
    Roles,
    Permissions,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim().to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got {raw:?}")),
    }
}

struct App {
    storage: Arc<dyn Storage>,
    services: Services,
    auth: AuthStore,
}

impl App {
    fn open(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = ClientConfig::from_env();
        if let Some(url) = &cli.api_url {
            config = ClientConfig {
                api_url: url.trim().trim_end_matches('/').to_string(),
                ..config
            };
        }
        if let Some(dir) = &cli.data_dir {
            config = config.with_data_dir(dir.clone());
        }

        let storage: Arc<dyn Storage> = Arc::new(
            FileStorage::open(&config.data_dir)
                .with_context(|| format!("failed to open local state in {}", config.data_dir.display()))?,
        );
        let auth = AuthStore::hydrated(storage.clone());

        let services = Services::from_config(&config).context("failed to build API client")?;
        if services.client().token().is_none() {
            services.client().set_token(auth.token().map(str::to_string));
        }

        Ok(Self {
            storage,
            services,
            auth,
        })
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn list<R>(service: ResourceService<R>, query: &ListQuery) -> anyhow::Result<()>
where
    R: Resource,
    R::Record: Serialize,
{
    let page = service.get_page(query).await?;
    print_json(&page.items)?;
    if !page.meta.is_empty() {
        eprintln!(
            "page {} of {} ({} total)",
            page.meta.current_page.unwrap_or(1),
            page.meta.last_page.unwrap_or(1),
            page.meta.total.map_or_else(|| "?".to_string(), |t| t.to_string()),
        );
    }
    Ok(())
}

async fn show<R>(service: ResourceService<R>, id: &RecordId, raw: bool) -> anyhow::Result<()>
where
    R: Resource,
    R::Record: Serialize,
{
    if raw {
        print_json(&service.get_raw(id).await?)
    } else {
        print_json(&service.get_by_id(id).await?)
    }
}

async fn run_list(services: &Services, kind: ResourceKind, query: &ListQuery) -> anyhow::Result<()> {
    match kind {
        ResourceKind::Customers => list(services.customers(), query).await,
        ResourceKind::Suppliers => list(services.suppliers(), query).await,
        ResourceKind::Contacts => list(services.contacts(), query).await,
        ResourceKind::Products => list(services.products(), query).await,
        ResourceKind::Categories => list(services.categories(), query).await,
        ResourceKind::Warehouses => list(services.warehouses(), query).await,
        ResourceKind::StockTransfers => list(services.stock_transfers(), query).await,
        ResourceKind::DamagedStock => list(services.damaged_stock(), query).await,
        ResourceKind::Expenses => list(services.expenses(), query).await,
        ResourceKind::Sales => list(services.sales(), query).await,
        ResourceKind::Roles => list(services.roles(), query).await,
        ResourceKind::Permissions => print_json(&services.permissions().list().await?),
    }
}

async fn run_show(services: &Services, kind: ResourceKind, id: &RecordId, raw: bool) -> anyhow::Result<()> {
    match kind {
        ResourceKind::Customers => show(services.customers(), id, raw).await,
        ResourceKind::Suppliers => show(services.suppliers(), id, raw).await,
        ResourceKind::Contacts => show(services.contacts(), id, raw).await,
        ResourceKind::Products => show(services.products(), id, raw).await,
        ResourceKind::Categories => show(services.categories(), id, raw).await,
        ResourceKind::Warehouses => show(services.warehouses(), id, raw).await,
        ResourceKind::StockTransfers => show(services.stock_transfers(), id, raw).await,
        ResourceKind::DamagedStock => show(services.damaged_stock(), id, raw).await,
        ResourceKind::Expenses => show(services.expenses(), id, raw).await,
        ResourceKind::Sales => show(services.sales(), id, raw).await,
        ResourceKind::Roles => show(services.roles(), id, raw).await,
        ResourceKind::Permissions => bail!("permissions can only be listed"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    erpdesk_observability::init(cli.log_format.into(), "warn");

    let mut app = App::open(&cli)?;

    match cli.command {
        Command::Login { email, password } => {
            let session = app.services.auth().login(&email, &password).await?;
            let name = session.user.name.clone();
            app.auth.set_session(session)?;
            println!("signed in as {name}");
        }
        Command::Logout => {
            app.auth.logout(&app.services.auth()).await?;
            println!("signed out");
        }
        Command::Whoami { remote } => {
            if remote {
                print_json(&app.services.auth().me().await?)?;
            } else {
                match app.auth.user() {
                    Some(user) => print_json(user)?,
                    None => bail!("not signed in"),
                }
            }
        }
        Command::List {
            resource,
            page,
            per_page,
            search,
            params,
            filters,
        } => {
            let mut query = ListQuery::new();
            if let Some(page) = page {
                query = query.page(page);
            }
            if let Some(per_page) = per_page {
                query = query.per_page(per_page);
            }
            if let Some(search) = search {
                query = query.search(search);
            }
            for (key, value) in params {
                query = query.param(key, value);
            }
            for (key, value) in filters {
                query = query.filter(&key, value);
            }
            run_list(&app.services, resource, &query).await?;
        }
        Command::Show { resource, id, raw } => run_show(&app.services, resource, &id, raw).await?,
        Command::Page { route } => {
            let Some(page) = PageId::from_route(&route) else {
                bail!("no page at {route:?}");
            };
            let settings = CompanySettingsStore::load(app.storage.clone());
            let ui = UiSettingsStore::load(app.storage.clone());
            let access = app.auth.permission_check();
            let ctx = RenderContext {
                access: &access,
                settings: settings.settings(),
                ui: ui.settings(),
                user: app.auth.user(),
            };
            print!("{}", render_page(page, &ctx));
        }
        Command::Settings { refresh } => {
            let mut settings = CompanySettingsStore::load(app.storage.clone());
            if refresh {
                settings.refresh(&app.services.settings()).await?;
            }
            print_json(settings.settings())?;
        }
        Command::ToggleSidebar => {
            let mut ui = UiSettingsStore::load(app.storage.clone());
            let collapsed = ui.toggle_sidebar()?;
            println!("sidebar {}", if collapsed { "collapsed" } else { "expanded" });
        }
    }

    Ok(())
}
