//! Single-owner application state.
//!
//! The session owns everything the portal shows: the product catalog, the
//! user, the projects, the government wallet, and the navigation flags, and
//! every mutation goes through a method here. Nothing else in the crate holds
//! mutable portal state. Data lives for the session only; there is no
//! persistence.

use crate::config::AppConfig;
use crate::config::admin::AdminCredentials;
use crate::core::{auth, purchase, submission};
use crate::errors::{Error, Result};
use crate::models::{
    GovernmentWallet, PaymentMethod, Product, ProductSubmission, Purchase, RenewableProject, Role,
    User,
};
use chrono::Utc;
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// The page currently shown; navigation is a single flag, nothing stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Products,
    UserDashboard,
    AdminDashboard,
    AdminLogin,
    Calculator,
    Manufacturer,
    Transparency,
    Projects,
    Wallet,
    Auth,
}

impl Page {
    /// The hyphenated page names used for navigation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Products => "products",
            Self::UserDashboard => "user-dashboard",
            Self::AdminDashboard => "admin-dashboard",
            Self::AdminLogin => "admin-login",
            Self::Calculator => "calculator",
            Self::Manufacturer => "manufacturer",
            Self::Transparency => "transparency",
            Self::Projects => "projects",
            Self::Wallet => "wallet",
            Self::Auth => "auth",
        }
    }

    /// All pages, in navigation-menu order.
    pub const ALL: [Self; 11] = [
        Self::Home,
        Self::Products,
        Self::UserDashboard,
        Self::AdminDashboard,
        Self::AdminLogin,
        Self::Calculator,
        Self::Manufacturer,
        Self::Transparency,
        Self::Projects,
        Self::Wallet,
        Self::Auth,
    ];
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| Error::Unrecognized {
                what: "page",
                value: s.to_string(),
            })
    }
}

/// Active tab inside the user dashboard. No cross-tab invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserTab {
    #[default]
    Dashboard,
    History,
    Wallet,
}

impl UserTab {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::History => "history",
            Self::Wallet => "wallet",
        }
    }
}

impl FromStr for UserTab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dashboard" => Ok(Self::Dashboard),
            "history" => Ok(Self::History),
            "wallet" => Ok(Self::Wallet),
            _ => Err(Error::Unrecognized {
                what: "tab",
                value: s.to_string(),
            }),
        }
    }
}

/// Active tab inside the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Overview,
    AddProject,
    Logs,
}

impl AdminTab {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::AddProject => "add-project",
            Self::Logs => "logs",
        }
    }
}

impl FromStr for AdminTab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "overview" => Ok(Self::Overview),
            "add-project" => Ok(Self::AddProject),
            "logs" => Ok(Self::Logs),
            _ => Err(Error::Unrecognized {
                what: "tab",
                value: s.to_string(),
            }),
        }
    }
}

/// Active tab inside the manufacturer portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManufacturerTab {
    #[default]
    Upload,
    Products,
    Analytics,
    Blockchain,
}

impl ManufacturerTab {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Products => "products",
            Self::Analytics => "analytics",
            Self::Blockchain => "blockchain",
        }
    }
}

impl FromStr for ManufacturerTab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "upload" => Ok(Self::Upload),
            "products" => Ok(Self::Products),
            "analytics" => Ok(Self::Analytics),
            "blockchain" => Ok(Self::Blockchain),
            _ => Err(Error::Unrecognized {
                what: "tab",
                value: s.to_string(),
            }),
        }
    }
}

/// The whole application state for one session.
#[derive(Debug)]
pub struct Session {
    /// Current page flag
    pub page: Page,
    /// Product picked for the purchase flow, if any
    pub selected_product: Option<Product>,
    /// Set only by a successful admin login
    pub admin_authenticated: bool,
    /// Account from the auth page, if anyone signed in
    pub current_user: Option<User>,
    /// The session user owning the wallet and purchase history
    pub user: User,
    pub products: Vec<Product>,
    pub projects: Vec<RenewableProject>,
    pub government_wallet: GovernmentWallet,
    pub submissions: Vec<ProductSubmission>,
    /// Locally scoped tab selectors for the dashboards
    pub user_tab: UserTab,
    pub admin_tab: AdminTab,
    pub manufacturer_tab: ManufacturerTab,
    tax_rate_per_kg: f64,
    gst_rate: f64,
}

impl Session {
    /// Seeds a fresh session from the loaded catalog.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            page: Page::Home,
            selected_product: None,
            admin_authenticated: false,
            current_user: None,
            user: config.session_user.clone(),
            products: config.products.clone(),
            projects: config.projects.clone(),
            government_wallet: config.government_wallet.clone(),
            submissions: config.submissions.clone(),
            user_tab: UserTab::default(),
            admin_tab: AdminTab::default(),
            manufacturer_tab: ManufacturerTab::default(),
            tax_rate_per_kg: config.rates.tax_per_kg,
            gst_rate: config.rates.gst,
        }
    }

    /// Carbon tax rate in rupees per kg of CO2.
    #[must_use]
    pub const fn tax_rate_per_kg(&self) -> f64 {
        self.tax_rate_per_kg
    }

    /// GST rate applied by the calculator.
    #[must_use]
    pub const fn gst_rate(&self) -> f64 {
        self.gst_rate
    }

    /// Navigates to a page. Visiting the admin dashboard without the
    /// authenticated flag lands on the admin login page instead.
    pub fn navigate(&mut self, page: Page) {
        let destination = if page == Page::AdminDashboard && !self.admin_authenticated {
            Page::AdminLogin
        } else {
            page
        };
        info!(page = %destination, "Navigating");
        self.page = destination;
    }

    /// Role used for role-gated areas: the signed-in account's role, or
    /// consumer when nobody signed in.
    #[must_use]
    pub fn effective_role(&self) -> Role {
        self.current_user.as_ref().map_or(Role::Consumer, |u| u.role)
    }

    /// Selects a catalog product, opening the purchase flow.
    ///
    /// # Errors
    /// [`Error::ProductNotFound`] for an unknown id.
    pub fn select_product(&mut self, product_id: &str) -> Result<&Product> {
        let product = self
            .products
            .iter()
            .find(|p| p.id == product_id)
            .ok_or_else(|| Error::ProductNotFound {
                id: product_id.to_string(),
            })?
            .clone();
        Ok(&*self.selected_product.insert(product))
    }

    /// Switches the active tab of the dashboard currently shown and returns
    /// its canonical name.
    ///
    /// # Errors
    /// [`Error::Unrecognized`] for an unknown tab name, or when the current
    /// page has no tabs.
    pub fn select_tab(&mut self, name: &str) -> Result<&'static str> {
        let selected = match self.page {
            Page::UserDashboard => {
                self.user_tab = name.parse()?;
                self.user_tab.name()
            }
            Page::AdminDashboard => {
                self.admin_tab = name.parse()?;
                self.admin_tab.name()
            }
            Page::Manufacturer => {
                self.manufacturer_tab = name.parse()?;
                self.manufacturer_tab.name()
            }
            page => {
                return Err(Error::Unrecognized {
                    what: "tabbed page",
                    value: page.to_string(),
                });
            }
        };
        Ok(selected)
    }

    /// Closes the purchase flow without buying.
    pub fn clear_selection(&mut self) {
        self.selected_product = None;
    }

    /// Completes the purchase of the selected product.
    ///
    /// Success clears the selection; a rejected purchase keeps the flow open
    /// with all state unchanged.
    ///
    /// # Errors
    /// [`Error::NoProductSelected`] with nothing selected, or the
    /// affordability rejection from [`purchase::record_purchase`].
    pub fn complete_purchase(&mut self, payment_method: PaymentMethod) -> Result<Purchase> {
        let product = self
            .selected_product
            .clone()
            .ok_or(Error::NoProductSelected)?;
        let purchase =
            purchase::record_purchase(&mut self.user, &product, payment_method, Utc::now())?;
        self.selected_product = None;
        Ok(purchase)
    }

    /// Admin login against the configured credential pair. On success the
    /// admin flag flips and navigation moves to the admin dashboard; on
    /// mismatch the flag stays false and the error surfaces to the caller.
    pub fn admin_login(
        &mut self,
        username: &str,
        password: &str,
        creds: &AdminCredentials,
    ) -> Result<()> {
        auth::verify_admin(username, password, creds)?;
        self.admin_authenticated = true;
        self.navigate(Page::AdminDashboard);
        Ok(())
    }

    /// Clears the admin flag and returns home.
    pub fn admin_logout(&mut self) {
        self.admin_authenticated = false;
        self.navigate(Page::Home);
    }

    /// Demo user login; success lands on the home page.
    pub fn login(&mut self, email: &str, password: &str) -> Result<()> {
        let user = auth::login_user(email, password)?;
        self.current_user = Some(user);
        self.navigate(Page::Home);
        Ok(())
    }

    /// Demo registration; success signs the new account in.
    pub fn register(&mut self, form: &auth::RegistrationForm) -> Result<()> {
        let user = auth::register_user(form)?;
        self.current_user = Some(user);
        self.navigate(Page::Home);
        Ok(())
    }

    /// One-click demo login for a role.
    pub fn demo_login(&mut self, role: Role) {
        info!(%role, "Demo login");
        self.current_user = Some(auth::demo_user(role));
        self.navigate(Page::Home);
    }

    /// Signs the current account out and returns to the auth page.
    pub fn logout(&mut self) {
        self.current_user = None;
        self.navigate(Page::Auth);
    }

    /// Submits a product for review from the manufacturer portal, gated on
    /// the effective role. New submissions are prepended.
    pub fn submit_product(&mut self, form: &submission::SubmissionForm) -> Result<&ProductSubmission> {
        let sub = submission::submit_product(
            self.effective_role(),
            form,
            self.tax_rate_per_kg,
            Utc::now().date_naive(),
        )?;
        self.submissions.insert(0, sub);
        Ok(&self.submissions[0])
    }

    /// Admin "add project" form. The demo validates and acknowledges the
    /// form but persists nothing; the project list stays read-only.
    pub fn acknowledge_project_form(&self, name: &str, budget: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::MissingField {
                field: "project name".to_string(),
            });
        }
        if budget.is_empty() {
            return Err(Error::MissingField {
                field: "budget".to_string(),
            });
        }
        info!(name, budget, "Project form acknowledged (demo, not persisted)");
        Ok(())
    }
}
