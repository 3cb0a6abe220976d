//! Interactive shell - the line-based interface over a session.
//!
//! One command per line, each mapping onto a session method or a read-only
//! view. The simulated delays (admin login processing, payment processing,
//! wallet refresh) live here, not in the core; they are plain sleeps with no
//! cancellation, purely for demo feel.

use crate::config::AppConfig;
use crate::config::admin;
use crate::core::{auth, query, report, submission, tax};
use crate::errors::{Error, Result};
use crate::models::{PaymentMethod, Role};
use crate::session::{Page, Session};
use std::io::{BufRead, Write as _};
use std::time::Duration;
use tracing::info;

/// Simulated processing time for admin login.
pub const ADMIN_LOGIN_DELAY: Duration = Duration::from_millis(1000);
/// Simulated payment processing time.
pub const PURCHASE_DELAY: Duration = Duration::from_millis(1500);
/// Simulated blockchain refresh time for the government wallet.
pub const WALLET_REFRESH_DELAY: Duration = Duration::from_millis(2000);

/// Default file name for the audit trail export.
pub const AUDIT_CSV_FILE: &str = "government_wallet_audit_trail.csv";
/// Default file name for the admin transaction log export.
pub const ADMIN_LOG_CSV_FILE: &str = "admin_transaction_log.csv";

const HELP: &str = "\
Commands:
  pages                          list pages
  goto <page>                    navigate (home, products, projects, ...)
  tab <name>                     switch the current dashboard's tab
  products                       show the catalog with carbon tax
  select <product-id>            open the purchase flow for a product
  buy <wallet|inr>               confirm the selected purchase
  cancel                         close the purchase flow
  calc <category>                calculator product picker for a category
  quote <product-id>             carbon calculator quote (GST + carbon tax)
  projects [type] [status]       filter renewable projects (all = any)
  submissions                    manufacturer submissions and totals
  overview                       admin collection stats (admin only)
  logs                           admin transaction log (admin only)
  export-logs [path]             write the transaction log CSV (admin only)
  add-project <name> <budget>    admin project form (admin only, demo)
  transparency [date] [name]     filter the tax transaction list
  dashboard                      user dashboard totals
  wallet                         government wallet overview
  refresh                        refresh the wallet from the \"blockchain\"
  export-csv [path]              write the audit trail CSV
  login <email> <password>       demo login
  register <name> <email> <password> <confirm> <role>
  demo <consumer|manufacturer|admin>
  logout                         sign out
  admin-login <user> <password>  admin portal login
  admin-logout                   leave the admin portal
  submit <name> <category> <price> <co2> [description...]
  quit";

/// Runs the shell loop over stdin until EOF or `quit`.
///
/// # Errors
/// Only I/O failures on stdin/stdout terminate the loop with an error;
/// command failures are printed and the loop continues.
pub async fn run_shell(config: &AppConfig) -> Result<()> {
    let mut session = Session::new(config);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    println!("Carbon Tax Management Portal (demo). Type `help` for commands.");
    loop {
        print!("[{}] > ", session.page);
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        match dispatch(&mut session, line).await {
            Ok(()) => {}
            Err(e) => println!("! {e}"),
        }
    }

    info!("Session ended");
    Ok(())
}

#[allow(clippy::too_many_lines)] // One arm per page-level command
async fn dispatch(session: &mut Session, line: &str) -> Result<()> {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default();
    let args: Vec<&str> = parts.collect();

    match command {
        "help" => println!("{HELP}"),
        "pages" => {
            for page in Page::ALL {
                println!("  {page}");
            }
        }
        "goto" => {
            let page: Page = arg(&args, 0, "page")?.parse()?;
            session.navigate(page);
        }
        "tab" => {
            let tab = session.select_tab(arg(&args, 0, "tab")?)?;
            println!("Switched to the {tab} tab");
        }
        "products" => show_products(session),
        "select" => {
            let id = arg(&args, 0, "product id")?;
            let product = session.select_product(id)?;
            println!(
                "Selected {} - base {} + carbon tax {} = {}",
                product.name,
                report::format_inr(product.base_price),
                report::format_inr(product.carbon_tax),
                report::format_inr(product.base_price + product.carbon_tax),
            );
            println!(
                "Wallet balance: {}. `buy wallet` or `buy inr` to confirm.",
                report::format_inr(session.user.wallet_balance)
            );
        }
        "buy" => {
            let method: PaymentMethod = arg(&args, 0, "payment method")?.parse()?;
            println!("Processing...");
            tokio::time::sleep(PURCHASE_DELAY).await;
            let purchase = session.complete_purchase(method)?;
            println!(
                "Successfully purchased {}! Total {} ({}), tx {}",
                purchase.product_name,
                report::format_inr(purchase.total_price),
                purchase.payment_method,
                purchase.tx_hash.as_deref().unwrap_or("-"),
            );
        }
        "cancel" => session.clear_selection(),
        "calc" => {
            let category = arg(&args, 0, "category")?;
            let matches = tax::products_in_category(&session.products, category);
            if matches.is_empty() {
                println!("No products in category {category}");
            }
            for p in matches {
                println!("  {}  {} ({} kg CO2)", p.id, p.name, p.co2_emission);
            }
        }
        "quote" => {
            let id = arg(&args, 0, "product id")?;
            let product = session
                .products
                .iter()
                .find(|p| p.id == id)
                .ok_or_else(|| Error::ProductNotFound { id: id.to_string() })?;
            let quote = tax::quote_product(product, session.gst_rate());
            println!("Quote for {}:", product.name);
            println!("  CO2 emitted : {} kg", quote.co2_emitted);
            println!("  Base price  : {}", report::format_inr(quote.base_price));
            println!("  GST         : {}", report::format_inr(quote.gst));
            println!("  Carbon tax  : {}", report::format_inr(quote.carbon_tax));
            println!("  Total       : {}", report::format_inr(quote.total_price));
            println!("  Tx hash     : {}", quote.tx_hash);
        }
        "projects" => show_projects(session, &args)?,
        "submissions" => show_submissions(session),
        "overview" => {
            require_admin(session)?;
            let collected = query::total_tax_collected(&session.user.purchases);
            println!("Total tax collected : {}", report::format_inr(collected));
            println!(
                "Fund spent (est.)   : {}",
                report::format_inr(query::fund_spent_estimate(collected))
            );
            println!("Transactions        : {}", session.user.purchases.len());
        }
        "logs" => {
            require_admin(session)?;
            let log = report::transaction_log(&session.user.purchases);
            for entry in &log {
                println!(
                    "#{}  {:<10} {}  {}  {}",
                    entry.short_id(),
                    entry.user_name,
                    report::format_inr(entry.tax_amount),
                    entry.date,
                    entry.purpose,
                );
            }
            println!("{} entries", log.len());
        }
        "export-logs" => {
            require_admin(session)?;
            let path = args.first().copied().unwrap_or(ADMIN_LOG_CSV_FILE);
            let log = report::transaction_log(&session.user.purchases);
            std::fs::write(path, report::transaction_log_csv(&log))?;
            println!("Transaction log exported ({path})");
        }
        "add-project" => {
            require_admin(session)?;
            let name = arg(&args, 0, "project name")?;
            let budget = arg(&args, 1, "budget")?;
            session.acknowledge_project_form(name, budget)?;
            println!("Project added successfully! (demo; the funded list stays fixed)");
        }
        "transparency" => show_transparency(session, &args),
        "dashboard" => show_dashboard(session),
        "wallet" => show_wallet(session),
        "refresh" => {
            println!("Refreshing wallet from blockchain...");
            tokio::time::sleep(WALLET_REFRESH_DELAY).await;
            println!("Wallet balance updated from blockchain");
        }
        "export-csv" => {
            let path = args.first().copied().unwrap_or(AUDIT_CSV_FILE);
            let csv = report::audit_trail_csv(&session.user.purchases);
            std::fs::write(path, csv)?;
            println!("Audit trail downloaded successfully ({path})");
        }
        "login" => {
            let email = arg(&args, 0, "email")?;
            let password = arg(&args, 1, "password")?;
            session.login(email, password)?;
            println!("Login successful!");
        }
        "register" => {
            let form = auth::RegistrationForm {
                name: arg(&args, 0, "name")?.to_string(),
                email: arg(&args, 1, "email")?.to_string(),
                password: arg(&args, 2, "password")?.to_string(),
                confirm_password: arg(&args, 3, "confirm password")?.to_string(),
                role: arg(&args, 4, "role")?.parse()?,
            };
            session.register(&form)?;
            println!("Registration successful! Welcome to the Carbon Tax Management System.");
        }
        "demo" => {
            let role: Role = arg(&args, 0, "role")?.parse()?;
            session.demo_login(role);
            println!("Logged in as {role}");
        }
        "logout" => session.logout(),
        "admin-login" => {
            let username = arg(&args, 0, "username")?;
            let password = arg(&args, 1, "password")?;
            println!("Signing in...");
            tokio::time::sleep(ADMIN_LOGIN_DELAY).await;
            session.admin_login(username, password, &admin::get_admin_credentials())?;
            println!("Admin login successful!");
        }
        "admin-logout" => session.admin_logout(),
        "submit" => {
            let form = submission::SubmissionForm {
                name: arg(&args, 0, "name")?.to_string(),
                category: arg(&args, 1, "category")?.to_string(),
                base_price: parse_amount(arg(&args, 2, "base price")?)?,
                co2_emission: parse_amount(arg(&args, 3, "co2 emission")?)?,
                description: args.get(4..).unwrap_or_default().join(" "),
            };
            let sub = session.submit_product(&form)?;
            println!(
                "Product submitted for review! {} (tax {}/unit), status {}",
                sub.name,
                report::format_inr(sub.carbon_tax_per_unit),
                sub.status,
            );
        }
        other => {
            return Err(Error::Unrecognized {
                what: "command",
                value: other.to_string(),
            });
        }
    }
    Ok(())
}

fn require_admin(session: &Session) -> Result<()> {
    if session.admin_authenticated {
        Ok(())
    } else {
        Err(Error::AccessDenied {
            required: Role::Admin,
        })
    }
}

fn arg<'a>(args: &[&'a str], index: usize, field: &str) -> Result<&'a str> {
    args.get(index).copied().ok_or_else(|| Error::MissingField {
        field: field.to_string(),
    })
}

fn parse_amount(s: &str) -> Result<f64> {
    s.parse().map_err(|_| Error::Unrecognized {
        what: "amount",
        value: s.to_string(),
    })
}

fn show_products(session: &Session) {
    println!("id  product                        category     base        tax      CO2 kg");
    for p in &session.products {
        println!(
            "{:<3} {:<30} {:<12} {:>10} {:>8} {:>9}",
            p.id,
            p.name,
            p.category,
            report::format_inr(p.base_price),
            report::format_inr(p.carbon_tax),
            p.co2_emission,
        );
    }
}

fn show_submissions(session: &Session) {
    for s in &session.submissions {
        println!(
            "{:<28} {:<12} {:<9} {} units  {} generated  tax {}/unit",
            s.name,
            s.category,
            s.status,
            s.units_sold,
            report::format_inr(s.carbon_tax_generated),
            report::format_inr(s.carbon_tax_per_unit),
        );
    }
    println!(
        "{} approved  |  {} units sold  |  {} tax generated",
        submission::approved_count(&session.submissions),
        submission::total_units_sold(&session.submissions),
        report::format_inr(submission::total_tax_generated(&session.submissions)),
    );
}

fn show_projects(session: &Session, args: &[&str]) -> Result<()> {
    let mut filter = query::ProjectFilter::default();
    if let Some(&t) = args.first() {
        if t != "all" {
            filter.project_type = Some(t.parse()?);
        }
    }
    if let Some(&s) = args.get(1) {
        if s != "all" {
            filter.status = Some(s.parse()?);
        }
    }

    let projects = query::filter_projects(&session.projects, &filter);
    if projects.is_empty() {
        println!("No projects found. Try adjusting your filters to see more projects.");
        return Ok(());
    }
    for p in projects {
        println!(
            "{:<28} {:<8} {:<10} {}  est. {} tons CO2  {}",
            p.name,
            p.project_type,
            p.status,
            report::format_crore(p.amount_invested),
            p.co2_reduction_estimate,
            p.tx_hash,
        );
    }
    println!(
        "Total invested {}  |  est. reduction {} tons  |  {} completed",
        report::format_crore(query::total_investment(&session.projects)),
        query::total_co2_reduction(&session.projects),
        query::completed_count(&session.projects),
    );
    Ok(())
}

fn show_transparency(session: &Session, args: &[&str]) {
    let filter = query::PurchaseFilter {
        date_contains: args.first().filter(|a| **a != "all").map(ToString::to_string),
        name_contains: args.get(1).filter(|a| **a != "all").map(ToString::to_string),
    };

    let collected = session.government_wallet.total_collected;
    let spent = query::total_investment(&session.projects);
    println!(
        "Collected {}  |  Spent {}  |  Available {}",
        report::format_crore(collected),
        report::format_crore(spent),
        report::format_crore(query::available_balance(collected, spent)),
    );

    for p in query::filter_purchases(&session.user.purchases, &filter) {
        println!(
            "{}  {:<30} tax {}  {}  {}",
            p.date,
            p.product_name,
            report::format_inr(p.carbon_tax),
            p.payment_method,
            p.tx_hash.as_deref().unwrap_or("-"),
        );
    }
}

fn show_dashboard(session: &Session) {
    let user = &session.user;
    println!("{} <{}> ({})", user.name, user.email, user.role);
    println!("  Wallet balance : {}", report::format_inr(user.wallet_balance));
    println!("  Total tax paid : {}", report::format_inr(user.total_tax_paid));
    println!("  Purchases      : {}", user.purchase_count);
    for (category, amount) in query::tax_by_category(&user.purchases, &session.products) {
        println!("    {category}: {}", report::format_inr(amount));
    }
}

fn show_wallet(session: &Session) {
    let wallet = &session.government_wallet;
    println!("Address: {}", wallet.address);
    println!("  Balance          : {}", report::format_crore(wallet.balance));
    println!("  Total collected  : {}", report::format_crore(wallet.total_collected));
    println!("  Total spent      : {}", report::format_crore(wallet.total_spent));
    println!("  Verified txs     : {}", wallet.verified_transactions);
    println!("  Efficiency       : {}%", query::efficiency_percent(wallet));
}
