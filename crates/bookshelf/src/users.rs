use crate::prelude::{println, *};
use bookshelf_core::config::Config;
use bookshelf_core::pagination::{
    clamp_page, page_bounds, render_pagination, total_pages, PageControl,
};
use bookshelf_core::users::{filter_users, sort_users, SortDirection, SortField, UserRecord};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, clap::Parser)]
#[command(name = "users")]
#[command(about = "User list operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List users, optionally searched, ordered and paged
    #[clap(name = "list")]
    List(ListOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// JSON file holding an array of users (see data/users.json for a sample)
    #[arg(short, long, env = "BOOKSHELF_USERS")]
    file: Option<PathBuf>,

    /// Case-insensitive text matched against name, email, phone and address
    #[arg(short, long, default_value = "")]
    search: String,

    /// Field to order by: firstname, lastname, email, phone, address
    #[arg(long)]
    sort_by: Option<SortField>,

    /// Sort direction: asc or desc
    #[arg(short, long, default_value = "asc")]
    direction: SortDirection,

    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    page: usize,

    /// Users per page (defaults to page_size from the config)
    #[arg(short, long)]
    limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// One page of the user list
#[derive(Debug, Serialize)]
pub struct UserListOutput {
    pub search: String,
    pub sort_by: Option<SortField>,
    pub direction: SortDirection,
    pub users: Vec<UserRecord>,
    pub pagination: UserListPagination,
}

/// Pagination metadata for the user list
#[derive(Debug, Serialize)]
pub struct UserListPagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_users: usize,
    pub limit: usize,
    pub controls: Vec<PageControl>,
}

pub async fn run(app: App, config: &Config, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::List(options) => list(options, config, global).await,
    }
}

async fn list(options: ListOptions, config: &Config, global: crate::Global) -> Result<()> {
    let path = options
        .file
        .clone()
        .or_else(|| config.users_file.clone())
        .ok_or_else(|| eyre!(Error::NoUsersFile))?;

    if global.verbose {
        println!("Reading users from {}", path.display());
    }

    let users = load_users(&path).await?;
    log::debug!("Loaded {} users from {}", users.len(), path.display());

    let limit = options.limit.unwrap_or(config.page_size);
    let output = build_user_list(&users, &options, limit)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        output_formatted(&output);
    }

    Ok(())
}

/// Read a JSON array of users from `path`.
pub async fn load_users(path: &Path) -> Result<Vec<UserRecord>> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .wrap_err_with(|| format!("Failed to read users file {}", path.display()))?;

    serde_json::from_str(&contents).wrap_err_with(|| Error::InvalidUsersFile(path.to_path_buf()))
}

/// Search, order and page `users` for display.
///
/// The requested page is clamped to `[1, total_pages]` once, and that page is
/// used for the slice, the reported page and the controls. An empty result
/// yields page 1 with no users and no controls.
fn build_user_list(
    users: &[UserRecord],
    options: &ListOptions,
    limit: usize,
) -> Result<UserListOutput> {
    if limit == 0 {
        return Err(eyre!("--limit must be at least 1"));
    }

    let mut matching = filter_users(users, &options.search);
    if let Some(field) = options.sort_by {
        matching = sort_users(&matching, field, options.direction);
    }

    let total_users = matching.len();
    let pages = total_pages(total_users, limit);
    let page = clamp_page(options.page, pages);
    if page != options.page {
        log::debug!("Page {} clamped to {page} of {pages}", options.page);
    }

    let page_users = if matching.is_empty() {
        Vec::new()
    } else {
        let (start, end) = page_bounds(total_users, page, limit)?;
        matching[start..end].to_vec()
    };

    Ok(UserListOutput {
        search: options.search.clone(),
        sort_by: options.sort_by,
        direction: options.direction,
        users: page_users,
        pagination: UserListPagination {
            current_page: page,
            total_pages: pages,
            total_users,
            limit,
            controls: render_pagination(page, pages),
        },
    })
}

fn output_formatted(output: &UserListOutput) {
    if output.users.is_empty() {
        if output.search.is_empty() {
            println!("No users found.");
        } else {
            println!("No users match \"{}\".", output.search);
        }
        return;
    }

    let mut table = crate::prelude::new_table();
    table.add_row(prettytable::row![
        "ID",
        "First name",
        "Last name",
        "Email",
        "Phone",
        "Address"
    ]);

    for user in &output.users {
        table.add_row(prettytable::row![
            user.id.as_deref().unwrap_or("-"),
            user.firstname.as_deref().unwrap_or(""),
            user.lastname.as_deref().unwrap_or(""),
            user.email.as_deref().unwrap_or(""),
            user.phone.as_deref().unwrap_or(""),
            user.address.as_deref().unwrap_or("")
        ]);
    }

    table.printstd();

    let pagination = &output.pagination;
    println!(
        "\nPage {} of {} ({} users)",
        pagination.current_page, pagination.total_pages, pagination.total_users
    );

    if !pagination.controls.is_empty() {
        println!("{}", crate::pages::colorize_controls(&pagination.controls));
    }
}
