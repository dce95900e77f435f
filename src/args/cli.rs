use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};

use crate::models::MetalType;
use crate::worker::OrderStream;

#[derive(Debug, Parser)]
#[command(
    name = "bullion-admin",
    version,
    about = "Admin console and scripting CLI for the bullion platform"
)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the admin API base URL
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Defaults to the interactive console
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Console)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the interactive console
    Console,
    /// Sign in and store the session
    Login(LoginArgs),
    /// Sign out and forget the stored session
    Logout,
    #[command(flatten)]
    Api(ApiCommand),
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    /// Read from the first line of stdin when omitted
    #[arg(long)]
    pub password: Option<String>,
}

/// Commands that call the admin API and print JSON.
#[derive(Debug, Subcommand)]
pub enum ApiCommand {
    #[command(subcommand)]
    Users(UsersCommand),
    #[command(subcommand)]
    Products(ProductsCommand),
    #[command(subcommand)]
    Prices(PricesCommand),
    #[command(subcommand)]
    Refunds(RefundsCommand),
    #[command(subcommand)]
    Orders(OrdersCommand),
    #[command(subcommand)]
    Referrals(ReferralsCommand),
    #[command(subcommand)]
    Schemes(SchemesCommand),
    #[command(subcommand)]
    Analytics(AnalyticsCommand),
}

#[derive(Debug, Clone, Copy, Args)]
pub struct PageArgs {
    #[arg(long, default_value_t = 0)]
    pub skip: u32,
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub limit: u32,
}

#[derive(Debug, Clone, Copy, Args)]
pub struct DateRange {
    /// First day, YYYY-MM-DD
    #[arg(long)]
    pub start: Option<NaiveDate>,
    /// Last day, YYYY-MM-DD
    #[arg(long)]
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    List {
        #[command(flatten)]
        page: PageArgs,
        /// Case-insensitive match on email, name or phone
        #[arg(long)]
        search: Option<String>,
    },
    Show { id: String },
}

#[derive(Debug, Args)]
pub struct ProductArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub category: String,
    #[arg(long)]
    pub sku: Option<String>,
    #[arg(long)]
    pub metal: Option<MetalType>,
    #[arg(long)]
    pub purity: Option<String>,
    /// Grams
    #[arg(long)]
    pub weight: Option<f64>,
    #[arg(long)]
    pub gross_weight: Option<f64>,
    #[arg(long)]
    pub net_weight: Option<f64>,
    #[arg(long)]
    pub stone_weight: Option<f64>,
    #[arg(long)]
    pub stock: Option<i64>,
    #[arg(long)]
    pub wastage: Option<f64>,
    #[arg(long)]
    pub making_charge: Option<f64>,
    #[arg(long)]
    pub gst: Option<f64>,
    #[arg(long)]
    pub discount: Option<f64>,
    #[arg(long)]
    pub discount_type: Option<String>,
    /// PNG, JPG or WebP up to 10 MB; repeatable
    #[arg(long = "photo", value_name = "PATH")]
    pub photos: Vec<PathBuf>,
    /// PDF or image up to 50 MB
    #[arg(long, value_name = "PATH")]
    pub certificate: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum ProductsCommand {
    List {
        #[command(flatten)]
        page: PageArgs,
        /// Case-insensitive match on name, SKU or category
        #[arg(long)]
        search: Option<String>,
    },
    Show {
        id: String,
    },
    Create(ProductArgs),
    Update {
        id: String,
        #[command(flatten)]
        product: ProductArgs,
    },
    Delete {
        id: String,
    },
    Categories,
    AddCategory {
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        inactive: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum PricesCommand {
    /// Latest price of one metal, or both
    Latest {
        #[arg(long)]
        metal: Option<MetalType>,
    },
    History {
        #[arg(long, default_value = "gold")]
        metal: MetalType,
        #[command(flatten)]
        range: DateRange,
    },
    Set {
        #[arg(long)]
        metal: MetalType,
        #[arg(long)]
        buy: String,
        #[arg(long)]
        sell: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum RefundsCommand {
    Initiate {
        order_id: String,
        #[arg(long)]
        amount: String,
        #[arg(long)]
        reason: String,
    },
    Status {
        order_id: String,
    },
    History,
    List {
        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Debug, Args)]
pub struct OrderFilters {
    #[arg(long)]
    pub user: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub fulfillment: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum OrdersCommand {
    /// One page of gold, silver, ornaments or wallet
    List {
        stream: OrderStream,
        #[command(flatten)]
        page: PageArgs,
        #[command(flatten)]
        filters: OrderFilters,
    },
    Redemptions {
        #[command(flatten)]
        page: PageArgs,
        #[command(flatten)]
        filters: OrderFilters,
    },
    /// Set an ornament order's fulfillment status
    Fulfill {
        order_id: String,
        /// pending, in_progress, ready_for_pickup or picked_up
        status: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum ReferralsCommand {
    /// One metal's configuration, or both
    Show {
        #[arg(long)]
        metal: Option<MetalType>,
    },
    Set {
        #[arg(long)]
        metal: MetalType,
        #[arg(long, default_value = "")]
        referrer_bonus: String,
        #[arg(long, default_value = "")]
        referee_bonus: String,
        #[arg(long, default_value = "")]
        min_investment: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum SchemesCommand {
    List {
        #[arg(long, default_value_t = 0)]
        skip: u32,
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=100))]
        limit: u32,
    },
    Show {
        id: String,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        terms: String,
    },
    /// Omitted fields keep their current values
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        terms: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    Delete {
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum AnalyticsCommand {
    Summary {
        #[command(flatten)]
        range: DateRange,
    },
    Dashboard {
        #[command(flatten)]
        range: DateRange,
        #[arg(long)]
        refund_skip: Option<u32>,
        #[arg(long)]
        refund_limit: Option<u32>,
    },
}
