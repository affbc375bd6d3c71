//! CLI argument parsing with clap.

use clap::{Args, Parser, Subcommand};
use jiff::Timestamp;

use crate::models::CampaignDraft;
use crate::pagination::{DEFAULT_PAGE_SIZE, PageQuery, SortKey};

use shadow_rs::shadow;
shadow!(build);

/// Admin portal for the order, payment, and campaign services
#[derive(Parser, Debug)]
#[command(name = "portal-rs")]
#[command(about = "Admin portal for the order, payment, and campaign services")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log output to debug level
    #[arg(short, long)]
    pub verbose: bool,

    /// Reduce log output to errors only
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse orders
    Orders(ListArgs),

    /// Browse payments
    Payments(ListArgs),

    /// Manage the iPhone campaign
    Campaign {
        #[command(subcommand)]
        command: CampaignCommands,
    },
}

/// Paging and sorting flags shared by the list views.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Items per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub size: u32,

    /// Sort key; prefix with '-' for descending (e.g. -created_at)
    #[arg(long, default_value = "-created_at", allow_hyphen_values = true)]
    pub sort: String,
}

impl ListArgs {
    pub fn to_query(&self) -> PageQuery {
        PageQuery::new(self.page, self.size, SortKey::parse(&self.sort))
    }
}

#[derive(Subcommand, Debug)]
pub enum CampaignCommands {
    /// Show the current campaign, if one exists
    Show,

    /// List the campaign winners
    Winners,

    /// Create the campaign
    Create(DraftArgs),

    /// Update an existing campaign
    Update {
        /// Campaign id
        #[arg(long)]
        id: i64,

        #[command(flatten)]
        draft: DraftArgs,
    },
}

/// Campaign payload flags. Timestamps are ISO-8601
/// (e.g. 2026-08-01T00:00:00Z).
#[derive(Args, Debug)]
pub struct DraftArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub description: String,

    #[arg(long)]
    pub start_time: Timestamp,

    #[arg(long)]
    pub end_time: Timestamp,

    #[arg(long)]
    pub total_reward: i64,

    #[arg(long)]
    pub min_order_amount: i64,

    #[arg(long)]
    pub max_tracked_orders: i64,
}

impl From<DraftArgs> for CampaignDraft {
    fn from(args: DraftArgs) -> Self {
        CampaignDraft {
            name: args.name,
            description: args.description,
            start_time: args.start_time,
            end_time: args.end_time,
            total_reward: args.total_reward,
            min_order_amount: args.min_order_amount,
            max_tracked_orders: args.max_tracked_orders,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_args_parse_with_defaults() {
        let cli = Cli::try_parse_from(["portal-rs", "orders"]).unwrap();
        let Commands::Orders(args) = cli.command else {
            panic!("expected orders command");
        };
        let query = args.to_query();
        assert_eq!(query.page, 1);
        assert_eq!(query.size, 20);
        assert_eq!(query.sort.to_string(), "-created_at");
    }

    #[test]
    fn descending_sort_flag_is_accepted() {
        let cli = Cli::try_parse_from([
            "portal-rs",
            "payments",
            "--page",
            "3",
            "--sort",
            "-total_amount",
        ])
        .unwrap();
        let Commands::Payments(args) = cli.command else {
            panic!("expected payments command");
        };
        assert_eq!(args.page, 3);
        assert_eq!(args.to_query().sort.to_string(), "-total_amount");
    }

    #[test]
    fn campaign_create_parses_timestamps() {
        let cli = Cli::try_parse_from([
            "portal-rs",
            "campaign",
            "create",
            "--name",
            "iPhone giveaway",
            "--description",
            "First orders win",
            "--start-time",
            "2026-08-01T00:00:00Z",
            "--end-time",
            "2026-09-01T00:00:00Z",
            "--total-reward",
            "10",
            "--min-order-amount",
            "100",
            "--max-tracked-orders",
            "1000",
        ])
        .unwrap();
        let Commands::Campaign {
            command: CampaignCommands::Create(args),
        } = cli.command
        else {
            panic!("expected campaign create");
        };
        let draft = CampaignDraft::from(args);
        assert_eq!(draft.name, "iPhone giveaway");
        assert_eq!(draft.total_reward, 10);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["portal-rs", "-v", "-q", "orders"]).is_err());
    }
}
