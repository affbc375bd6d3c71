//! Command execution: wires parsed arguments to the portal state.

use anyhow::bail;

use crate::config::Settings;
use crate::listing::{ListController, PagedSource};
use crate::models::CampaignDraft;
use crate::pagination::PagedResult;
use crate::services::CampaignForm;
use crate::state::Portal;

use super::parser::{CampaignCommands, Commands, ListArgs};
use super::render;

pub async fn execute_command(command: Commands, settings: &Settings) -> anyhow::Result<()> {
    let mut portal = Portal::new(settings);

    match command {
        Commands::Orders(args) => {
            let view = run_list(&mut portal.orders, &args, render::orders_view).await?;
            print!("{view}");
        }
        Commands::Payments(args) => {
            let view = run_list(&mut portal.payments, &args, render::payments_view).await?;
            print!("{view}");
        }
        Commands::Campaign { command } => execute_campaign(command, &portal).await?,
    }

    Ok(())
}

/// Mount a list controller with the requested query, fetch once, render.
async fn run_list<S: PagedSource>(
    controller: &mut ListController<S>,
    args: &ListArgs,
    render: impl Fn(&PagedResult<S::Item>) -> String,
) -> anyhow::Result<String> {
    controller.mount(args.to_query()).await;
    if let Some(message) = controller.last_error() {
        bail!("{message}");
    }
    Ok(render(controller.current()))
}

async fn execute_campaign(command: CampaignCommands, portal: &Portal) -> anyhow::Result<()> {
    match command {
        CampaignCommands::Show => match portal.campaigns.load_form().await? {
            CampaignForm::Update(campaign) => print!("{}", render::campaign_view(&campaign)),
            CampaignForm::Create => {
                println!("No campaign exists yet. Create one with `portal-rs campaign create`.");
            }
        },
        CampaignCommands::Winners => {
            let winners = portal.campaigns.winners().await?;
            print!("{}", render::winners_view(&winners));
        }
        CampaignCommands::Create(args) => {
            let draft = CampaignDraft::from(args);
            let campaign = portal.campaigns.create(&draft).await?;
            println!("Campaign created");
            print!("{}", render::campaign_view(&campaign));
        }
        CampaignCommands::Update { id, draft } => {
            let draft = CampaignDraft::from(draft);
            let campaign = portal.campaigns.update(id, &draft).await?;
            println!("Campaign updated");
            print!("{}", render::campaign_view(&campaign));
        }
    }

    Ok(())
}
