//! Top-level portal state: one controller per list view plus the campaign
//! service, wired from configuration.

use crate::config::Settings;
use crate::external::{CampaignsClient, OrdersClient, PaymentsClient};
use crate::listing::ListController;
use crate::services::CampaignService;

/// Everything a portal frontend needs: list controllers holding per-view
/// query state, and the campaign flow.
pub struct Portal {
    pub orders: ListController<OrdersClient>,
    pub payments: ListController<PaymentsClient>,
    pub campaigns: CampaignService,
}

impl Portal {
    pub fn new(settings: &Settings) -> Self {
        Self {
            orders: ListController::new(OrdersClient::new(&settings.backend.orders_base_url)),
            payments: ListController::new(PaymentsClient::new(
                &settings.backend.payments_base_url,
            )),
            campaigns: CampaignService::new(CampaignsClient::new(
                &settings.backend.campaigns_base_url,
            )),
        }
    }
}
