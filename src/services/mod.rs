//! Service layer for flows that are more than a single request.

mod campaign_service;

pub use campaign_service::{CampaignForm, CampaignService};
