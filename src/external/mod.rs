//! HTTP clients for the backend admin services.

mod campaigns;
mod client;
mod orders;
mod paged;
mod payments;

pub use campaigns::CampaignsClient;
pub use client::HTTP_CLIENT;
pub use orders::OrdersClient;
pub use paged::fetch_paged;
pub use payments::PaymentsClient;
