//! Plain-text rendering of list views and campaign details.

use std::fmt::Write;

use crate::models::{Campaign, IphoneWinner, Order, Payment};
use crate::pagination::{MAX_VISIBLE_PAGES, PageMetadata, PagedResult, item_range, visible_pages};

/// "Showing X to Y of Z" line plus the page strip, current page bracketed.
pub fn pagination_footer(meta: &PageMetadata) -> String {
    if meta.total == 0 {
        return "No results".to_string();
    }

    let (start, end) = item_range(meta.page_number, meta.page_size, meta.total);
    let strip = visible_pages(meta.page_number, meta.total_pages, MAX_VISIBLE_PAGES)
        .into_iter()
        .map(|page| {
            if page == meta.page_number {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "Showing {start} to {end} of {} results\nPages: {strip}",
        meta.total
    )
}

pub fn orders_view(result: &PagedResult<Order>) -> String {
    if result.items.is_empty() {
        return format!("No orders found\n{}\n", pagination_footer(&result.metadata));
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<24} {:<20} {:>12} {:<12} CREATED",
        "ID", "CUSTOMER", "AMOUNT", "STATUS"
    );
    for order in &result.items {
        let _ = writeln!(
            out,
            "{:<24} {:<20} {:>12.2} {:<12} {}",
            order.id, order.customer_name, order.total_amount, order.status, order.created_at
        );
    }
    let _ = writeln!(out, "{}", pagination_footer(&result.metadata));
    out
}

pub fn payments_view(result: &PagedResult<Payment>) -> String {
    if result.items.is_empty() {
        return format!(
            "No payments found\n{}\n",
            pagination_footer(&result.metadata)
        );
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<24} {:<24} {:>12} {:<12} CREATED",
        "ID", "ORDER", "AMOUNT", "STATUS"
    );
    for payment in &result.items {
        let _ = writeln!(
            out,
            "{:<24} {:<24} {:>12.2} {:<12} {}",
            payment.id, payment.order_id, payment.total_amount, payment.status, payment.created_at
        );
    }
    let _ = writeln!(out, "{}", pagination_footer(&result.metadata));
    out
}

pub fn winners_view(winners: &[IphoneWinner]) -> String {
    if winners.is_empty() {
        return "No winners found\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<16} {:<20} {:>12} FIRST ORDER",
        "CUSTOMER", "NAME", "MAX AMOUNT"
    );
    for winner in winners {
        let _ = writeln!(
            out,
            "{:<16} {:<20} {:>12.2} {}",
            winner.customer_id,
            winner.customer_name,
            winner.max_total_order_amount,
            winner.first_order_time
        );
    }
    out
}

pub fn campaign_view(campaign: &Campaign) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Campaign #{}: {}", campaign.id, campaign.name);
    let _ = writeln!(out, "  type:               {}", campaign.kind);
    let _ = writeln!(out, "  description:        {}", campaign.description);
    let _ = writeln!(
        out,
        "  runs:               {} .. {}",
        campaign.start_time, campaign.end_time
    );
    let _ = writeln!(
        out,
        "  total reward:       {}",
        campaign.policy.total_reward
    );
    let _ = writeln!(
        out,
        "  min order amount:   {}",
        campaign.policy.min_order_amount
    );
    let _ = writeln!(
        out,
        "  max tracked orders: {}",
        campaign.policy.max_tracked_orders
    );
    out
}
