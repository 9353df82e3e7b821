//! Page sources for the three paged endpoints.
//!
//! Each wraps the client with one endpoint's path, query parameters, and
//! response extraction, yielding uniform [`Page`]s to the fetch engine. An
//! absent cursor is sent as an empty `nextToken` parameter, matching what
//! the endpoints expect on a first page.

use chrono::{SecondsFormat, Utc};

use super::SpApiError;
use super::client::SpApiClient;
use super::types::{
    InventoryResponse, InventorySummary, Shipment, ShipmentItem, ShipmentItemsResponse,
    ShipmentsResponse,
};
use crate::fetch::{Page, PageSource};

/// Shipment statuses included in every shipments query.
const SHIPMENT_STATUS_LIST: &str = "CLOSED,CHECKED_IN,WORKING,READY_TO_SHIP,SHIPPED,RECEIVING,\
                                    CANCELLED,DELETED,CLOSED,ERROR,IN_TRANSIT,DELIVERED,CHECKED_IN";

/// FBA inventory summaries, `/fba/inventory/v1/summaries`.
pub struct InventoryPages {
    client: SpApiClient,
}

impl InventoryPages {
    #[must_use]
    pub const fn new(client: SpApiClient) -> Self {
        Self { client }
    }
}

impl PageSource for InventoryPages {
    type Record = InventorySummary;

    async fn fetch_page(&self, cursor: Option<&str>) -> Result<Page<InventorySummary>, SpApiError> {
        let config = self.client.config();
        let response: InventoryResponse = self
            .client
            .get_json(
                "/fba/inventory/v1/summaries",
                &[
                    ("details", "true"),
                    ("granularityType", "Marketplace"),
                    ("granularityId", config.granularity_id.as_str()),
                    ("marketplaceIds", config.marketplace_id.as_str()),
                    ("nextToken", cursor.unwrap_or("")),
                ],
            )
            .await?;

        Ok(Page {
            records: response
                .payload
                .map(|p| p.inventory_summaries)
                .unwrap_or_default(),
            next_token: response
                .pagination
                .and_then(|p| p.next_token)
                .filter(|t| !t.is_empty()),
        })
    }
}

/// Inbound shipments, `/fba/inbound/v0/shipments`.
pub struct ShipmentPages {
    client: SpApiClient,
}

impl ShipmentPages {
    #[must_use]
    pub const fn new(client: SpApiClient) -> Self {
        Self { client }
    }
}

impl PageSource for ShipmentPages {
    type Record = Shipment;

    async fn fetch_page(&self, cursor: Option<&str>) -> Result<Page<Shipment>, SpApiError> {
        let config = self.client.config();
        let response: ShipmentsResponse = self
            .client
            .get_json(
                "/fba/inbound/v0/shipments",
                &[
                    ("ShipmentStatusList", SHIPMENT_STATUS_LIST),
                    ("QueryType", "SHIPMENT"),
                    ("MarketplaceId", config.marketplace_id.as_str()),
                    ("NextToken", cursor.unwrap_or("")),
                ],
            )
            .await?;

        let payload = response.payload.unwrap_or_default();

        Ok(Page {
            records: payload.shipment_data,
            next_token: payload.next_token.filter(|t| !t.is_empty()),
        })
    }
}

/// Inbound shipment items, `/fba/inbound/v0/shipmentItems`.
///
/// Continuation is disabled for this endpoint: each invocation takes one
/// page, and the page never carries a token, so the engine always settles
/// with a cleared cursor.
pub struct ShipmentItemPages {
    client: SpApiClient,
}

impl ShipmentItemPages {
    #[must_use]
    pub const fn new(client: SpApiClient) -> Self {
        Self { client }
    }
}

impl PageSource for ShipmentItemPages {
    type Record = ShipmentItem;

    async fn fetch_page(&self, cursor: Option<&str>) -> Result<Page<ShipmentItem>, SpApiError> {
        let config = self.client.config();
        let last_updated_before = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        let response: ShipmentItemsResponse = self
            .client
            .get_json(
                "/fba/inbound/v0/shipmentItems",
                &[
                    ("LastUpdatedAfter", config.last_updated_after.as_str()),
                    ("LastUpdatedBefore", last_updated_before.as_str()),
                    ("QueryType", "DATE_RANGE"),
                    ("MarketplaceId", config.marketplace_id.as_str()),
                    ("NextToken", cursor.unwrap_or("")),
                ],
            )
            .await?;

        Ok(Page {
            records: response.payload.map(|p| p.item_data).unwrap_or_default(),
            next_token: None,
        })
    }
}
