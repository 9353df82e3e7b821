//! SP-API response shapes.
//!
//! Field names mirror the wire format: the inventory (v1) endpoint uses
//! camelCase, the inbound (v0) endpoints use PascalCase. Every field is
//! optional on the wire; conversions substitute the column defaults.

use serde::Deserialize;

// =============================================================================
// Inventory summaries (/fba/inventory/v1/summaries)
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryResponse {
    #[serde(default)]
    pub pagination: Option<InventoryPagination>,
    #[serde(default)]
    pub payload: Option<InventoryPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryPagination {
    #[serde(default)]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryPayload {
    #[serde(default)]
    pub inventory_summaries: Vec<InventorySummary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub asin: Option<String>,
    #[serde(default)]
    pub fn_sku: Option<String>,
    #[serde(default)]
    pub seller_sku: Option<String>,
    #[serde(default)]
    pub inventory_details: Option<InventoryDetails>,
    #[serde(default)]
    pub total_quantity: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryDetails {
    #[serde(default)]
    pub fulfillable_quantity: Option<i64>,
    #[serde(default)]
    pub inbound_working_quantity: Option<i64>,
    #[serde(default)]
    pub inbound_shipped_quantity: Option<i64>,
    #[serde(default)]
    pub inbound_receiving_quantity: Option<i64>,
    #[serde(default)]
    pub reserved_quantity: Option<ReservedQuantity>,
    #[serde(default)]
    pub future_supply_quantity: Option<FutureSupplyQuantity>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservedQuantity {
    #[serde(default)]
    pub total_reserved_quantity: Option<i64>,
    #[serde(default)]
    pub pending_customer_order_quantity: Option<i64>,
    #[serde(default)]
    pub pending_transshipment_quantity: Option<i64>,
    #[serde(default)]
    pub fc_processing_quantity: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FutureSupplyQuantity {
    #[serde(default)]
    pub reserved_future_supply_quantity: Option<i64>,
    #[serde(default)]
    pub future_supply_buyable_quantity: Option<i64>,
}

// =============================================================================
// Inbound shipments (/fba/inbound/v0/shipments)
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShipmentsResponse {
    #[serde(default)]
    pub payload: Option<ShipmentsPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentsPayload {
    #[serde(default)]
    pub next_token: Option<String>,
    #[serde(default)]
    pub shipment_data: Vec<Shipment>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Shipment {
    #[serde(default)]
    pub shipment_id: Option<String>,
    #[serde(default)]
    pub shipment_name: Option<String>,
    #[serde(default)]
    pub ship_from_address: Option<ShipFromAddress>,
    #[serde(default)]
    pub destination_fulfillment_center_id: Option<String>,
    #[serde(default)]
    pub shipment_status: Option<String>,
    #[serde(default)]
    pub label_prep_type: Option<String>,
    #[serde(default)]
    pub are_cases_required: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipFromAddress {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

// =============================================================================
// Inbound shipment items (/fba/inbound/v0/shipmentItems)
// =============================================================================

/// Only `payload.ItemData` is consumed; continuation is disabled for this
/// endpoint, so any `NextToken` in the response is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShipmentItemsResponse {
    #[serde(default)]
    pub payload: Option<ShipmentItemsPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentItemsPayload {
    #[serde(default)]
    pub item_data: Vec<ShipmentItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentItem {
    #[serde(default)]
    pub shipment_id: Option<String>,
    #[serde(rename = "SellerSKU", default)]
    pub seller_sku: Option<String>,
    #[serde(rename = "FulfillmentNetworkSKU", default)]
    pub fulfillment_network_sku: Option<String>,
    #[serde(default)]
    pub quantity_shipped: Option<i64>,
    #[serde(default)]
    pub quantity_received: Option<i64>,
    #[serde(default)]
    pub quantity_in_case: Option<i64>,
    #[serde(default)]
    pub prep_details_list: Vec<PrepDetails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrepDetails {
    #[serde(default)]
    pub prep_instruction: Option<String>,
    #[serde(default)]
    pub prep_owner: Option<String>,
}
