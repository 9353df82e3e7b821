//! Row conversions from SP-API records to destination rows.
//!
//! One pure mapping per source kind, element-wise so input order is
//! preserved. Absent fields become `""` or `0` through the cell
//! constructors; an explicit `0` quantity survives as `0`.

use fba_sync_core::{Cell, Row, ToRow};

use crate::spapi::types::{InventorySummary, Shipment, ShipmentItem};

impl ToRow for InventorySummary {
    fn to_row(&self) -> Row {
        let details = self.inventory_details.as_ref();
        let reserved = details.and_then(|d| d.reserved_quantity.as_ref());
        let future = details.and_then(|d| d.future_supply_quantity.as_ref());

        Row::new(vec![
            Cell::text(self.product_name.clone()),
            Cell::text(self.asin.clone()),
            Cell::text(self.fn_sku.clone()),
            Cell::text(self.seller_sku.clone()),
            Cell::count(details.and_then(|d| d.fulfillable_quantity)),
            Cell::count(details.and_then(|d| d.inbound_working_quantity)),
            Cell::count(details.and_then(|d| d.inbound_shipped_quantity)),
            Cell::count(details.and_then(|d| d.inbound_receiving_quantity)),
            Cell::count(reserved.and_then(|r| r.total_reserved_quantity)),
            Cell::count(reserved.and_then(|r| r.pending_customer_order_quantity)),
            Cell::count(reserved.and_then(|r| r.pending_transshipment_quantity)),
            Cell::count(reserved.and_then(|r| r.fc_processing_quantity)),
            Cell::count(future.and_then(|f| f.reserved_future_supply_quantity)),
            Cell::count(future.and_then(|f| f.future_supply_buyable_quantity)),
            Cell::count(self.total_quantity),
        ])
    }
}

impl ToRow for Shipment {
    fn to_row(&self) -> Row {
        let from = self.ship_from_address.as_ref();

        Row::new(vec![
            Cell::text(self.shipment_id.clone()),
            Cell::text(self.shipment_name.clone()),
            Cell::text(from.and_then(|a| a.name.clone())),
            Cell::text(from.and_then(|a| a.address_line1.clone())),
            Cell::text(from.and_then(|a| a.city.clone())),
            Cell::text(from.and_then(|a| a.country_code.clone())),
            Cell::text(from.and_then(|a| a.postal_code.clone())),
            Cell::text(self.destination_fulfillment_center_id.clone()),
            Cell::text(self.shipment_status.clone()),
            Cell::text(self.label_prep_type.clone()),
            Cell::yes_no(self.are_cases_required),
        ])
    }
}

impl ToRow for ShipmentItem {
    fn to_row(&self) -> Row {
        let prep = self.prep_details_list.first();

        Row::new(vec![
            Cell::text(self.shipment_id.clone()),
            Cell::text(self.seller_sku.clone()),
            Cell::text(self.fulfillment_network_sku.clone()),
            Cell::count(self.quantity_shipped),
            Cell::count(self.quantity_received),
            Cell::count(self.quantity_in_case),
            Cell::text(prep.and_then(|p| p.prep_instruction.clone())),
            Cell::text(prep.and_then(|p| p.prep_owner.clone())),
        ])
    }
}
