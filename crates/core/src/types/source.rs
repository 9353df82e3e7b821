//! Source kind enumeration.

/// Which endpoint, record shape, and stop policy a fetch session runs
/// against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// FBA inventory summaries.
    Inventory,
    /// Inbound shipments.
    Shipments,
    /// Inbound shipment items.
    ShipmentItems,
}

impl SourceKind {
    /// Every source kind, in the order the tables were introduced.
    pub const ALL: [Self; 3] = [Self::Inventory, Self::Shipments, Self::ShipmentItems];

    /// Destination table name.
    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::Inventory => "inventory",
            Self::Shipments => "shipments",
            Self::ShipmentItems => "shipments_item",
        }
    }

    /// Stable identifier used in cursor-store keys and CLI arguments.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inventory => "inventory",
            Self::Shipments => "shipments",
            Self::ShipmentItems => "shipment-items",
        }
    }

    /// Destination column headers, in order.
    ///
    /// Conversions must produce rows of exactly this arity and order.
    #[must_use]
    pub const fn columns(self) -> &'static [&'static str] {
        match self {
            Self::Inventory => &[
                "Product Name",
                "asin",
                "fnSku",
                "sellerSku",
                "fulfillableQuantity",
                "inboundWorkingQuantity",
                "inboundShippedQuantity",
                "inboundReceivingQuantity",
                "totalReservedQuantity",
                "pendingCustomerOrderQuantity",
                "pendingTransshipmentQuantity",
                "fcProcessingQuantity",
                "reservedFutureSupplyQuantity",
                "futureSupplyBuyableQuantity",
                "totalQuantity",
            ],
            Self::Shipments => &[
                "Shipment Id",
                "Shipment Name",
                "Ship From Name",
                "Ship From Address Line1",
                "Ship From City",
                "Ship From Country Code",
                "Ship From Postal Code",
                "Destination Fulfillment Center Id",
                "Shipment Status",
                "Label Prep Type",
                "Are Cases Required",
            ],
            Self::ShipmentItems => &[
                "Shipment Id",
                "Seller SKU",
                "Fulfillment Network SKU",
                "Quantity Shipped",
                "Quantity Received",
                "Quantity In Case",
                "Prep Instruction",
                "Prep Owner",
            ],
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inventory" => Ok(Self::Inventory),
            "shipments" => Ok(Self::Shipments),
            "shipment-items" => Ok(Self::ShipmentItems),
            _ => Err(format!("invalid source kind: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_arity() {
        assert_eq!(SourceKind::Inventory.columns().len(), 15);
        assert_eq!(SourceKind::Shipments.columns().len(), 11);
        assert_eq!(SourceKind::ShipmentItems.columns().len(), 8);
    }

    #[test]
    fn test_round_trips_through_str() {
        for kind in SourceKind::ALL {
            assert_eq!(kind.as_str().parse::<SourceKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_rejects_unknown_kind() {
        assert!("orders".parse::<SourceKind>().is_err());
    }

    #[test]
    fn test_table_names() {
        assert_eq!(SourceKind::Inventory.table(), "inventory");
        assert_eq!(SourceKind::Shipments.table(), "shipments");
        assert_eq!(SourceKind::ShipmentItems.table(), "shipments_item");
    }
}
