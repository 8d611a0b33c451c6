use serde::{Deserialize, Serialize};

use frostmart_core::{ProductId, SupplierId};

/// One line of a shopping cart.
///
/// Exclusively owned by the cart store; the reconciliation machinery in this
/// crate never touches lines, it only triggers the store's merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub supplier_id: SupplierId,
    pub quantity: u32,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price: u64,
}

impl CartLine {
    /// Line total in smallest currency unit.
    pub fn total_price(&self) -> u64 {
        self.unit_price.saturating_mul(u64::from(self.quantity))
    }
}
