use parking_lot::RwLock;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::domains::cart::models::{CartLine, CartTotals};
use crate::domains::menu::models::MenuItem;

// 장바구니 저장소 (로컬 상태)
// Cart store (local client-side state)
//
// 역할: 프론트엔드의 cart store (reducer) 같은 것
// 합계는 저장하지 않고 읽을 때마다 줄 목록에서 파생시킨다.
// 네트워크는 건드리지 않는다 - 서버 동기화는 CartService 몫.
#[derive(Clone)]
pub struct CartStore {
    lines: Arc<RwLock<Vec<CartLine>>>,
}

impl CartStore {
    pub fn new() -> Self {
        Self {
            lines: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// 항목 추가 (이미 담긴 항목이면 수량 합산)
    /// Add an item (merges quantity when already in the cart)
    pub fn add_line(&self, item: &MenuItem, quantity: u32) {
        if quantity == 0 {
            return;
        }

        let mut lines = self.lines.write();
        if let Some(line) = lines.iter_mut().find(|line| line.item_id == item.id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            lines.push(CartLine {
                item_id: item.id,
                name: item.name.clone(),
                unit_price: item.price,
                quantity,
            });
        }
    }

    /// 수량 변경 (0이면 줄 제거)
    /// Set the quantity (0 removes the line)
    pub fn set_quantity(&self, item_id: u64, quantity: u32) {
        let mut lines = self.lines.write();

        if quantity == 0 {
            lines.retain(|line| line.item_id != item_id);
            return;
        }

        if let Some(line) = lines.iter_mut().find(|line| line.item_id == item_id) {
            line.quantity = quantity;
        }
    }

    /// 항목 제거
    /// Remove a line
    pub fn remove_line(&self, item_id: u64) {
        self.lines.write().retain(|line| line.item_id != item_id);
    }

    /// 장바구니 비우기 (주문 완료 후 등)
    /// Empty the cart
    pub fn clear(&self) {
        self.lines.write().clear();
    }

    /// 현재 줄 목록 (스냅샷)
    /// Current lines (snapshot)
    pub fn lines(&self) -> Vec<CartLine> {
        self.lines.read().clone()
    }

    /// 파생 합계 (읽을 때 계산)
    /// Derived totals (computed on read)
    pub fn totals(&self) -> CartTotals {
        let lines = self.lines.read();
        let item_count = lines.iter().map(|line| line.quantity).sum();
        let subtotal: Decimal = lines.iter().map(|line| line.line_total()).sum();

        CartTotals {
            item_count,
            subtotal,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.read().is_empty()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu_item(id: u64, name: &str, price: f64) -> MenuItem {
        MenuItem {
            id,
            category_id: 1,
            name: name.to_string(),
            description: None,
            price: Decimal::from_f64_retain(price).unwrap(),
            available: true,
        }
    }

    #[test]
    fn test_totals_derived_from_lines() {
        let store = CartStore::new();
        store.add_line(&menu_item(1, "불고기 버거", 8.50), 2);
        store.add_line(&menu_item(2, "감자튀김", 3.25), 1);

        let totals = store.totals();
        assert_eq!(totals.item_count, 3);
        // 8.50 * 2 + 3.25 = 20.25
        assert_eq!(totals.subtotal, Decimal::from_f64_retain(20.25).unwrap());
    }

    #[test]
    fn test_add_merges_existing_line() {
        let store = CartStore::new();
        store.add_line(&menu_item(1, "불고기 버거", 8.50), 1);
        store.add_line(&menu_item(1, "불고기 버거", 8.50), 2);

        let lines = store.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 3);
    }

    #[test]
    fn test_add_zero_quantity_is_ignored() {
        let store = CartStore::new();
        store.add_line(&menu_item(1, "불고기 버거", 8.50), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let store = CartStore::new();
        store.add_line(&menu_item(1, "불고기 버거", 8.50), 2);

        store.set_quantity(1, 0);
        assert!(store.is_empty());
        assert_eq!(store.totals().subtotal, Decimal::ZERO);
    }

    #[test]
    fn test_set_quantity_updates_line() {
        let store = CartStore::new();
        store.add_line(&menu_item(1, "불고기 버거", 8.50), 2);

        store.set_quantity(1, 5);
        assert_eq!(store.lines()[0].quantity, 5);
        assert_eq!(store.totals().item_count, 5);
    }

    #[test]
    fn test_remove_and_clear() {
        let store = CartStore::new();
        store.add_line(&menu_item(1, "불고기 버거", 8.50), 1);
        store.add_line(&menu_item(2, "감자튀김", 3.25), 1);

        store.remove_line(1);
        assert_eq!(store.lines().len(), 1);

        store.clear();
        assert!(store.is_empty());
    }
}
