use uuid::Uuid;

use crate::domain::errors::ValidationError;

/// Order lifecycle states persisted as plain strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Shipped => "shipped",
            Self::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub code: String,
    pub status: OrderStatus,
    pub total_cents: i64,
}

impl Order {
    pub fn new(user_id: String, code: String, total_cents: i64) -> Result<Self, ValidationError> {
        if code.trim().is_empty() {
            return Err(ValidationError::OrderCodeEmpty);
        }
        if total_cents < 0 {
            return Err(ValidationError::OrderTotalNegative);
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            code,
            status: OrderStatus::Pending,
            total_cents,
        })
    }
}

#[derive(Debug, Clone)]
pub struct OrderItem {
    pub id: String,
    pub order_id: String,
    pub product_id: String,
    pub quantity: i32,
    pub price_cents: i64,
}

impl OrderItem {
    pub fn new(
        order_id: String,
        product_id: String,
        quantity: i32,
        price_cents: i64,
    ) -> Result<Self, ValidationError> {
        if quantity <= 0 {
            return Err(ValidationError::OrderItemQuantityNotPositive);
        }
        if price_cents < 0 {
            return Err(ValidationError::OrderItemPriceNegative);
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            order_id,
            product_id,
            quantity,
            price_cents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_order_in_pending_state() {
        let order = Order::new("user-1".to_string(), "GTK-0001".to_string(), 120_000_00).unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.code, "GTK-0001");
    }

    #[test]
    fn should_reject_order_when_code_empty() {
        let result = Order::new("user-1".to_string(), "".to_string(), 0);

        assert_eq!(result.unwrap_err(), ValidationError::OrderCodeEmpty);
    }

    #[test]
    fn should_reject_order_when_total_negative() {
        let result = Order::new("user-1".to_string(), "GTK-0002".to_string(), -10);

        assert_eq!(result.unwrap_err(), ValidationError::OrderTotalNegative);
    }

    #[test]
    fn should_create_order_item_when_quantity_positive() {
        let item = OrderItem::new(
            "order-1".to_string(),
            "product-1".to_string(),
            2,
            65_000_00,
        )
        .unwrap();

        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn should_reject_order_item_when_quantity_zero() {
        let result = OrderItem::new("order-1".to_string(), "product-1".to_string(), 0, 100);

        assert_eq!(
            result.unwrap_err(),
            ValidationError::OrderItemQuantityNotPositive
        );
    }

    #[test]
    fn should_reject_order_item_when_price_negative() {
        let result = OrderItem::new("order-1".to_string(), "product-1".to_string(), 1, -100);

        assert_eq!(result.unwrap_err(), ValidationError::OrderItemPriceNegative);
    }

    #[test]
    fn should_map_statuses_to_persisted_strings() {
        assert_eq!(OrderStatus::Pending.as_str(), "pending");
        assert_eq!(OrderStatus::Paid.as_str(), "paid");
        assert_eq!(OrderStatus::Shipped.as_str(), "shipped");
        assert_eq!(OrderStatus::Cancelled.as_str(), "cancelled");
    }
}
