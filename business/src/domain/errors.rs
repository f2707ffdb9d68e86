/// Validation errors raised by domain constructors.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("user.first_name_empty")]
    UserFirstNameEmpty,
    #[error("user.email_empty")]
    UserEmailEmpty,
    #[error("user.password_empty")]
    UserPasswordEmpty,
    #[error("category.name_empty")]
    CategoryNameEmpty,
    #[error("product.name_empty")]
    ProductNameEmpty,
    #[error("product.sku_empty")]
    ProductSkuEmpty,
    #[error("product.price_negative")]
    ProductPriceNegative,
    #[error("product.stock_negative")]
    ProductStockNegative,
    #[error("order.code_empty")]
    OrderCodeEmpty,
    #[error("order.total_negative")]
    OrderTotalNegative,
    #[error("order_item.quantity_not_positive")]
    OrderItemQuantityNotPositive,
    #[error("order_item.price_negative")]
    OrderItemPriceNegative,
}
