//! Static model registry consumed by the auto-migration step.
//!
//! Each descriptor declares the shape a table must have; the migrator
//! reconciles the live schema against it. Registration order matters:
//! referenced tables come before their referrers.

use crate::db::DriverKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Canonical 36-char UUID string key.
    Key,
    VarChar(u16),
    Text,
    Integer,
    BigInt,
    Boolean,
    Timestamp,
}

impl ColumnType {
    /// SQL type name for the given driver family.
    pub fn sql(self, driver: DriverKind) -> String {
        match (self, driver) {
            (Self::Key, _) => "varchar(36)".to_string(),
            (Self::VarChar(len), _) => format!("varchar({len})"),
            (Self::Text, _) => "text".to_string(),
            (Self::Integer, DriverKind::MySql) => "int".to_string(),
            (Self::Integer, DriverKind::Postgres) => "integer".to_string(),
            (Self::BigInt, _) => "bigint".to_string(),
            (Self::Boolean, DriverKind::MySql) => "tinyint(1)".to_string(),
            (Self::Boolean, DriverKind::Postgres) => "boolean".to_string(),
            (Self::Timestamp, DriverKind::MySql) => "datetime".to_string(),
            (Self::Timestamp, DriverKind::Postgres) => "timestamptz".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub ty: ColumnType,
    pub nullable: bool,
    pub unique: bool,
    pub primary_key: bool,
    pub default: Option<&'static str>,
    /// (table, column) this foreign key points at.
    pub references: Option<(&'static str, &'static str)>,
}

impl ColumnSpec {
    pub const fn new(name: &'static str, ty: ColumnType) -> Self {
        Self {
            name,
            ty,
            nullable: false,
            unique: false,
            primary_key: false,
            default: None,
            references: None,
        }
    }

    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub const fn default_expr(mut self, expr: &'static str) -> Self {
        self.default = Some(expr);
        self
    }

    pub const fn references(mut self, table: &'static str, column: &'static str) -> Self {
        self.references = Some((table, column));
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ModelDescriptor {
    pub table: &'static str,
    pub columns: &'static [ColumnSpec],
}

const fn key() -> ColumnSpec {
    ColumnSpec::new("id", ColumnType::Key).primary_key()
}

const fn created_at() -> ColumnSpec {
    ColumnSpec::new("created_at", ColumnType::Timestamp).default_expr("CURRENT_TIMESTAMP")
}

const fn updated_at() -> ColumnSpec {
    ColumnSpec::new("updated_at", ColumnType::Timestamp).default_expr("CURRENT_TIMESTAMP")
}

const fn deleted_at() -> ColumnSpec {
    ColumnSpec::new("deleted_at", ColumnType::Timestamp).nullable()
}

static USERS: &[ColumnSpec] = &[
    key(),
    ColumnSpec::new("first_name", ColumnType::VarChar(100)),
    ColumnSpec::new("last_name", ColumnType::VarChar(100)),
    ColumnSpec::new("email", ColumnType::VarChar(255)).unique(),
    ColumnSpec::new("password_digest", ColumnType::VarChar(64)),
    ColumnSpec::new("is_admin", ColumnType::Boolean).default_expr("FALSE"),
    created_at(),
    updated_at(),
    deleted_at(),
];

static CATEGORIES: &[ColumnSpec] = &[
    key(),
    ColumnSpec::new("name", ColumnType::VarChar(100)),
    ColumnSpec::new("slug", ColumnType::VarChar(100)).unique(),
    created_at(),
    updated_at(),
    deleted_at(),
];

static PRODUCTS: &[ColumnSpec] = &[
    key(),
    ColumnSpec::new("category_id", ColumnType::Key)
        .nullable()
        .references("categories", "id"),
    ColumnSpec::new("sku", ColumnType::VarChar(64)).unique(),
    ColumnSpec::new("name", ColumnType::VarChar(255)),
    ColumnSpec::new("slug", ColumnType::VarChar(255)).unique(),
    ColumnSpec::new("price_cents", ColumnType::BigInt),
    ColumnSpec::new("stock", ColumnType::Integer).default_expr("0"),
    ColumnSpec::new("description", ColumnType::Text).nullable(),
    created_at(),
    updated_at(),
    deleted_at(),
];

static ORDERS: &[ColumnSpec] = &[
    key(),
    ColumnSpec::new("user_id", ColumnType::Key).references("users", "id"),
    ColumnSpec::new("code", ColumnType::VarChar(32)).unique(),
    ColumnSpec::new("status", ColumnType::VarChar(20)).default_expr("'pending'"),
    ColumnSpec::new("total_cents", ColumnType::BigInt),
    created_at(),
    updated_at(),
    deleted_at(),
];

static ORDER_ITEMS: &[ColumnSpec] = &[
    key(),
    ColumnSpec::new("order_id", ColumnType::Key).references("orders", "id"),
    ColumnSpec::new("product_id", ColumnType::Key).references("products", "id"),
    ColumnSpec::new("quantity", ColumnType::Integer),
    ColumnSpec::new("price_cents", ColumnType::BigInt),
    created_at(),
    updated_at(),
    deleted_at(),
];

static MODELS: &[ModelDescriptor] = &[
    ModelDescriptor {
        table: "users",
        columns: USERS,
    },
    ModelDescriptor {
        table: "categories",
        columns: CATEGORIES,
    },
    ModelDescriptor {
        table: "products",
        columns: PRODUCTS,
    },
    ModelDescriptor {
        table: "orders",
        columns: ORDERS,
    },
    ModelDescriptor {
        table: "order_items",
        columns: ORDER_ITEMS,
    },
];

/// The ordered model registry. Consumed only by the migration step.
pub fn registered_models() -> &'static [ModelDescriptor] {
    MODELS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_register_models_in_dependency_order() {
        let tables: Vec<&str> = registered_models().iter().map(|m| m.table).collect();

        assert_eq!(
            tables,
            vec!["users", "categories", "products", "orders", "order_items"]
        );
    }

    #[test]
    fn should_give_every_model_a_primary_key() {
        for model in registered_models() {
            let keys: Vec<&ColumnSpec> =
                model.columns.iter().filter(|c| c.primary_key).collect();
            assert_eq!(keys.len(), 1, "table {} must have one key", model.table);
            assert_eq!(keys[0].name, "id");
        }
    }

    #[test]
    fn should_point_foreign_keys_at_registered_tables() {
        let tables: Vec<&str> = registered_models().iter().map(|m| m.table).collect();

        for model in registered_models() {
            for column in model.columns {
                if let Some((ref_table, ref_column)) = column.references {
                    assert!(
                        tables.contains(&ref_table),
                        "{}.{} references unknown table {}",
                        model.table,
                        column.name,
                        ref_table
                    );
                    assert_eq!(ref_column, "id");
                }
            }
        }
    }

    #[test]
    fn should_render_types_per_driver() {
        assert_eq!(ColumnType::Boolean.sql(DriverKind::Postgres), "boolean");
        assert_eq!(ColumnType::Boolean.sql(DriverKind::MySql), "tinyint(1)");
        assert_eq!(ColumnType::Timestamp.sql(DriverKind::Postgres), "timestamptz");
        assert_eq!(ColumnType::Timestamp.sql(DriverKind::MySql), "datetime");
        assert_eq!(ColumnType::VarChar(64).sql(DriverKind::MySql), "varchar(64)");
        assert_eq!(ColumnType::Key.sql(DriverKind::Postgres), "varchar(36)");
    }

    #[test]
    fn should_default_order_status_to_the_pending_state() {
        use business::domain::order::model::OrderStatus;

        let orders = registered_models()
            .iter()
            .find(|m| m.table == "orders")
            .unwrap();
        let status = orders.columns.iter().find(|c| c.name == "status").unwrap();

        assert_eq!(OrderStatus::Pending.as_str(), "pending");
        assert_eq!(status.default, Some("'pending'"));
    }

    #[test]
    fn should_keep_timestamp_columns_on_every_model() {
        for model in registered_models() {
            for required in ["created_at", "updated_at", "deleted_at"] {
                assert!(
                    model.columns.iter().any(|c| c.name == required),
                    "table {} misses {}",
                    model.table,
                    required
                );
            }
        }
    }
}
