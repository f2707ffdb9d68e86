//! Development fixtures for the `db:seed` command.
//!
//! Each table is seeded only when it is empty, so the command can be re-run
//! without piling up duplicates. Fixtures go through the domain constructors
//! and therefore carry real ids, slugs and password digests.

use sqlx::AnyPool;
use thiserror::Error;

use business::domain::category::model::Category;
use business::domain::errors::ValidationError;
use business::domain::product::model::{NewProductProps, Product};
use business::domain::user::model::{NewUserProps, User};

use crate::db::{DriverKind, bind_markers};

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("seed.database_error")]
    Database(#[from] sqlx::Error),
    #[error("seed.invalid_fixture")]
    InvalidFixture(#[from] ValidationError),
}

/// Insert the development fixtures: one admin account plus a small catalog.
pub async fn run(pool: &AnyPool, driver: DriverKind) -> Result<(), SeedError> {
    seed_users(pool, driver).await?;
    seed_catalog(pool, driver).await?;

    tracing::info!("database seeded successfully");
    Ok(())
}

async fn seed_users(pool: &AnyPool, driver: DriverKind) -> Result<(), SeedError> {
    if table_count(pool, "users").await? > 0 {
        tracing::info!(table = "users", "seed skipped, table not empty");
        return Ok(());
    }

    let admin = admin_user()?;
    sqlx::query(&insert_user_sql(driver))
        .bind(admin.id)
        .bind(admin.first_name)
        .bind(admin.last_name)
        .bind(admin.email)
        .bind(admin.password_digest)
        .bind(admin.is_admin)
        .execute(pool)
        .await?;

    Ok(())
}

async fn seed_catalog(pool: &AnyPool, driver: DriverKind) -> Result<(), SeedError> {
    if table_count(pool, "categories").await? > 0 {
        tracing::info!(table = "categories", "seed skipped, table not empty");
        return Ok(());
    }

    let mut tx = pool.begin().await?;
    for (category, products) in catalog()? {
        sqlx::query(&insert_category_sql(driver))
            .bind(category.id)
            .bind(category.name)
            .bind(category.slug)
            .execute(&mut *tx)
            .await?;

        for product in products {
            sqlx::query(&insert_product_sql(driver))
                .bind(product.id)
                .bind(product.category_id)
                .bind(product.sku)
                .bind(product.name)
                .bind(product.slug)
                .bind(product.price_cents)
                .bind(product.stock)
                .bind(product.description)
                .execute(&mut *tx)
                .await?;
        }
    }
    tx.commit().await?;

    Ok(())
}

async fn table_count(pool: &AnyPool, table: &str) -> Result<i64, SeedError> {
    let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// The bootstrap admin account. The password is a local-development fixture.
fn admin_user() -> Result<User, ValidationError> {
    User::new(NewUserProps {
        first_name: "Gotoko".to_string(),
        last_name: "Admin".to_string(),
        email: "admin@gotoko.local".to_string(),
        password: "password".to_string(),
        is_admin: true,
    })
}

/// Three categories with two products each.
fn catalog() -> Result<Vec<(Category, Vec<Product>)>, ValidationError> {
    let fixtures = [
        (
            "Beverages",
            [
                ("BEV-001", "Kopi Gayo 250g", 65_000_00, 40),
                ("BEV-002", "Teh Melati 100g", 18_500_00, 60),
            ],
        ),
        (
            "Snacks",
            [
                ("SNK-001", "Keripik Singkong 200g", 12_000_00, 120),
                ("SNK-002", "Kacang Mete Panggang 150g", 48_000_00, 35),
            ],
        ),
        (
            "Household",
            [
                ("HSH-001", "Sabun Cuci Piring 800ml", 21_500_00, 80),
                ("HSH-002", "Tisu Dapur 2 Roll", 15_000_00, 95),
            ],
        ),
    ];

    let mut catalog = Vec::with_capacity(fixtures.len());
    for (category_name, products) in fixtures {
        let category = Category::new(category_name)?;
        let mut entries = Vec::with_capacity(products.len());
        for (sku, name, price_cents, stock) in products {
            entries.push(Product::new(NewProductProps {
                category_id: Some(category.id.clone()),
                sku: sku.to_string(),
                name: name.to_string(),
                price_cents,
                stock,
                description: None,
            })?);
        }
        catalog.push((category, entries));
    }
    Ok(catalog)
}

pub fn insert_user_sql(driver: DriverKind) -> String {
    format!(
        "INSERT INTO users (id, first_name, last_name, email, password_digest, is_admin) VALUES ({})",
        bind_markers(driver, 6)
    )
}

pub fn insert_category_sql(driver: DriverKind) -> String {
    format!(
        "INSERT INTO categories (id, name, slug) VALUES ({})",
        bind_markers(driver, 3)
    )
}

pub fn insert_product_sql(driver: DriverKind) -> String {
    format!(
        "INSERT INTO products (id, category_id, sku, name, slug, price_cents, stock, description) VALUES ({})",
        bind_markers(driver, 8)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_user_insert_per_driver() {
        assert_eq!(
            insert_user_sql(DriverKind::Postgres),
            "INSERT INTO users (id, first_name, last_name, email, password_digest, is_admin) \
             VALUES ($1, $2, $3, $4, $5, $6)"
        );
        assert_eq!(
            insert_user_sql(DriverKind::MySql),
            "INSERT INTO users (id, first_name, last_name, email, password_digest, is_admin) \
             VALUES (?, ?, ?, ?, ?, ?)"
        );
    }

    #[test]
    fn should_render_catalog_inserts_with_matching_arity() {
        assert_eq!(
            insert_category_sql(DriverKind::Postgres),
            "INSERT INTO categories (id, name, slug) VALUES ($1, $2, $3)"
        );
        assert_eq!(
            insert_product_sql(DriverKind::MySql),
            "INSERT INTO products (id, category_id, sku, name, slug, price_cents, stock, description) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)"
        );
    }

    #[test]
    fn should_build_admin_fixture() {
        let admin = admin_user().unwrap();

        assert!(admin.is_admin);
        assert_eq!(admin.email, "admin@gotoko.local");
        assert_eq!(admin.password_digest.len(), 64);
    }

    #[test]
    fn should_build_catalog_of_three_categories_with_two_products_each() {
        let catalog = catalog().unwrap();

        assert_eq!(catalog.len(), 3);
        for (category, products) in &catalog {
            assert_eq!(products.len(), 2);
            for product in products {
                assert_eq!(product.category_id.as_deref(), Some(category.id.as_str()));
            }
        }
    }

    #[test]
    fn should_keep_fixture_skus_unique() {
        let catalog = catalog().unwrap();
        let mut skus: Vec<String> = catalog
            .iter()
            .flat_map(|(_, products)| products.iter().map(|p| p.sku.clone()))
            .collect();
        let total = skus.len();
        skus.sort();
        skus.dedup();

        assert_eq!(skus.len(), total);
    }
}
