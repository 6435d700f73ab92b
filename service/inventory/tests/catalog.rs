mod common;

use std::sync::Arc;

use common::{day, MemRepo};
use domain_inventory::{
    exception::InventoryException,
    model::{
        entity::{CatalogEntryInput, SparePartCatalogEntry, Supplier, SupplierInput},
        vo::CatalogCategory,
    },
    service::{PartsCatalogService, SupplierService},
};
use domain_servicing::model::vo::FixedClock;
use service_inventory::{PartsCatalogServiceImpl, SupplierServiceImpl};

fn pump() -> CatalogEntryInput {
    CatalogEntryInput {
        part_number: Some("481236018558".to_string()),
        part_name: Some("Drain pump".to_string()),
        category: Some("washing-machine".to_string()),
        manufacturer: Some("Whirlpool".to_string()),
        compatible_models: vec!["AWO/D 6105".to_string()],
        min_stock_level: Some(2),
        ..Default::default()
    }
}

fn supplier(name: &str, priority: i64) -> SupplierInput {
    SupplierInput {
        name: Some(name.to_string()),
        company_name: Some(format!("{name} d.o.o.")),
        email: Some(format!("orders@{}.example", name.to_lowercase())),
        priority: Some(priority),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_catalog_part_numbers_are_unique() {
    let repo: Arc<MemRepo<SparePartCatalogEntry>> = MemRepo::new();
    let catalog = PartsCatalogServiceImpl::builder()
        .catalog_repo(repo.clone())
        .clock(Arc::new(FixedClock::on(day(2024, 5, 20))))
        .build();

    let entry = catalog.add_entry(pump()).await.unwrap();
    assert_eq!(entry.category, CatalogCategory::WashingMachine);
    assert!(entry.is_below_minimum());

    let err = catalog.add_entry(pump()).await.unwrap_err();
    let InventoryException::Validation(errors) = err else {
        panic!("expected validation errors, got {err:?}");
    };
    assert!(errors.has("partNumber"));
    assert_eq!(repo.rows().len(), 1);

    let found = catalog
        .find_by_part_number(" 481236018558 ")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, entry.id);
    assert!(catalog.find_by_part_number("000").await.unwrap().is_none());
}

#[tokio::test]
async fn test_active_suppliers_by_priority() {
    let repo: Arc<MemRepo<Supplier>> = MemRepo::new();
    let suppliers = SupplierServiceImpl::builder()
        .supplier_repo(repo.clone())
        .build();

    suppliers.register_supplier(supplier("Frigo", 3)).await.unwrap();
    let first = suppliers.register_supplier(supplier("Germaxx", 1)).await.unwrap();
    let err = suppliers
        .register_supplier(supplier("Quick", 11))
        .await
        .unwrap_err();
    assert!(matches!(err, InventoryException::Validation(ref e) if e.has("priority")));

    let active = suppliers.list_active().await.unwrap();
    let names: Vec<&str> = active.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Germaxx", "Frigo"]);
    assert_eq!(active[0].id, first.id);
}
