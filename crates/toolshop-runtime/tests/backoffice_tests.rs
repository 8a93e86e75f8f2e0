use rust_decimal_macros::dec;
use toolshop_engine::{AlwaysConfirm, DeleteOutcome, IdStrategy, SubmitOutcome};
use toolshop_runtime::{Backoffice, Config};
use toolshop_types::{EntityId, ProductDraft};

#[test]
fn test_seeded_backoffice_dashboard() {
    let backoffice = Backoffice::from_config(&Config::default(), AlwaysConfirm);

    assert_eq!(backoffice.products().len(), 4);
    assert_eq!(backoffice.customers().len(), 2);
    assert_eq!(backoffice.orders().len(), 2);

    let summary = backoffice.dashboard();
    assert_eq!(summary.total_sales, dec!(2699.96));
    assert_eq!(summary.pending_orders, 1);
    let low: Vec<&str> = summary.low_stock.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(low, vec!["Serra Circular Industrial", "Chave de Fenda Phillips"]);
}

#[test]
fn test_unseeded_backoffice_starts_empty() {
    let config = Config {
        seed_sample_data: false,
        ..Config::default()
    };
    let backoffice = Backoffice::from_config(&config, AlwaysConfirm);

    assert!(backoffice.products().is_empty());
    assert!(backoffice.customers().is_empty());
    assert!(backoffice.orders().is_empty());
}

#[test]
fn test_controllers_are_isolated() {
    let mut backoffice = Backoffice::from_config(&Config::default(), AlwaysConfirm);

    assert_eq!(
        backoffice.customers_mut().delete(EntityId::new(1)),
        DeleteOutcome::Deleted
    );

    assert_eq!(backoffice.customers().len(), 1);
    assert_eq!(backoffice.orders().len(), 2);
    assert!(backoffice.orders().find(EntityId::new(1)).is_some());
}

#[test]
fn test_config_options_reach_every_controller() {
    let mut config = Config::default();
    config.controller.id_strategy = IdStrategy::Monotonic;
    let mut backoffice = Backoffice::from_config(&config, AlwaysConfirm);

    backoffice.products_mut().delete(EntityId::new(4));
    backoffice.products_mut().begin_create();
    let outcome = backoffice
        .products_mut()
        .submit(ProductDraft {
            name: "Trena 5m".to_string(),
            ..ProductDraft::default()
        })
        .unwrap();

    assert_eq!(outcome, SubmitOutcome::Created(EntityId::new(5)));
    assert_eq!(
        backoffice.customers().options().id_strategy,
        IdStrategy::Monotonic
    );
}
