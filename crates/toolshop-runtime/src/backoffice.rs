use crate::config::Config;
use crate::seed;
use toolshop_engine::{Confirm, ControllerOptions, DashboardSummary, EntityListController};
use toolshop_types::{Customer, Order, Product};
use tracing::info;

/// The three admin pages, each with its own isolated controller
pub struct Backoffice<C: Confirm> {
    products: EntityListController<Product, C>,
    customers: EntityListController<Customer, C>,
    orders: EntityListController<Order, C>,
}

impl<C: Confirm + Clone> Backoffice<C> {
    /// Build from configuration, seeding sample records unless disabled
    pub fn from_config(config: &Config, confirm: C) -> Self {
        let backoffice = if config.seed_sample_data {
            Self::with_records(
                seed::products(),
                seed::customers(),
                seed::orders(),
                config.controller,
                confirm,
            )
        } else {
            Self::with_records(Vec::new(), Vec::new(), Vec::new(), config.controller, confirm)
        };

        info!(
            products = backoffice.products.len(),
            customers = backoffice.customers.len(),
            orders = backoffice.orders.len(),
            "back office ready"
        );
        backoffice
    }

    pub fn with_records(
        products: Vec<Product>,
        customers: Vec<Customer>,
        orders: Vec<Order>,
        options: ControllerOptions,
        confirm: C,
    ) -> Self {
        Self {
            products: EntityListController::new(products, confirm.clone()).with_options(options),
            customers: EntityListController::new(customers, confirm.clone())
                .with_options(options),
            orders: EntityListController::new(orders, confirm).with_options(options),
        }
    }
}

impl<C: Confirm> Backoffice<C> {
    pub fn products(&self) -> &EntityListController<Product, C> {
        &self.products
    }

    pub fn products_mut(&mut self) -> &mut EntityListController<Product, C> {
        &mut self.products
    }

    pub fn customers(&self) -> &EntityListController<Customer, C> {
        &self.customers
    }

    pub fn customers_mut(&mut self) -> &mut EntityListController<Customer, C> {
        &mut self.customers
    }

    pub fn orders(&self) -> &EntityListController<Order, C> {
        &self.orders
    }

    pub fn orders_mut(&mut self) -> &mut EntityListController<Order, C> {
        &mut self.orders
    }

    pub fn dashboard(&self) -> DashboardSummary {
        DashboardSummary::compute(
            self.products.records(),
            self.customers.records(),
            self.orders.records(),
        )
    }
}
