//! API service implementations.
//!
//! Each service groups related operations:
//!
//! - [`ProductsService`] - Product details, searches and smart match
//! - [`LinksService`] - Affiliate link generation
//! - [`CategoriesService`] - Categories and the category cache
//! - [`OrdersService`] - Affiliate order reports

mod categories;
mod links;
mod orders;
mod products;

pub use categories::CategoriesService;
pub use links::LinksService;
pub use orders::{OrderListQuery, OrdersService, ORDER_TIME_FORMAT};
pub use products::{ProductDetailsQuery, ProductSearchQuery, ProductsService, SmartMatchQuery};
