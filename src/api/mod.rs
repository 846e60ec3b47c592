//! API service modules for RevenueCat endpoints.
//!
//! Each service provides methods for one resource family. Project, app,
//! offering and product calls go to the v2 API; subscriber calls go to v1.

mod apps;
mod offerings;
mod products;
mod projects;
mod subscribers;

pub use apps::AppsService;
pub use offerings::OfferingsService;
pub use products::ProductsService;
pub use projects::ProjectsService;
pub use subscribers::SubscribersService;
