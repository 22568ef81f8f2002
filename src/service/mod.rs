//! Data access per table: one unit struct of associated functions per entity.

mod offers;
mod orders;
mod users;
pub use offers::OfferService;
pub use orders::OrderService;
pub use users::UserService;
