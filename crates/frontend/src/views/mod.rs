mod auth;
mod order_detail;
mod orders;

pub use auth::{LoginView, SignupView};
pub use order_detail::OrderDetailView;
pub use orders::OrdersView;
