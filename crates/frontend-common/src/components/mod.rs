mod spinner;
mod status_badge;

pub use spinner::LoadingSpinner as Spinner;
pub use status_badge::StatusBadge;
