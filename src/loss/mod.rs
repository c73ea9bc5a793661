pub mod objective;
pub mod mse;
pub mod huber;
pub mod loss_type;

pub use objective::Objective;
pub use mse::MseCost;
pub use huber::HuberCost;
pub use loss_type::LossType;
