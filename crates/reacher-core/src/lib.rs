// reacher-core: math primitives, joint/chain model, landmark mapping, errors.

pub mod chain;
pub mod error;
pub mod landmarks;
pub mod math;

pub use chain::{Chain, Joint, solve_single_joint};
pub use error::IkError;
