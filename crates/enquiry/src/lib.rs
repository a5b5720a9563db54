//! Admission enquiry form: field state, presence validation and the
//! submission state machine.

mod controller;
mod field;
mod notify;
mod sender;
mod validation;

pub use controller::*;
pub use field::*;
pub use notify::*;
pub use sender::*;
pub use validation::*;
