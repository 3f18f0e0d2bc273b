pub mod domain;
pub mod form;
pub mod ports;
pub mod session;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

pub use domain::{LessonPlan, PlanFields};
pub use form::{FormError, PlanField, PlanFormController};
pub use ports::{KeyValueStore, PlanGenerationService, PortError, PortResult};
pub use session::SessionGate;
pub use store::PlanStore;
