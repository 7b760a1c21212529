//! Business logic services
//!
//! Services wrap the calculation engine with configuration-dependent
//! validation and logging. None of them hold state.

pub mod body_composition;
pub mod export;
pub mod goals;
pub mod nutrition;
pub mod profile;

pub use body_composition::BodyCompositionService;
pub use export::ExportService;
pub use goals::GoalsService;
pub use nutrition::NutritionService;
pub use profile::ProfileService;
