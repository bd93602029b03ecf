//! Vehicle Lists Module
//!
//! HTTP surface over the vehicle lists and their records.
//!
//! # Module Structure
//!
//! ```text
//! vehicles/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Response bodies
//! └── handlers.rs   - List and record handlers
//! ```

pub mod handlers;
pub mod types;

pub use handlers::{create_record, delete_record, get_records, list_vehicle_lists, method_not_allowed};
pub use types::{ListMetadata, RecordsResponse, VehicleListsResponse};
