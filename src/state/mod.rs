//! Client-side view state: load lifecycles, seller selection and tables.

pub mod fetch_state;
pub mod selection;
pub mod table;
pub mod widget;

pub use fetch_state::FetchState;
pub use selection::{SelectionContext, SelectionError};
pub use table::{PaginatedTable, TableConfig};
pub use widget::{BoundWidget, Completion, FetchBoundWidget, FetchJob, Phase, Ticket};
