// ============================================================================
// ROUTER MODULE - Routing del lado cliente (History API)
// ============================================================================

pub mod history;
pub mod navigator;
pub mod route;

pub use history::{BrowserHistory, History, MemoryHistory};
pub use navigator::{Navigator, WeakNavigator};
pub use route::{Route, RouteMatch, RouteTable};
