mod config;
mod events;
mod graph_view;

pub use config::GraphViewConfig;
pub use events::{GraphEvent, SubscriptionId};
pub use graph_view::GraphView;
