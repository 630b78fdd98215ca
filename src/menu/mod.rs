pub mod context;
pub mod materialize;
pub mod node;
pub mod topbar;
pub mod user_menu;

pub use context::{MenuContext, PortalUser};
pub use node::RenderNode;
