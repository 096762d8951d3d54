//! `shopsmart-session` — UI-layer state with explicit lifecycles.
//!
//! Everything the query engine refuses to own lives here: the current
//! session (instead of free-floating user/token globals), the retained
//! browse query (instead of re-deriving displayed products from rendered
//! output), and the shopping cart.

pub mod browse;
pub mod cart;
pub mod directory;
pub mod session;

pub use browse::BrowseState;
pub use cart::{Cart, CartLine};
pub use directory::{Role, UserAccount, UserDirectory};
pub use session::{AuthToken, Session, SessionManager};
