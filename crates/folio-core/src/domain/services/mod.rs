mod session;

pub use session::Session;
pub use session::SessionProps;
