pub mod cancel;
pub mod events;
pub mod timestamps;


pub use cancel::*;
pub use events::*;
pub use timestamps::*;
