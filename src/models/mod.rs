pub mod card;
pub mod deck;
pub mod response;
pub mod suit;

pub use card::*;
pub use deck::*;
pub use response::*;
pub use suit::*;
