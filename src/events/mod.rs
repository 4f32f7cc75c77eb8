pub mod phone;
pub mod touch;

pub use phone::wire_phone_mask;
pub use touch::wire_swipe;
