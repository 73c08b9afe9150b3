pub mod menu_category;
pub mod menu_item;
pub mod money;
pub mod notice;
pub mod payment_method;
pub mod user;
