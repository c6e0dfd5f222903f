pub mod banner_store;
pub mod reactive;
pub mod shopping_list_store;
pub mod user_store;

pub use banner_store::BannerStore;
pub use reactive::{ReactiveCell, Subscription};
pub use shopping_list_store::ShoppingListStore;
pub use user_store::{UserStore, PROFILE_SETTLE_CEILING_MS};
