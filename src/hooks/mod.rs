pub mod store_context;

pub use store_context::{
    use_banner_store, use_shopping_list_store, use_stores, use_user_store, Stores, StoresProvider,
};
