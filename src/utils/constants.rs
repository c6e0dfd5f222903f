// localStorage / sessionStorage keys, prefixed to avoid collisions with
// anything else served from the same origin.

pub const STORAGE_KEY_ACCESS_TOKEN: &str = "casellese_accessToken";
pub const STORAGE_KEY_PRODUCT_DRAFT: &str = "casellese_productDraft";
pub const STORAGE_KEY_BANNER_DISMISSED: &str = "casellese_bannerDismissed";
