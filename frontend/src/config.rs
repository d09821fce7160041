use shared::config::SignupConfig;
use web_sys::window;

pub const SIGNUP_CONFIG_ELEMENT_ID: &str = "signup-config";

/// Reads `<script type="application/json" id="signup-config">` from the host
/// page. Missing element means defaults.
pub fn load_signup_config() -> SignupConfig {
    let raw = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(SIGNUP_CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .unwrap_or_default();

    let config = SignupConfig::from_json_or_default(&raw);
    log::debug!("Signup config: {:?}", config);
    config
}
