// @generated by glotgen. Do not edit by hand.

pub struct LocaleKeys;

#[allow(dead_code, non_upper_case_globals)]
impl LocaleKeys {
    pub const app: &'static str = "app";
    pub const greeting: &'static str = "greeting";
    pub const login_title: &'static str = "login.title";
    pub const login_button_ok: &'static str = "login.button.ok";
    pub const login_button: &'static str = "login.button";
    pub const login: &'static str = "login";
    pub const count: &'static str = "count";
    pub const r#type: &'static str = "type";
}
