// src/views/settings.rs

use axum::response::Html;

use crate::{
    models::settings::LandlordSettings,
    views::layout::{escape_opt, page},
};

pub fn settings_form(s: &LandlordSettings) -> Html<String> {
    let field = |name: &str, label: &str, value: Option<&str>| {
        format!(
            r#"<label>{label}<input name="{name}" value="{value}"></label>"#,
            value = escape_opt(value),
        )
    };

    let body = format!(
        r#"<h1>Thông tin chủ trọ</h1>
<form method="post" action="/settings">
{owner}
{phone}
{address}
{bank}
{account}
<button type="submit">Lưu</button>
</form>"#,
        owner = field("owner_name", "Chủ trọ", s.owner_name.as_deref()),
        phone = field("phone", "Điện thoại", s.phone.as_deref()),
        address = field("address", "Địa chỉ", s.address.as_deref()),
        bank = field("bank_name", "Ngân hàng", s.bank_name.as_deref()),
        account = field("bank_account", "Số tài khoản", s.bank_account.as_deref()),
    );

    page("Cài đặt", &body)
}
