// src/views/layout.rs

use axum::response::Html;
use rust_decimal::Decimal;

/// Escapa texto vindo do usuário antes de ir para o HTML (`& < > " '`).
pub fn escape(raw: &str) -> String {
    quick_xml::escape::escape(raw).into_owned()
}

pub fn escape_opt(raw: Option<&str>) -> String {
    raw.map(escape).unwrap_or_default()
}

// Separador de milhar vi-VN: "."
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// 4020000 -> "4.020.000"
pub fn fmt_number(n: i64) -> String {
    let grouped = group_thousands(&n.unsigned_abs().to_string());
    if n < 0 { format!("-{grouped}") } else { grouped }
}

/// 4020000 -> "4.020.000 đ"
pub fn fmt_vnd(amount: i32) -> String {
    format!("{} đ", fmt_number(i64::from(amount)))
}

/// Consumo com vírgula decimal: 0.20 -> "0,2", 50 -> "50"
pub fn fmt_decimal(value: Decimal) -> String {
    let normalized = value.normalize().to_string();
    match normalized.split_once('.') {
        Some((int, frac)) => {
            let int: i64 = int.parse().unwrap_or_default();
            let sign = if value.is_sign_negative() && int == 0 { "-" } else { "" };
            format!("{sign}{},{frac}", fmt_number(int))
        }
        None => normalized.parse::<i64>().map(fmt_number).unwrap_or(normalized),
    }
}

/// Valor de <input type="number">: ponto decimal, sem zeros à toa
pub fn input_number(value: f64) -> String {
    value.to_string()
}

pub fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!doctype html>
<html lang="vi">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/public/style.css">
</head>
<body>
<nav><a href="/">Phòng</a> · <a href="/rooms/new">Thêm phòng</a> · <a href="/settings">Cài đặt</a></nav>
<main>
{body}
</main>
</body>
</html>"#,
        title = escape(title),
        body = body,
    ))
}
