// src/views/invoice.rs

use axum::response::Html;

use crate::{
    models::invoice::InvoiceView,
    views::layout::{escape, escape_opt, fmt_decimal, fmt_number, fmt_vnd, page},
};

// Formato de exibição do período: "03/2024"
pub(crate) fn period_label(yyyymm: &str) -> String {
    if yyyymm.len() == 6 {
        format!("{}/{}", &yyyymm[4..], &yyyymm[..4])
    } else {
        yyyymm.to_string()
    }
}

pub fn invoice_page(v: &InvoiceView) -> Html<String> {
    let inv = &v.recalculated.invoice;
    let f = &v.recalculated.figures;
    let t = &v.recalculated.tariff;
    let s = &v.settings;

    let tenant = v.tenant
        .as_ref()
        .map(|t| escape(&t.full_name))
        .unwrap_or_default();

    let body = format!(
        r#"<article class="invoice">
<header>
<h1>HÓA ĐƠN TIỀN PHÒNG {room} – THÁNG {label}</h1>
<p>{owner} · {owner_phone} · {address}</p>
<p>Người thuê: {tenant}</p>
</header>
<table>
<thead><tr><th>Khoản</th><th>Chi tiết</th><th>Thành tiền</th></tr></thead>
<tbody>
<tr><td>Tiền phòng</td><td></td><td>{rent}</td></tr>
<tr><td>Điện</td><td>{elec_usage} kWh × {elec_price}</td><td>{sub_elec}</td></tr>
<tr><td>Nước</td><td>{water_usage} m³ × {water_price}</td><td>{sub_water}</td></tr>
<tr><td>Internet</td><td></td><td>{internet}</td></tr>
<tr><td>Vệ sinh</td><td></td><td>{cleaning}</td></tr>
</tbody>
<tfoot><tr><th colspan="2">Tổng cộng</th><th>{total}</th></tr></tfoot>
</table>
<p>Chuyển khoản: {bank} – {account}</p>
<p class="muted">Tính lúc {computed_at}</p>
<p class="noprint"><a href="/rooms/{room_id}?yyyymm={yyyymm}">← Quay lại phòng</a></p>
</article>"#,
        room = escape(&v.room.name),
        label = period_label(&v.yyyymm),
        owner = escape_opt(s.owner_name.as_deref()),
        owner_phone = escape_opt(s.phone.as_deref()),
        address = escape_opt(s.address.as_deref()),
        tenant = tenant,
        rent = fmt_vnd(inv.rent),
        elec_usage = fmt_decimal(f.elec_usage),
        elec_price = fmt_number(i64::from(t.electricity_price)),
        sub_elec = fmt_vnd(inv.subtotal_electricity),
        water_usage = fmt_decimal(f.water_usage),
        water_price = fmt_number(i64::from(t.water_price)),
        sub_water = fmt_vnd(inv.subtotal_water),
        internet = fmt_vnd(inv.internet_fee),
        cleaning = fmt_vnd(inv.cleaning_fee),
        total = fmt_vnd(inv.total),
        bank = escape_opt(s.bank_name.as_deref()),
        account = escape_opt(s.bank_account.as_deref()),
        computed_at = inv.created_at.format("%d/%m/%Y %H:%M"),
        room_id = v.room.id,
        yyyymm = escape(&v.yyyymm),
    );

    page(&format!("Hóa đơn {} {}", v.room.name, period_label(&v.yyyymm)), &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use crate::models::{
        invoice::{Invoice, InvoiceFigures, RecalculatedInvoice},
        room::Room,
        settings::LandlordSettings,
        tariff::Tariff,
    };

    #[test]
    fn period_label_is_month_slash_year() {
        assert_eq!(period_label("202403"), "03/2024");
        assert_eq!(period_label("abc"), "abc");
    }

    #[test]
    fn renders_totals_in_vnd() {
        let view = InvoiceView {
            room: Room { id: 1, name: "P201".into(), note: None },
            tenant: None,
            settings: LandlordSettings { id: 1, owner_name: Some("Chủ <trọ>".into()), ..Default::default() },
            yyyymm: "202403".into(),
            recalculated: RecalculatedInvoice {
                invoice: Invoice {
                    id: 1,
                    room_id: 1,
                    yyyymm: "202403".into(),
                    subtotal_electricity: 225_000,
                    subtotal_water: 175_000,
                    rent: 3_500_000,
                    internet_fee: 20_000,
                    cleaning_fee: 100_000,
                    total: 4_020_000,
                    created_at: NaiveDate::from_ymd_opt(2024, 4, 1)
                        .unwrap()
                        .and_hms_opt(8, 30, 0)
                        .unwrap(),
                },
                figures: InvoiceFigures {
                    elec_usage: Decimal::from(50),
                    water_usage: Decimal::from(5),
                    subtotal_electricity: 225_000,
                    subtotal_water: 175_000,
                    rent: 3_500_000,
                    internet_fee: 20_000,
                    cleaning_fee: 100_000,
                    total: 4_020_000,
                },
                tariff: Tariff {
                    id: 1,
                    room_id: 1,
                    rent: 3_500_000,
                    internet_fee: 20_000,
                    cleaning_fee: 100_000,
                    electricity_price: 4_500,
                    water_price: 35_000,
                },
            },
        };

        let Html(html) = invoice_page(&view);

        assert!(html.contains("4.020.000 đ"));
        assert!(html.contains("50 kWh × 4.500"));
        assert!(html.contains("THÁNG 03/2024"));
        assert!(html.contains("Chủ &lt;trọ&gt;"));
        assert!(html.contains("01/04/2024 08:30"));
    }
}
