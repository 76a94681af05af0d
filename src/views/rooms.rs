// src/views/rooms.rs

use axum::response::Html;

use crate::{
    models::{room::Room, tariff::Tariff},
    services::room_service::RoomDetail,
    views::{
        invoice::period_label,
        layout::{escape, escape_opt, fmt_vnd, input_number, page},
    },
};

fn money_input(name: &str, label: &str, value: Option<i32>) -> String {
    format!(
        r#"<label>{label}<input type="number" min="0" step="1" name="{name}" value="{value}" required></label>"#,
        value = value.map(|v| v.to_string()).unwrap_or_default(),
    )
}

fn tariff_inputs(tariff: Option<&Tariff>) -> String {
    [
        money_input("rent", "Tiền phòng", tariff.map(|t| t.rent)),
        money_input("internet_fee", "Internet", tariff.map(|t| t.internet_fee)),
        money_input("cleaning_fee", "Vệ sinh", tariff.map(|t| t.cleaning_fee)),
        money_input("electricity_price", "Giá điện (kWh)", tariff.map(|t| t.electricity_price)),
        money_input("water_price", "Giá nước (m³)", tariff.map(|t| t.water_price)),
    ]
    .join("\n")
}

pub fn new_room_form() -> Html<String> {
    let body = format!(
        r#"<h1>Thêm phòng</h1>
<form method="post" action="/rooms">
<label>Tên phòng<input name="name" required></label>
<label>Ghi chú<input name="note"></label>
<fieldset><legend>Đơn giá</legend>
{tariff}
</fieldset>
<fieldset><legend>Người thuê (không bắt buộc)</legend>
<label>Họ tên<input name="tenant_full_name"></label>
<label>Điện thoại<input name="tenant_phone"></label>
<label>Ngày bắt đầu<input type="date" name="tenant_started_at"></label>
</fieldset>
<button type="submit">Tạo phòng</button>
</form>"#,
        tariff = tariff_inputs(None),
    );

    page("Thêm phòng", &body)
}

pub fn edit_room_form(room: &Room, tariff: Option<&Tariff>, yyyymm: Option<&str>) -> Html<String> {
    // Se veio de um mês específico, o PUT recalcula a fatura desse mês
    let action = match yyyymm {
        Some(p) => format!("/rooms/{}?_method=PUT&amp;yyyymm={}", room.id, escape(p)),
        None => format!("/rooms/{}?_method=PUT", room.id),
    };

    let body = format!(
        r#"<h1>Sửa phòng {name}</h1>
<form method="post" action="{action}">
<label>Tên phòng<input name="name" value="{name}" required></label>
<label>Ghi chú<input name="note" value="{note}"></label>
<fieldset><legend>Đơn giá</legend>
{tariff}
</fieldset>
<button type="submit">Lưu</button>
</form>"#,
        name = escape(&room.name),
        note = escape_opt(room.note.as_deref()),
        tariff = tariff_inputs(tariff),
    );

    page(&format!("Sửa phòng {}", room.name), &body)
}

fn tenant_section(d: &RoomDetail) -> String {
    let current = match &d.tenant {
        Some(t) => format!(
            r#"<p>Đang thuê: <strong>{name}</strong> {phone} – từ {since}</p>
<form method="post" action="/rooms/{id}/tenant/end"><button type="submit">Kết thúc thuê</button></form>"#,
            name = escape(&t.full_name),
            phone = escape_opt(t.phone.as_deref()),
            since = t.started_at.map(|d| d.format("%d/%m/%Y").to_string()).unwrap_or_default(),
            id = d.room.id,
        ),
        None => "<p><em>Phòng trống</em></p>".to_string(),
    };

    format!(
        r#"<section><h2>Người thuê</h2>
{current}
<form method="post" action="/rooms/{id}/tenant">
<label>Họ tên<input name="full_name" required></label>
<label>Điện thoại<input name="phone"></label>
<label>Ngày bắt đầu<input type="date" name="started_at"></label>
<button type="submit">Người thuê mới</button>
</form></section>"#,
        id = d.room.id,
    )
}

fn tariff_section(d: &RoomDetail) -> String {
    let rows = match &d.tariff {
        Some(t) => format!(
            r#"<ul>
<li>Tiền phòng: {rent}</li>
<li>Internet: {internet}</li>
<li>Vệ sinh: {cleaning}</li>
<li>Giá điện: {elec}/kWh</li>
<li>Giá nước: {water}/m³</li>
</ul>"#,
            rent = fmt_vnd(t.rent),
            internet = fmt_vnd(t.internet_fee),
            cleaning = fmt_vnd(t.cleaning_fee),
            elec = fmt_vnd(t.electricity_price),
            water = fmt_vnd(t.water_price),
        ),
        None => "<p><em>Chưa có đơn giá</em></p>".to_string(),
    };

    format!(
        r#"<section><h2>Đơn giá</h2>{rows}
<a href="/rooms/{id}/edit?yyyymm={period}">Sửa phòng / đơn giá</a></section>"#,
        id = d.room.id,
        period = d.period,
    )
}

fn meter_section(d: &RoomDetail) -> String {
    // Leitura existente > sugestão do mês anterior > vazio
    let (elec_start, elec_end, water_start, water_end) = match (&d.meter, &d.prefill) {
        (Some(m), _) => (
            input_number(m.elec_start),
            input_number(m.elec_end),
            input_number(m.water_start),
            input_number(m.water_end),
        ),
        (None, Some(p)) => (input_number(p.elec_start), String::new(), input_number(p.water_start), String::new()),
        (None, None) => Default::default(),
    };

    let hint = match (&d.prev_period, &d.prefill) {
        (Some(prev), Some(_)) => format!(
            "<p class=\"muted\">Chỉ số đầu lấy từ chỉ số cuối tháng {}.</p>",
            period_label(&prev.to_string())
        ),
        (Some(prev), None) => format!(
            "<p class=\"muted\">Không có chỉ số tháng {}: nhập chỉ số đầu.</p>",
            period_label(&prev.to_string())
        ),
        _ => String::new(),
    };

    let invoice_link = if d.has_complete_meter {
        format!(
            r#"<p><a href="/rooms/{id}/invoice/{period}">Xem hóa đơn tháng {label}</a></p>"#,
            id = d.room.id,
            period = d.period,
            label = period_label(&d.period.to_string()),
        )
    } else {
        "<p class=\"muted\">Chưa đủ chỉ số để tính hóa đơn.</p>".to_string()
    };

    format!(
        r#"<section><h2>Chỉ số điện nước tháng {label}</h2>
{hint}
<form method="post" action="/rooms/{id}/meter">
<input type="hidden" name="yyyymm" value="{period}">
<label>Điện đầu<input type="number" step="0.01" min="0" name="elec_start" value="{elec_start}"></label>
<label>Điện cuối<input type="number" step="0.01" min="0" name="elec_end" value="{elec_end}" required></label>
<label>Nước đầu<input type="number" step="0.01" min="0" name="water_start" value="{water_start}"></label>
<label>Nước cuối<input type="number" step="0.01" min="0" name="water_end" value="{water_end}" required></label>
<button type="submit">Lưu chỉ số</button>
</form>
{invoice_link}
</section>"#,
        label = period_label(&d.period.to_string()),
        id = d.room.id,
        period = d.period,
    )
}

fn invoice_history(d: &RoomDetail) -> String {
    if d.invoices.is_empty() {
        return "<section><h2>Lịch sử hóa đơn</h2><p><em>Chưa có hóa đơn</em></p></section>".to_string();
    }

    let rows: String = d.invoices
        .iter()
        .map(|inv| {
            format!(
                r#"<tr><td><a href="/rooms/{id}/invoice/{yyyymm}">{label}</a></td><td>{total}</td></tr>"#,
                id = d.room.id,
                yyyymm = escape(&inv.yyyymm),
                label = period_label(&inv.yyyymm),
                total = fmt_vnd(inv.total),
            )
        })
        .collect();

    format!(
        r#"<section><h2>Lịch sử hóa đơn</h2>
<table><thead><tr><th>Tháng</th><th>Tổng</th></tr></thead><tbody>{rows}</tbody></table></section>"#
    )
}

pub fn room_detail(d: &RoomDetail) -> Html<String> {
    let body = format!(
        r#"<h1>Phòng {name}</h1>
<p>{note}</p>
<form method="get" action="/rooms/{id}">
<label>Tháng (YYYYMM)<input name="yyyymm" value="{period}" pattern="[0-9]{{6}}"></label>
<button type="submit">Xem</button>
</form>
{tenant}
{tariff}
{meter}
{history}"#,
        name = escape(&d.room.name),
        note = escape_opt(d.room.note.as_deref()),
        id = d.room.id,
        period = d.period,
        tenant = tenant_section(d),
        tariff = tariff_section(d),
        meter = meter_section(d),
        history = invoice_history(d),
    );

    page(&format!("Phòng {}", d.room.name), &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{common::period::Period, models::meter::MeterPrefill};

    fn detail() -> RoomDetail {
        let period: Period = "202401".parse().unwrap();
        RoomDetail {
            room: Room { id: 7, name: "P<301>".into(), note: Some("3 người".into()) },
            tenant: None,
            tariff: None,
            period,
            meter: None,
            prev_period: Some(period.prev()),
            prefill: Some(MeterPrefill { elec_start: 150.0, water_start: 15.5 }),
            invoices: vec![],
            has_complete_meter: false,
        }
    }

    #[test]
    fn detail_prefills_starts_from_previous_month() {
        let Html(html) = room_detail(&detail());

        assert!(html.contains(r#"name="elec_start" value="150""#));
        assert!(html.contains(r#"name="water_start" value="15.5""#));
        assert!(html.contains("tháng 12/2023"));
        assert!(html.contains("P&lt;301&gt;"));
        assert!(!html.contains("/invoice/202401"));
    }

    #[test]
    fn edit_form_carries_period_for_recalculation() {
        let room = Room { id: 3, name: "P201".into(), note: None };
        let Html(html) = edit_room_form(&room, None, Some("202403"));
        assert!(html.contains(r#"action="/rooms/3?_method=PUT&amp;yyyymm=202403""#));
    }
}
