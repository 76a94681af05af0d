// src/views/home.rs

use axum::response::Html;

use crate::{
    models::room::RoomListEntry,
    views::layout::{escape, escape_opt, page},
};

pub fn room_list(rooms: &[RoomListEntry]) -> Html<String> {
    let rows: String = rooms
        .iter()
        .map(|r| {
            format!(
                r#"<tr><td><a href="/rooms/{id}">{name}</a></td><td>{tenant}</td><td>{note}</td></tr>"#,
                id = r.id,
                name = escape(&r.name),
                tenant = r.tenant.as_deref().map(escape).unwrap_or_else(|| "<em>Trống</em>".into()),
                note = escape_opt(r.note.as_deref()),
            )
        })
        .collect();

    let body = format!(
        r#"<h1>Danh sách phòng</h1>
<table>
<thead><tr><th>Phòng</th><th>Người thuê</th><th>Ghi chú</th></tr></thead>
<tbody>{rows}</tbody>
</table>"#
    );

    page("Danh sách phòng", &body)
}
