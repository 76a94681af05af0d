// src/db/room_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::{db_utils::map_room_name_conflict, error::AppError},
    models::room::{Room, RoomListEntry},
};

// O repositório de quartos, responsável pela tabela 'rooms'
#[derive(Clone)]
pub struct RoomRepository {
    pool: PgPool,
}

impl RoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Lista todos os quartos com o nome do inquilino ativo (se houver)
    pub async fn list_with_active_tenant(&self) -> Result<Vec<RoomListEntry>, AppError> {
        let rooms = sqlx::query_as::<_, RoomListEntry>(
            r#"
            SELECT r.id, r.name, r.note,
                   (SELECT t.full_name FROM tenants t
                     WHERE t.room_id = r.id AND t.ended_at IS NULL
                     ORDER BY t.started_at DESC NULLS LAST, t.id DESC
                     LIMIT 1) AS tenant
            FROM rooms r
            ORDER BY r.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rooms)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Room>, AppError> {
        let room = sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(room)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        name: &str,
        note: Option<&str>,
    ) -> Result<Room, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Room>("INSERT INTO rooms (name, note) VALUES ($1, $2) RETURNING *")
            .bind(name)
            .bind(note)
            .fetch_one(executor)
            .await
            .map_err(|e| map_room_name_conflict(e, name))
    }

    /// Retorna `None` se o quarto não existir.
    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: i32,
        name: &str,
        note: Option<&str>,
    ) -> Result<Option<Room>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Room>(
            "UPDATE rooms SET name = $1, note = $2 WHERE id = $3 RETURNING *",
        )
        .bind(name)
        .bind(note)
        .bind(id)
        .fetch_optional(executor)
        .await
        .map_err(|e| map_room_name_conflict(e, name))
    }
}
