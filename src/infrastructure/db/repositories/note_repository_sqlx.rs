use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::note_repository::NoteRepository;
use crate::domain::notes::note::Note;
use crate::infrastructure::db::PgPool;

pub struct SqlxNoteRepository {
    pub pool: PgPool,
}

impl SqlxNoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_note(r: PgRow) -> Note {
    Note {
        id: r.get("id"),
        owner_id: r.get("owner_id"),
        title: r.get("title"),
        content: r.get("content"),
        created_at: r.get("created_at"),
        updated_at: r.get("updated_at"),
    }
}

#[async_trait]
impl NoteRepository for SqlxNoteRepository {
    async fn list_for_owner(&self, owner_id: Uuid) -> anyhow::Result<Vec<Note>> {
        let rows = sqlx::query(
            r#"SELECT id, owner_id, title, content, created_at, updated_at
               FROM notes WHERE owner_id = $1
               ORDER BY created_at ASC"#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(map_note).collect())
    }

    async fn create_for_owner(
        &self,
        owner_id: Uuid,
        title: &str,
        content: &str,
    ) -> anyhow::Result<Note> {
        let row = sqlx::query(
            r#"INSERT INTO notes (id, owner_id, title, content)
               VALUES ($1, $2, $3, $4)
               RETURNING id, owner_id, title, content, created_at, updated_at"#,
        )
        .bind(Uuid::new_v4())
        .bind(owner_id)
        .bind(title)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_note(row))
    }

    async fn update_content_for_owner(
        &self,
        id: Uuid,
        owner_id: Uuid,
        content: &str,
    ) -> anyhow::Result<Option<Note>> {
        let row = sqlx::query(
            r#"UPDATE notes SET content = $1, updated_at = now()
               WHERE id = $2 AND owner_id = $3
               RETURNING id, owner_id, title, content, created_at, updated_at"#,
        )
        .bind(content)
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(map_note))
    }

    async fn exists_for_owner(&self, id: Uuid, owner_id: Uuid) -> anyhow::Result<bool> {
        let n = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM notes WHERE id = $1 AND owner_id = $2",
        )
        .bind(id)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(n > 0)
    }

    async fn find_id_by_owner_and_title(
        &self,
        owner_id: Uuid,
        title: &str,
    ) -> anyhow::Result<Option<Uuid>> {
        let row = sqlx::query(
            r#"SELECT id FROM notes
               WHERE owner_id = $1 AND LOWER(title) = LOWER($2)
               ORDER BY updated_at DESC LIMIT 1"#,
        )
        .bind(owner_id)
        .bind(title)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|r| r.get::<Uuid, _>("id")))
    }
}
