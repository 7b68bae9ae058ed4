use async_trait::async_trait;
use sqlx::Row;
use uuid::Uuid;

use crate::application::ports::link_repository::LinkRepository;
use crate::domain::notes::link::Link;
use crate::infrastructure::db::PgPool;

pub struct SqlxLinkRepository {
    pub pool: PgPool,
}

impl SqlxLinkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for SqlxLinkRepository {
    async fn find_link_ids(&self, source_id: Uuid, target_id: Uuid) -> anyhow::Result<Vec<Uuid>> {
        let rows = sqlx::query(
            r#"SELECT id FROM links
               WHERE source_id = $1 AND target_id = $2
               ORDER BY created_at ASC"#,
        )
        .bind(source_id)
        .bind(target_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(|r| r.get::<Uuid, _>("id")).collect())
    }

    async fn insert_link(
        &self,
        source_id: Uuid,
        target_id: Uuid,
        link_type: &str,
    ) -> anyhow::Result<Uuid> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"INSERT INTO links (id, source_id, target_id, type)
               VALUES ($1, $2, $3, $4)
               RETURNING id"#,
        )
        .bind(Uuid::new_v4())
        .bind(source_id)
        .bind(target_id)
        .bind(link_type)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn links_touching(&self, note_ids: &[Uuid]) -> anyhow::Result<Vec<Link>> {
        if note_ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = sqlx::query(
            r#"SELECT id, source_id, target_id, type FROM links
               WHERE source_id = ANY($1) OR target_id = ANY($1)
               ORDER BY created_at ASC"#,
        )
        .bind(note_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|r| Link {
                id: r.get("id"),
                source_id: r.get("source_id"),
                target_id: r.get("target_id"),
                link_type: r.get("type"),
            })
            .collect())
    }
}
