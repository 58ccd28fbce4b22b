//! SQLite post repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Select, Set, TransactionTrait,
};

use guestbook_core::domain::{NewPost, Post};
use guestbook_core::error::RepoError;
use guestbook_core::ports::PostRepository;

use super::entity::visitor::{self, Entity as VisitorEntity};

/// Post repository backed by the `visitors` table.
///
/// Ids come from SQLite's `AUTOINCREMENT`, so they are never reused.
pub struct SqlitePostRepository {
    db: DbConn,
}

impl SqlitePostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    fn newest_first(select: Select<VisitorEntity>) -> Select<VisitorEntity> {
        select
            .order_by_desc(visitor::Column::CreatedAt)
            .order_by_desc(visitor::Column::Id)
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        _ => RepoError::Query(err.to_string()),
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let (name, body) = post.into_parts();

        let model = visitor::ActiveModel {
            id: NotSet,
            name: Set(name),
            body: Set(body),
            created_at: Set(Utc::now()),
            heart: Set(0),
        }
        .insert(&self.db)
        .await
        .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let result = VisitorEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let result = Self::newest_first(VisitorEntity::find())
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn search(&self, needle: &str) -> Result<Vec<Post>, RepoError> {
        // instr() instead of LIKE: case-sensitive, and % / _ stay literal
        let matches = Expr::cust_with_values("instr(\"body\", ?) > 0", [needle.to_owned()]);

        let result = Self::newest_first(VisitorEntity::find().filter(matches))
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, RepoError> {
        let result = VisitorEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }

    async fn delete_by_name(&self, name: &str) -> Result<u64, RepoError> {
        let result = VisitorEntity::delete_many()
            .filter(visitor::Column::Name.eq(name))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }

    async fn increment_heart(&self, id: i64) -> Result<i64, RepoError> {
        // Update and read-back share a transaction so the returned count is ours
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let result = VisitorEntity::update_many()
            .col_expr(
                visitor::Column::Heart,
                Expr::col(visitor::Column::Heart).add(1),
            )
            .filter(visitor::Column::Id.eq(id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            txn.rollback().await.map_err(map_db_err)?;
            return Err(RepoError::NotFound);
        }

        let model = VisitorEntity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?;

        txn.commit().await.map_err(map_db_err)?;
        Ok(model.heart)
    }
}
