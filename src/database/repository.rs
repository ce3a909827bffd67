use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, to_document, Bson, DateTime, Document};
use mongodb::Collection;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::database::connection::DbHandle;
use crate::database::DbError;

/// Result of a replace or merge update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    NotFound,
}

/// Result of a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// One collection, one database call per method. Typed reads, raw-document
/// writes so the repository can strip client-supplied ids and stamp
/// timestamps before anything hits the wire.
pub struct Repository<T: Send + Sync> {
    typed: Collection<T>,
    raw: Collection<Document>,
}

impl<T> Repository<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    pub fn new(db: &DbHandle, collection_name: &str) -> Self {
        Self {
            typed: db.collection(collection_name),
            raw: db.collection(collection_name),
        }
    }

    pub async fn find_all(
        &self,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<T>, DbError> {
        let mut find = self.typed.find(filter);
        if let Some(n) = limit {
            find = find.limit(n);
        }
        let cursor = find.await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<T>, DbError> {
        Ok(self.typed.find_one(doc! { "_id": id }).await?)
    }

    pub async fn find_by_field(&self, field: &str, value: Bson) -> Result<Vec<T>, DbError> {
        let mut filter = Document::new();
        filter.insert(field, value);
        self.find_all(filter, None).await
    }

    /// Insert a new document. Any `_id` on the value is discarded and
    /// `createdAt` is stamped server-side.
    pub async fn insert(&self, value: &T) -> Result<ObjectId, DbError> {
        let mut document = to_document(value)?;
        document.remove("_id");
        document.insert("createdAt", Bson::DateTime(DateTime::now()));

        let result = self.raw.insert_one(document).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or(DbError::MissingInsertedId)
    }

    /// Full replace: overwrites every business field and stamps `updatedAt`.
    pub async fn replace(&self, id: ObjectId, value: &T) -> Result<UpdateOutcome, DbError> {
        let mut document = to_document(value)?;
        document.remove("_id");
        document.insert("updatedAt", Bson::DateTime(DateTime::now()));

        let result = self.raw.replace_one(doc! { "_id": id }, document).await?;
        Ok(if result.matched_count == 0 {
            UpdateOutcome::NotFound
        } else {
            UpdateOutcome::Updated
        })
    }

    /// Partial merge: `$set`s only the supplied fields plus `updatedAt`.
    pub async fn merge_update(
        &self,
        id: ObjectId,
        mut changes: Document,
    ) -> Result<UpdateOutcome, DbError> {
        changes.insert("updatedAt", Bson::DateTime(DateTime::now()));

        let result = self
            .raw
            .update_one(doc! { "_id": id }, doc! { "$set": changes })
            .await?;
        Ok(if result.matched_count == 0 {
            UpdateOutcome::NotFound
        } else {
            UpdateOutcome::Updated
        })
    }

    pub async fn delete_by_id(&self, id: ObjectId) -> Result<DeleteOutcome, DbError> {
        let result = self.raw.delete_one(doc! { "_id": id }).await?;
        Ok(if result.deleted_count == 0 {
            DeleteOutcome::NotFound
        } else {
            DeleteOutcome::Deleted
        })
    }
}
