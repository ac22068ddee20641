//! In-process provider for local development and tests.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use base64::Engine;
use chrono::Utc;

use super::{Result, SchoolStore};
use crate::school::model::{NewSchool, School};

#[derive(Debug, Default)]
struct Inner {
    rows: Vec<School>,
    objects: HashMap<String, (String, Vec<u8>)>,
    next_id: i64,
}

/// Keeps rows and image objects in memory.
///
/// Public URLs are `data:` URLs so images render without a file server.
/// Locks are never held across an await.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing rows (oldest first).
    pub fn with_schools(schools: Vec<School>) -> Self {
        let next_id = schools.iter().map(|s| s.id).max().unwrap_or(0);
        Self {
            inner: RwLock::new(Inner {
                rows: schools,
                objects: HashMap::new(),
                next_id,
            }),
        }
    }

    /// Number of stored image objects.
    pub fn object_count(&self) -> usize {
        self.read().objects.len()
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn data_url(content_type: &str, bytes: &[u8]) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        format!("data:{content_type};base64,{encoded}")
    }
}

#[async_trait]
impl SchoolStore for MemoryStore {
    async fn upload_image(&self, path: &str, content_type: &str, bytes: &[u8]) -> Result<()> {
        self.write()
            .objects
            .insert(path.to_string(), (content_type.to_string(), bytes.to_vec()));
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        // Only paths that were never uploaded get the opaque reference.
        self.read().objects.get(path).map_or_else(
            || format!("memory://{path}"),
            |(content_type, bytes)| Self::data_url(content_type, bytes),
        )
    }

    async fn insert_school(&self, school: &NewSchool) -> Result<()> {
        let mut inner = self.write();
        inner.next_id += 1;
        let row = School {
            id: inner.next_id,
            name: school.name.clone(),
            address: school.address.clone(),
            city: school.city.clone(),
            state: school.state.clone(),
            contact: school.contact.clone(),
            email_id: school.email_id.clone(),
            board: Some(school.board),
            school_type: Some(school.school_type),
            hostel_facility: Some(school.hostel_facility),
            image: school.image.clone(),
            created_at: Some(Utc::now()),
        };
        inner.rows.push(row);
        Ok(())
    }

    async fn list_schools(&self) -> Result<Vec<School>> {
        let mut rows = self.read().rows.clone();
        // Insertion order breaks ties between equal timestamps.
        rows.reverse();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::school::model::{Board, HostelFacility, SchoolType};

    fn new_school(name: &str) -> NewSchool {
        NewSchool {
            name: name.into(),
            address: "221 Baker Street".into(),
            city: "Chennai".into(),
            state: "Tamil Nadu".into(),
            contact: "4423456789".into(),
            email_id: "hello@example.org".into(),
            board: Board::State,
            school_type: SchoolType::AllBoys,
            hostel_facility: HostelFacility::Yes,
            image: None,
        }
    }

    #[tokio::test]
    async fn test_insert_and_list_newest_first() {
        let store = MemoryStore::new();
        store.insert_school(&new_school("First")).await.unwrap();
        store.insert_school(&new_school("Second")).await.unwrap();

        let rows = store.list_schools().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Second");
        assert_eq!(rows[0].id, 2);
        assert_eq!(rows[1].name, "First");
    }

    #[tokio::test]
    async fn test_public_url_is_data_url() {
        let store = MemoryStore::new();
        store
            .upload_image("a.png", "image/png", &[1, 2, 3])
            .await
            .unwrap();

        assert_eq!(store.public_url("a.png"), "data:image/png;base64,AQID");
        assert_eq!(store.public_url("missing.png"), "memory://missing.png");
        assert_eq!(store.object_count(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_public_url_stable_under_concurrent_writes() {
        let store = Arc::new(MemoryStore::new());
        store
            .upload_image("a.png", "image/png", &[1, 2, 3])
            .await
            .unwrap();

        let writer = {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                for i in 0..200 {
                    store
                        .upload_image(&format!("{i}.png"), "image/png", &[0])
                        .await
                        .unwrap();
                    store.insert_school(&new_school("Busy")).await.unwrap();
                }
            })
        };

        for _ in 0..200 {
            assert_eq!(store.public_url("a.png"), "data:image/png;base64,AQID");
            tokio::task::yield_now().await;
        }
        writer.await.unwrap();
        assert_eq!(store.object_count(), 201);
    }
}
