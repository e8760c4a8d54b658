//! JSON document store
//!
//! Keeps one JSON document per key in a data directory:
//!
//! - `discussions.json`: array of completed discussions, oldest first
//! - `participants.json`: array of character ids
//! - `rounds.json`: a single number
//!
//! A missing file reads as "nothing stored". Writes go to a temporary file
//! that is renamed over the target.

use async_trait::async_trait;
use roundtable_application::ports::discussion_store::{DiscussionStore, StoreError};
use roundtable_domain::{CharacterId, Discussion};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::debug;

const DISCUSSIONS_FILE: &str = "discussions.json";
const PARTICIPANTS_FILE: &str = "participants.json";
const ROUNDS_FILE: &str = "rounds.json";

pub struct JsonFileStore {
    data_dir: PathBuf,
    /// Serializes read-modify-write of the discussion history
    history_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            history_lock: Mutex::new(()),
        }
    }

    /// `$XDG_DATA_HOME/roundtable`, or `./.roundtable` when no data
    /// directory is known
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .map(|d| d.join("roundtable"))
            .unwrap_or_else(|| PathBuf::from(".roundtable"))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    async fn read_json<T: DeserializeOwned>(&self, file: &str) -> Result<Option<T>, StoreError> {
        let path = self.data_dir.join(file);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| StoreError::Serialization(format!("{}: {}", path.display(), e)))
    }

    async fn write_json<T: Serialize + ?Sized>(
        &self,
        file: &str,
        value: &T,
    ) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.data_dir).await?;

        let json = serde_json::to_string_pretty(value)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        let path = self.data_dir.join(file);
        let tmp = self.data_dir.join(format!(".{file}.tmp"));
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &path).await?;

        debug!("Wrote {}", path.display());
        Ok(())
    }
}

#[async_trait]
impl DiscussionStore for JsonFileStore {
    async fn append_discussion(&self, discussion: Discussion) -> Result<(), StoreError> {
        let _guard = self.history_lock.lock().await;
        let mut discussions: Vec<Discussion> =
            self.read_json(DISCUSSIONS_FILE).await?.unwrap_or_default();
        discussions.push(discussion);
        self.write_json(DISCUSSIONS_FILE, &discussions).await
    }

    async fn load_participant_roster(&self) -> Result<Option<Vec<CharacterId>>, StoreError> {
        self.read_json(PARTICIPANTS_FILE).await
    }

    async fn load_round_count_preference(&self) -> Result<Option<u32>, StoreError> {
        self.read_json(ROUNDS_FILE).await
    }

    async fn save_participant_roster(&self, roster: &[CharacterId]) -> Result<(), StoreError> {
        self.write_json(PARTICIPANTS_FILE, roster).await
    }

    async fn save_round_count_preference(&self, round_count: u32) -> Result<(), StoreError> {
        self.write_json(ROUNDS_FILE, &round_count).await
    }

    async fn load_discussions(&self) -> Result<Vec<Discussion>, StoreError> {
        let _guard = self.history_lock.lock().await;
        Ok(self.read_json(DISCUSSIONS_FILE).await?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roundtable_domain::{
        CharacterRegistry, DiscussionPlan, DiscussionRecordBuilder, Message, MessageSource,
    };

    fn discussion(topic: &str) -> Discussion {
        let registry = CharacterRegistry::builtin();
        let ids = vec![CharacterId::from("tamako"), CharacterId::from("tomi")];
        let plan = DiscussionPlan::new(topic, &ids, 1, None, &registry).unwrap();
        let conversation = plan
            .participants()
            .iter()
            .map(|c| Message::turn(c, format!("{}の意見", c.name), 1, MessageSource::Fallback))
            .chain(std::iter::once(Message::summary(
                plan.moderator(),
                "まとめ",
                plan.summary_round(),
                MessageSource::Fallback,
            )))
            .collect();
        DiscussionRecordBuilder::new(&plan).build(conversation)
    }

    #[tokio::test]
    async fn test_empty_directory_reads_as_nothing_stored() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing"));

        assert_eq!(store.load_participant_roster().await.unwrap(), None);
        assert_eq!(store.load_round_count_preference().await.unwrap(), None);
        assert!(store.load_discussions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_preferences_persist_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let roster = vec![CharacterId::from("suneko"), CharacterId::from("tsubaki")];

        let store = JsonFileStore::new(dir.path());
        store.save_participant_roster(&roster).await.unwrap();
        store.save_round_count_preference(3).await.unwrap();

        let reopened = JsonFileStore::new(dir.path());
        assert_eq!(reopened.load_participant_roster().await.unwrap(), Some(roster));
        assert_eq!(reopened.load_round_count_preference().await.unwrap(), Some(3));

        let raw = std::fs::read_to_string(dir.path().join(PARTICIPANTS_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!(["suneko", "tsubaki"]));
    }

    #[tokio::test]
    async fn test_append_keeps_history_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        let first = discussion("運動会のお弁当");
        let second = discussion("おすすめの日焼け止めは？");
        store.append_discussion(first.clone()).await.unwrap();
        store.append_discussion(second.clone()).await.unwrap();

        let stored = store.load_discussions().await.unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].id, first.id);
        assert_eq!(stored[1].id, second.id);
        assert_eq!(stored[1].topic, "おすすめの日焼け止めは？");
        assert_eq!(stored[1].conversation.len(), 3);
        assert!(stored[1].summary().is_some());
        assert!(stored[1].is_complete);
    }

    #[tokio::test]
    async fn test_corrupt_document_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(ROUNDS_FILE), "not json").unwrap();

        let store = JsonFileStore::new(dir.path());
        let err = store.load_round_count_preference().await.unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_no_temporary_files_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        store.save_round_count_preference(2).await.unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec![ROUNDS_FILE.to_string()]);
    }
}
