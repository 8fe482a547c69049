use super::dates::{date_key, epoch_millis, format_title, parse_timestamp};
use super::photos::rewrite_image_refs;
use super::uid::UidGenerator;
use crate::config::ConverterConfig;
use crate::domain::{EntryRecord, OutlineNode};
use crate::error::{ConvertError, Result};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Converts one Day One entry into a markdown document or a Roam page.
///
/// Timestamps, title and date key are derived once at construction.
#[derive(Debug, Clone)]
pub struct EntryConverter<'a> {
    config: &'a ConverterConfig,
    record: EntryRecord,
    created_at: DateTime<Utc>,
    create_time: i64,
    edit_time: i64,
    title: String,
}

impl<'a> EntryConverter<'a> {
    pub fn new(entry: &Value, config: &'a ConverterConfig) -> Result<Self> {
        let record = EntryRecord::from_json(entry)?;
        if record.metadata.contains_key("text") {
            return Err(ConvertError::Invariant);
        }

        let created_at = parse_timestamp(record.creation_date()?)?;
        let create_time = epoch_millis(&created_at);

        // Missing or unreadable edit dates fall back to the creation time
        let edit_time = record
            .modified_date()
            .and_then(|s| parse_timestamp(s).ok())
            .map(|dt| epoch_millis(&dt))
            .unwrap_or(create_time);

        Ok(Self {
            config,
            title: format_title(&created_at),
            record,
            created_at,
            create_time,
            edit_time,
        })
    }

    pub fn create_time(&self) -> i64 {
        self.create_time
    }

    pub fn edit_time(&self) -> i64 {
        self.edit_time
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Filesystem-safe creation timestamp, e.g. `2021-03-03T123456Z`
    pub fn creation_date_key(&self) -> String {
        date_key(&self.created_at)
    }

    /// Entry text, prefixed with "# " unless it already starts with a heading marker
    pub fn body(&self) -> String {
        if self.record.text.starts_with('#') {
            self.record.text.clone()
        } else {
            format!("# {}", self.record.text)
        }
    }

    /// Render the entry as YAML front matter plus body, keyed by its creation date
    pub fn to_markdown(&self) -> Result<(String, String)> {
        let front_matter = serde_yaml::to_string(&self.record.metadata)?;
        let document = format!("---\n{}\n---\n\n\n{}\n", front_matter, self.body());
        let document = rewrite_image_refs(&document, &self.record.photos());
        Ok((self.creation_date_key(), document))
    }

    /// Build the page → heading → body tree.
    ///
    /// Every call draws new uids, so repeated calls give different trees.
    /// Photo references are left as `dayone-moment://` links.
    pub fn to_outline(&self, uids: &mut UidGenerator) -> OutlineNode {
        let body = self.block(Some(self.body()), Vec::new(), uids.next_uid());
        let heading = self.block(Some(self.config.heading.clone()), vec![body], uids.next_uid());

        OutlineNode {
            title: Some(self.title.clone()),
            ..self.block(None, vec![heading], uids.next_uid())
        }
    }

    fn block(&self, string: Option<String>, children: Vec<OutlineNode>, uid: String) -> OutlineNode {
        OutlineNode {
            create_email: self.config.email.clone(),
            create_time: self.create_time,
            title: None,
            string,
            children,
            uid,
            edit_time: self.edit_time,
            edit_email: self.config.email.clone(),
        }
    }
}
