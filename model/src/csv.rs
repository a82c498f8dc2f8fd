// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! CSV line codec for tasks.
//!
//! One task per line: `id,text,importance,deadline,done,createdAt,
//! changedAt,color,files`. Dates are RFC 3339, attachments are joined
//! with `;`, and a `text` containing commas is wrapped in double quotes.
//! Authorship is not carried in this format; parsed tasks are attributed
//! to the local device.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::task::{Importance, Task, WHITE_HEX};

/// Author recorded on tasks parsed back from CSV.
const CSV_DEVICE: &str = "local";

impl Task {
    /// Encodes the task as a single CSV line.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let deadline = self.deadline.map(|d| d.to_rfc3339()).unwrap_or_default();
        let color = self.color.as_deref().unwrap_or(WHITE_HEX);
        let files = self
            .files
            .as_ref()
            .map(|f| f.join(";"))
            .unwrap_or_default();

        let text = if self.text.contains(',') {
            format!("\"{}\"", self.text)
        } else {
            self.text.clone()
        };

        format!(
            "{},{},{},{},{},{},{},{},{}",
            self.id,
            text,
            self.importance,
            deadline,
            self.done,
            self.created_at.to_rfc3339(),
            self.changed_at.to_rfc3339(),
            color,
            files
        )
    }

    /// Decodes a single CSV line; `None` if the line is malformed.
    #[must_use]
    pub fn from_csv(line: &str) -> Option<Self> {
        let mut fields: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;

        for ch in line.chars() {
            match ch {
                '"' => in_quotes = !in_quotes,
                ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
                _ => current.push(ch),
            }
        }
        fields.push(current);

        if fields.len() < 9 {
            return None;
        }

        let id = Uuid::parse_str(&fields[0]).ok()?;
        let text = fields[1].clone();
        let importance = fields[2].parse().unwrap_or(Importance::Basic);
        let deadline = if fields[3].is_empty() {
            None
        } else {
            Some(parse_rfc3339(&fields[3])?)
        };
        let done = fields[4] == "true";
        let created_at = parse_rfc3339(&fields[5])?;
        let changed_at = parse_rfc3339(&fields[6])?;
        let color = if fields[7].is_empty() {
            WHITE_HEX.to_string()
        } else {
            fields[7].clone()
        };
        let files = if fields[8].is_empty() {
            None
        } else {
            Some(fields[8].split(';').map(str::to_string).collect())
        };

        Some(Task {
            id,
            text,
            importance,
            deadline,
            done,
            color: Some(color),
            created_at,
            changed_at,
            last_updated_by: CSV_DEVICE.to_string(),
            files,
        })
    }

    /// Decodes a whole CSV document, one task per line.
    ///
    /// Malformed lines are skipped, matching the tolerance of the JSON
    /// collection loader.
    #[must_use]
    pub fn parse_collection(csv: &str) -> Vec<Self> {
        csv.lines().filter_map(Self::from_csv).collect()
    }
}

fn parse_rfc3339(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::task::TaskDraft;

    fn sample_task(text: &str) -> Task {
        let now = Utc.timestamp_opt(1_721_296_200, 0).unwrap();
        let mut draft = TaskDraft::new(text);
        draft.importance = Importance::Important;
        draft.deadline = Some(Utc.timestamp_opt(1_721_382_600, 0).unwrap());
        draft.files = Some(vec!["receipt.png".to_string(), "notes.txt".to_string()]);
        draft.into_task(now, "phone").unwrap()
    }

    #[test]
    fn csv_round_trips_plain_text() {
        let task = sample_task("Buy cheese");
        let parsed = Task::from_csv(&task.to_csv()).unwrap();

        assert_eq!(parsed.id, task.id);
        assert_eq!(parsed.text, task.text);
        assert_eq!(parsed.importance, task.importance);
        assert_eq!(parsed.deadline, task.deadline);
        assert_eq!(parsed.done, task.done);
        assert_eq!(parsed.created_at, task.created_at);
        assert_eq!(parsed.changed_at, task.changed_at);
        assert_eq!(parsed.color, task.color);
        assert_eq!(parsed.files, task.files);
    }

    #[test]
    fn csv_survives_comma_in_text() {
        let task = sample_task("Buy cheese, bread, and milk");

        let once = task.to_csv();
        let reparsed = Task::from_csv(&once).unwrap();
        assert_eq!(reparsed.text, "Buy cheese, bread, and milk");
        // Quoting must survive a full encode-decode-encode cycle.
        assert_eq!(reparsed.to_csv(), once);
    }

    #[test]
    fn csv_absent_deadline_and_files() {
        let now = Utc.timestamp_opt(1_721_296_200, 0).unwrap();
        let task = TaskDraft::new("Bare task").into_task(now, "phone").unwrap();

        let parsed = Task::from_csv(&task.to_csv()).unwrap();
        assert_eq!(parsed.deadline, None);
        assert_eq!(parsed.files, None);
        assert_eq!(parsed.color.as_deref(), Some(WHITE_HEX));
    }

    #[test]
    fn csv_rejects_malformed_lines() {
        assert!(Task::from_csv("").is_none());
        assert!(Task::from_csv("not-a-uuid,text,basic,,false,also-not-a-date").is_none());
        assert!(Task::from_csv("a,b,c").is_none());
    }

    #[test]
    fn csv_unknown_importance_falls_back_to_basic() {
        let task = sample_task("Fallback");
        let line = task.to_csv().replace(",important,", ",critical,");
        let parsed = Task::from_csv(&line).unwrap();
        assert_eq!(parsed.importance, Importance::Basic);
    }

    #[test]
    fn parse_collection_skips_bad_lines() {
        let good = sample_task("First");
        let also_good = sample_task("Second, with comma");
        let doc = format!("{}\ngarbage line\n{}\n", good.to_csv(), also_good.to_csv());

        let parsed = Task::parse_collection(&doc);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].id, good.id);
        assert_eq!(parsed[1].id, also_good.id);
    }
}
