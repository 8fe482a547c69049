use super::converter::EntryConverter;
use super::uid::UidGenerator;
use crate::config::ConverterConfig;
use crate::domain::OutlineNode;
use crate::error::Result;
use crate::report::{ConversionReport, EntryFailure};
use serde_json::Value;

/// Markdown output for one entry: (creation date key, document)
pub type MarkdownDocument = (String, String);

/// Convert every entry into a Roam page. Bad entries are logged and skipped.
pub fn convert_outline(entries: &[Value], config: &ConverterConfig) -> ConversionReport<OutlineNode> {
    let mut uids = UidGenerator::new();
    let report = convert_each(entries, |entry| {
        Ok(EntryConverter::new(entry, config)?.to_outline(&mut uids))
    });
    tracing::debug!("issued {} node uids", uids.issued());
    report
}

/// Convert every entry into a markdown document. Bad entries are logged and skipped.
pub fn convert_markdown(
    entries: &[Value],
    config: &ConverterConfig,
) -> ConversionReport<MarkdownDocument> {
    convert_each(entries, |entry| EntryConverter::new(entry, config)?.to_markdown())
}

fn convert_each<T, F>(entries: &[Value], mut convert: F) -> ConversionReport<T>
where
    F: FnMut(&Value) -> Result<T>,
{
    let mut report = ConversionReport::default();

    for (index, entry) in entries.iter().enumerate() {
        match convert(entry) {
            Ok(converted) => report.converted.push(converted),
            Err(error) => {
                let failure = EntryFailure {
                    index,
                    raw: entry.clone(),
                    error,
                };
                tracing::warn!("{}", failure.describe());
                report.failures.push(failure);
            }
        }
    }

    tracing::debug!("{}", report.summary());
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use serde_json::json;
    use std::collections::HashSet;

    fn config() -> ConverterConfig {
        ConverterConfig::new("me@example.com", "#dayone")
    }

    fn good(text: &str) -> Value {
        json!({"text": text, "creationDate": "2021-03-03T12:34:56Z"})
    }

    #[test]
    fn test_bad_entry_is_skipped() {
        let entries = vec![
            good("first"),
            json!({"text": "broken", "creationDate": "not a date"}),
        ];

        let report = convert_outline(&entries, &config());
        assert_eq!(report.converted.len(), 1);
        assert_eq!(report.failures.len(), 1);

        let failure = &report.failures[0];
        assert_eq!(failure.index, 1);
        assert_eq!(failure.raw, entries[1]);
        assert!(matches!(failure.error, ConvertError::InvalidDate(_)));
    }

    #[test]
    fn test_order_is_preserved() {
        let entries = vec![good("one"), json!("junk"), good("two"), good("three")];

        let report = convert_outline(&entries, &config());
        let bodies: Vec<&str> = report
            .converted
            .iter()
            .map(|root| root.children[0].children[0].string.as_deref().unwrap())
            .collect();
        assert_eq!(bodies, vec!["# one", "# two", "# three"]);
        assert_eq!(report.failures[0].index, 1);
    }

    #[test]
    fn test_uids_unique_across_run() {
        let entries: Vec<Value> = (0..200).map(|i| good(&format!("entry {}", i))).collect();

        let report = convert_outline(&entries, &config());
        let uids: Vec<&str> = report
            .converted
            .iter()
            .flat_map(|root| root.walk())
            .map(|node| node.uid.as_str())
            .collect();

        assert_eq!(uids.len(), 600);
        let distinct: HashSet<&str> = uids.iter().copied().collect();
        assert_eq!(distinct.len(), uids.len());
    }

    #[test]
    fn test_markdown_conversion() {
        let entries = vec![good("hello"), json!({"creationDate": "2021-03-03"})];

        let report = convert_markdown(&entries, &config());
        assert_eq!(report.converted.len(), 1);
        assert_eq!(report.converted[0].0, "2021-03-03T123456Z");
        assert!(matches!(
            report.failures[0].error,
            ConvertError::MissingField("text")
        ));
    }
}
