//! Rendering of the ranked bigram sequence.

use std::io::Write;

use anyhow::Result;

use crate::record::BigramRecord;

/// Writes one block per ranked bigram: 1-based rank, front word, back word,
/// frequency, then a separator line.
pub fn write_text<'a, W, I>(writer: &mut W, records: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a BigramRecord>,
{
    for (rank, record) in records.into_iter().enumerate() {
        writeln!(writer, "[{}] bigram", rank + 1)?;
        writeln!(writer, "front word : {}", record.front)?;
        writeln!(writer, "back word  : {}", record.back)?;
        writeln!(writer, "frequency  : {}", record.count)?;
        writeln!(writer, "---------------------------")?;
    }
    Ok(())
}

/// Writes the ranking as a JSON array of records, in rank order.
pub fn write_json<'a, W, I>(writer: &mut W, records: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a BigramRecord>,
{
    let records: Vec<&BigramRecord> = records.into_iter().collect();
    serde_json::to_writer_pretty(&mut *writer, &records)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<BigramRecord> {
        vec![
            BigramRecord {
                front: "the".into(),
                back: "cat".into(),
                count: 2,
            },
            BigramRecord {
                front: "cat".into(),
                back: "sat".into(),
                count: 1,
            },
        ]
    }

    #[test]
    fn text_report_ranks_from_one() {
        let mut out = Vec::new();
        write_text(&mut out, &sample()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("[1] bigram"));
        assert!(text.contains("front word : the"));
        assert!(text.contains("[2] bigram"));
        assert!(text.contains("frequency  : 1"));
    }

    #[test]
    fn empty_report_is_well_formed() {
        let mut out = Vec::new();
        write_text(&mut out, &[]).unwrap();
        assert!(out.is_empty());

        let mut out = Vec::new();
        write_json(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().trim(), "[]");
    }

    #[test]
    fn json_report_round_trips() {
        let mut out = Vec::new();
        write_json(&mut out, &sample()).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed[0]["front"], "the");
        assert_eq!(parsed[0]["count"], 2);
        assert_eq!(parsed.as_array().unwrap().len(), 2);
    }
}
