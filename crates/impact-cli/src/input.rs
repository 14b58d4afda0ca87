use anyhow::Context;
use impact_core::ImpactError;
use std::io::Read;

/// The positional argument if given, else all of stdin. Empty is an error.
/// Invalid UTF-8 on stdin is replaced rather than rejected.
pub fn task_description(arg: Option<&str>) -> anyhow::Result<String> {
    let raw = match arg {
        Some(s) => s.to_string(),
        None => read_all(std::io::stdin().lock()).context("failed to read stdin")?,
    };
    non_empty(raw)
}

fn read_all(mut reader: impl Read) -> std::io::Result<String> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn non_empty(raw: String) -> anyhow::Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ImpactError::EmptyInput.into());
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_wins() {
        assert_eq!(
            task_description(Some("  migrate the schema ")).unwrap(),
            "migrate the schema"
        );
    }

    #[test]
    fn empty_argument_is_rejected() {
        let err = task_description(Some("   ")).unwrap_err();
        assert!(err.downcast_ref::<ImpactError>().is_some());
    }

    #[test]
    fn reader_content_is_trimmed() {
        let raw = read_all("Fix a typo in README\n".as_bytes()).unwrap();
        assert_eq!(non_empty(raw).unwrap(), "Fix a typo in README");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let raw = read_all(&b"fix a typo \xff in readme\n"[..]).unwrap();
        let task = non_empty(raw).unwrap();
        assert_eq!(task, "fix a typo \u{FFFD} in readme");
    }

    #[test]
    fn empty_reader_is_rejected() {
        let raw = read_all(std::io::empty()).unwrap();
        assert!(non_empty(raw).is_err());
    }
}
