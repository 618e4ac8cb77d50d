//! Encoding for multi-valued fields (certifications, flags, supplier refs).

/// Separator used between tags inside a single cell or column.
pub const TAG_SEPARATOR: char = ';';

/// Join tags into one cell. An empty list encodes as the empty string.
pub fn encode_tags<S: AsRef<str>>(tags: &[S]) -> String {
    let mut out = String::new();
    for (idx, tag) in tags.iter().enumerate() {
        if idx > 0 {
            out.push(TAG_SEPARATOR);
        }
        out.push_str(tag.as_ref());
    }
    out
}

/// Split a cell produced by [`encode_tags`] back into tags.
pub fn decode_tags(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(TAG_SEPARATOR).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_encodes_to_empty_cell() {
        let tags: Vec<String> = Vec::new();
        assert_eq!(encode_tags(&tags), "");
        assert!(decode_tags("").is_empty());
    }

    #[test]
    fn joins_with_semicolon() {
        assert_eq!(encode_tags(&["ISO9001", "AS9100"]), "ISO9001;AS9100");
        assert_eq!(
            decode_tags("ROHS;REACH;ITAR"),
            vec!["ROHS".to_string(), "REACH".to_string(), "ITAR".to_string()]
        );
    }
}
