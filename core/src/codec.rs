use crate::types::SubjectId;

/// Decodes the external wire encoding of a subject list.
///
/// The exact encoding belongs to the collaborator, not to this layer, so the
/// decoder sits behind a trait. Order must be preserved.
pub trait SubjectCodec: Send + Sync {
    fn decode(&self, encoded: &str) -> Vec<SubjectId>;
}

/// Delimiter-joined subject list, the broker's native encoding.
///
/// Empty elements are dropped and surrounding whitespace is trimmed, so
/// `"005930; 000660;"` decodes to two subjects.
pub struct DelimitedSubjects {
    delimiter: char,
}

impl DelimitedSubjects {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }
}

impl Default for DelimitedSubjects {
    fn default() -> Self {
        Self::new(';')
    }
}

impl SubjectCodec for DelimitedSubjects {
    fn decode(&self, encoded: &str) -> Vec<SubjectId> {
        encoded
            .split(self.delimiter)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(SubjectId::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_in_order_dropping_empties() {
        let codec = DelimitedSubjects::default();
        assert_eq!(
            codec.decode("005930; 000660;;373220 "),
            vec![SubjectId::from("005930"), SubjectId::from("000660"), SubjectId::from("373220")]
        );
    }

    #[test]
    fn single_subject_needs_no_delimiter() {
        let codec = DelimitedSubjects::default();
        assert_eq!(codec.decode("005930"), vec![SubjectId::from("005930")]);
    }

    #[test]
    fn empty_input_decodes_to_nothing() {
        let codec = DelimitedSubjects::default();
        assert!(codec.decode("").is_empty());
    }

    #[test]
    fn custom_delimiter_is_respected() {
        let codec = DelimitedSubjects::new(',');
        assert_eq!(
            codec.decode("005930,000660"),
            vec![SubjectId::from("005930"), SubjectId::from("000660")]
        );
    }
}
