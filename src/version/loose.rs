//! Lenient ordering over arbitrary tag strings
//!
//! Version listings include tags that strict semver parsing rejects, and the
//! listing still has to sort them somewhere. The comparator here never fails:
//! every string gets a key and any two keys compare. Callers that need
//! validation use the strict parser in [`crate::version::semver`] instead;
//! the two orderings are intentionally different.

/// One comparison unit of a tag.
///
/// Variant order matters: a numeric segment sorts before a text segment at
/// the same position, so "1.2.0" orders before "1.2.0a".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Segment {
    Number(u64),
    Text(String),
}

/// Comparison key for a tag under the loose ordering.
///
/// The tag is lower-cased and split into segments on '.' and on every
/// transition between a digit run and a non-digit run. Digit runs compare
/// numerically, other runs byte-lexicographically. Keys compare segment by
/// segment; a key that is a strict prefix of another orders first, which is
/// how a missing component gets lowest precedence ("1.2" < "1.2.0a").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct LooseVersion {
    segments: Vec<Segment>,
}

impl LooseVersion {
    pub fn new(tag: &str) -> Self {
        let lowered = tag.to_lowercase();
        let mut segments = Vec::new();

        for part in lowered.split('.') {
            let mut rest = part;
            while !rest.is_empty() {
                let digit = rest.starts_with(|c: char| c.is_ascii_digit());
                let end = rest
                    .find(|c: char| c.is_ascii_digit() != digit)
                    .unwrap_or(rest.len());
                let (run, tail) = rest.split_at(end);

                let segment = if digit {
                    // digit runs too large for u64 keep their text form
                    run.parse::<u64>()
                        .map(Segment::Number)
                        .unwrap_or_else(|_| Segment::Text(run.to_string()))
                } else {
                    Segment::Text(run.to_string())
                };
                segments.push(segment);

                rest = tail;
            }
        }

        Self { segments }
    }
}

/// Anything carrying a release tag. Only the tag participates in ordering.
pub trait Tagged {
    fn tag(&self) -> &str;
}

impl Tagged for String {
    fn tag(&self) -> &str {
        self
    }
}

/// Sort records non-decreasingly by the loose key of their tag.
///
/// The sort is stable: records whose tags compare equal keep their input
/// order. Never fails, whatever the tags look like.
pub fn sort_tagged<R: Tagged>(mut records: Vec<R>) -> Vec<R> {
    records.sort_by_cached_key(|record| LooseVersion::new(record.tag()));
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cmp::Ordering;

    fn loose_cmp(a: &str, b: &str) -> Ordering {
        LooseVersion::new(a).cmp(&LooseVersion::new(b))
    }

    #[rstest]
    #[case("1.5.0", "1.10.0", Ordering::Less)] // numeric, not lexicographic
    #[case("1.10.0", "2.0.0", Ordering::Less)]
    #[case("1.2", "1.2.0a", Ordering::Less)] // shorter prefix first
    #[case("1.2.0", "1.2.0a", Ordering::Less)]
    #[case("1.0.0a", "1.0.0b", Ordering::Less)] // text runs lexicographic
    #[case("1.0.0", "1.0.0", Ordering::Equal)]
    #[case("v1.0.0", "V1.0.0", Ordering::Equal)] // lower-cased before compare
    #[case("1.0.0-alpha", "1.0.0-beta", Ordering::Less)]
    #[case("01.2.3", "1.2.3", Ordering::Equal)] // leading zeros compare numerically
    #[case("garbage", "more-garbage", Ordering::Less)]
    #[case("", "0", Ordering::Less)] // empty key is a prefix of everything
    fn loose_cmp_orders_as_expected(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(loose_cmp(a, b), expected);
        assert_eq!(loose_cmp(b, a), expected.reverse());
    }

    #[test]
    fn huge_digit_runs_still_compare() {
        // Falls back to a text segment rather than failing.
        let huge = "99999999999999999999999999.0";
        assert_eq!(loose_cmp(huge, huge), Ordering::Equal);
        assert_eq!(loose_cmp("1.0", huge), Ordering::Less); // Number < Text
    }

    #[test]
    fn sort_tagged_orders_mixed_prefix_tags() {
        let tags: Vec<String> = ["v2.0.0", "1.5.0", "V1.10.0"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let sorted = sort_tagged(tags);
        assert_eq!(sorted, vec!["1.5.0", "V1.10.0", "v2.0.0"]);
    }

    #[test]
    fn sort_tagged_tolerates_non_semver_tags() {
        let tags: Vec<String> = ["banana", "1.0", "apple", "0.9-final"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let sorted = sort_tagged(tags);
        assert_eq!(sorted, vec!["0.9-final", "1.0", "apple", "banana"]);
    }
}
