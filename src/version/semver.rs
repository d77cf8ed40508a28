use semver::Version;
use tracing::warn;

use crate::version::error::InvalidVersion;

/// Parse a release tag into a semver::Version.
///
/// A leading 'v' or 'V' is stripped first, so "v1.2.3" and "1.2.3" are
/// equivalent inputs. Empty input and anything the strict semver grammar
/// rejects are errors.
///
/// Examples:
/// - "v1.2.3" -> Version(1, 2, 3)
/// - "1.2.3-beta.1" -> Version(1, 2, 3) with pre-release "beta.1"
/// - "" / "not-a-version" -> InvalidVersion
pub fn parse_tag(tag: &str) -> Result<Version, InvalidVersion> {
    if tag.is_empty() {
        return Err(InvalidVersion::Empty);
    }

    let stripped = tag.strip_prefix(['v', 'V']).unwrap_or(tag);

    Version::parse(stripped).map_err(|source| InvalidVersion::Syntax {
        input: tag.to_string(),
        source,
    })
}

/// Resolve the latest release among a set of tags.
///
/// Tags that fail strict parsing are skipped with a warning rather than
/// failing the whole resolution. Ties resolve toward the earlier input tag,
/// so "1.0.0" and "v1.0.0" in that order yield "1.0.0".
///
/// Returns None when no tag parses.
pub fn latest_tag(tags: &[String]) -> Option<&str> {
    let mut latest: Option<(&str, Version)> = None;

    for tag in tags {
        let parsed = match parse_tag(tag) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!("skipping unparseable tag '{}': {}", tag, err);
                continue;
            }
        };

        match &latest {
            Some((_, best)) if parsed <= *best => {}
            _ => latest = Some((tag, parsed)),
        }
    }

    latest.map(|(tag, _)| tag)
}
