//src/profile.rs

/// Decoded form of a composite dbcan profile identifier such as
/// `GH5_2.hmm|EC:3.2.1.4|extra`: pipe-delimited tokens encoding the HMM
/// marker itself, zero or more EC annotations, and free-form composition
/// parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedProfileId {
    /// Marker name without the `.hmm` suffix, e.g. `GH5_2`.
    /// `None` when the identifier carries no `.hmm` token.
    pub subfamily: Option<String>,
    /// Family prefix of the marker name (text before the first `_`),
    /// e.g. `GH5`. First half of a mapping lookup key.
    pub family_key: Option<String>,
    /// Non-EC, non-marker tokens, input order preserved.
    pub composition: Vec<String>,
    /// Full EC annotation tokens, input order preserved.
    pub ec_annotations: Vec<String>,
    /// Lookup keys derived from the EC annotations (text before the first
    /// `:`), always seeded with the `-` sentinel for the no-annotation key.
    pub ec_keys: Vec<String>,
}

/// Splits a composite profile identifier on `|` and classifies each token:
/// a `.hmm` suffix marks the HMM marker (last one wins if repeated), exactly
/// four dot-separated parts mark an EC annotation, anything else is a
/// composition part.
pub fn parse_profile_id(profile_id: &str) -> ParsedProfileId {
    let mut parsed = ParsedProfileId {
        ec_keys: vec!["-".to_string()],
        ..Default::default()
    };

    for token in profile_id.split('|') {
        if token.ends_with(".hmm") {
            let marker = token.split('.').next().unwrap_or(token);
            parsed.subfamily = Some(marker.to_string());
            parsed.family_key = Some(
                marker.split('_').next().unwrap_or(marker).to_string(),
            );
        } else if token.split('.').count() == 4 {
            parsed.ec_annotations.push(token.to_string());
            parsed
                .ec_keys
                .push(token.split(':').next().unwrap_or(token).to_string());
        } else {
            parsed.composition.push(token.to_string());
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_ec_and_composition_tokens() {
        let parsed = parse_profile_id("GH5_2.hmm|EC:3.2.1.4|extra");
        assert_eq!(parsed.subfamily.as_deref(), Some("GH5_2"));
        assert_eq!(parsed.family_key.as_deref(), Some("GH5"));
        assert_eq!(parsed.composition, vec!["extra"]);
        assert_eq!(parsed.ec_annotations, vec!["EC:3.2.1.4"]);
        assert_eq!(parsed.ec_keys, vec!["-", "EC"]);
    }

    #[test]
    fn marker_without_underscore_is_its_own_family() {
        let parsed = parse_profile_id("AA9.hmm");
        assert_eq!(parsed.subfamily.as_deref(), Some("AA9"));
        assert_eq!(parsed.family_key.as_deref(), Some("AA9"));
        assert!(parsed.composition.is_empty());
        assert!(parsed.ec_annotations.is_empty());
        assert_eq!(parsed.ec_keys, vec!["-"]);
    }

    #[test]
    fn ec_token_without_colon_uses_full_token_as_key() {
        let parsed = parse_profile_id("GH13_1.hmm|3.2.1.1");
        assert_eq!(parsed.ec_annotations, vec!["3.2.1.1"]);
        assert_eq!(parsed.ec_keys, vec!["-", "3.2.1.1"]);
    }

    #[test]
    fn missing_marker_leaves_subfamily_unset() {
        let parsed = parse_profile_id("something|else");
        assert_eq!(parsed.subfamily, None);
        assert_eq!(parsed.family_key, None);
        assert_eq!(parsed.composition, vec!["something", "else"]);
    }

    #[test]
    fn join_then_split_round_trips_ordered_lists() {
        let parsed = parse_profile_id("GH13_1.hmm|a|b|3.2.1.1|3.2.1.20");
        assert_eq!(parsed.composition, vec!["a", "b"]);
        assert_eq!(parsed.ec_annotations, vec!["3.2.1.1", "3.2.1.20"]);

        // joined fields re-split on | reproduce the ordered lists
        let composition: Vec<String> = parsed
            .composition
            .join("|")
            .split('|')
            .map(str::to_string)
            .collect();
        assert_eq!(composition, parsed.composition);
        let ecs: Vec<String> = parsed
            .ec_annotations
            .join("|")
            .split('|')
            .map(str::to_string)
            .collect();
        assert_eq!(ecs, parsed.ec_annotations);
    }

    #[test]
    fn last_marker_wins_when_repeated() {
        let parsed = parse_profile_id("GH1.hmm|GH2_3.hmm");
        assert_eq!(parsed.subfamily.as_deref(), Some("GH2_3"));
        assert_eq!(parsed.family_key.as_deref(), Some("GH2"));
    }
}
